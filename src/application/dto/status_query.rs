use crate::dashboard::domain::FilterState;

/// Path the dashboard lives under; filter state is encoded in its query
pub const STATUS_PATH: &str = "/status";

/// Query parameter carrying the search text
const SEARCH_PARAM: &str = "s=";

/// One of the boolean filter controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFlag {
    /// Only packages with an explicit build failure
    Broken,
    /// Only packages with a newer release on the public index
    Outdated,
    /// Only packages not tracked on the public index
    NonCpan,
}

impl FilterFlag {
    pub const ALL: [FilterFlag; 3] = [FilterFlag::Broken, FilterFlag::Outdated, FilterFlag::NonCpan];

    /// Query fragment enabling this flag
    pub fn query_param(self) -> &'static str {
        match self {
            FilterFlag::Broken => "broken=1",
            FilterFlag::Outdated => "outdated=1",
            FilterFlag::NonCpan => "noncpan=1",
        }
    }
}

impl std::str::FromStr for FilterFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broken" | "problematic" => Ok(FilterFlag::Broken),
            "outdated" => Ok(FilterFlag::Outdated),
            "noncpan" | "non-cpan" => Ok(FilterFlag::NonCpan),
            _ => Err(format!(
                "Unknown filter: {}. Expected 'broken', 'outdated' or 'noncpan'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FilterFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterFlag::Broken => write!(f, "broken"),
            FilterFlag::Outdated => write!(f, "outdated"),
            FilterFlag::NonCpan => write!(f, "noncpan"),
        }
    }
}

/// How a location change is recorded in the browsing history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Push,
    Replace,
}

/// A location change written back after an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub action: HistoryAction,
    pub url: String,
}

/// StatusQuery - the address-bar form of the filter state
///
/// Parsing is deliberately loose: a flag is on when its `name=1` fragment
/// appears anywhere in the URL, and the search text is whatever follows the
/// only `s=` in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusQuery {
    pub search: String,
    pub only_broken: bool,
    pub only_outdated: bool,
    pub only_noncpan: bool,
}

impl StatusQuery {
    pub fn from_url(url: &str) -> Self {
        let pieces: Vec<&str> = url.split(SEARCH_PARAM).collect();
        let search = if pieces.len() == 2 {
            urlencoding::decode(pieces[1])
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| pieces[1].to_string())
        } else {
            String::new()
        };

        Self {
            search,
            only_broken: url.contains(FilterFlag::Broken.query_param()),
            only_outdated: url.contains(FilterFlag::Outdated.query_param()),
            only_noncpan: url.contains(FilterFlag::NonCpan.query_param()),
        }
    }

    /// Composes `/status?...` with the enabled flags followed by the
    /// lowercased search text
    pub fn to_url(&self) -> String {
        let mut params: Vec<String> = FilterFlag::ALL
            .iter()
            .filter(|flag| self.flag(**flag))
            .map(|flag| flag.query_param().to_string())
            .collect();

        let search = self.search.to_lowercase();
        if !search.is_empty() {
            params.push(format!("{}{}", SEARCH_PARAM, urlencoding::encode(&search)));
        }

        if params.is_empty() {
            STATUS_PATH.to_string()
        } else {
            format!("{}?{}", STATUS_PATH, params.join("&"))
        }
    }

    pub fn flag(&self, flag: FilterFlag) -> bool {
        match flag {
            FilterFlag::Broken => self.only_broken,
            FilterFlag::Outdated => self.only_outdated,
            FilterFlag::NonCpan => self.only_noncpan,
        }
    }

    pub fn set_flag(&mut self, flag: FilterFlag, checked: bool) {
        match flag {
            FilterFlag::Broken => self.only_broken = checked,
            FilterFlag::Outdated => self.only_outdated = checked,
            FilterFlag::NonCpan => self.only_noncpan = checked,
        }
    }

    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone(),
            only_broken: self.only_broken,
            only_outdated: self.only_outdated,
            only_noncpan: self.only_noncpan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_url_flags_are_substring_matches() {
        let query = StatusQuery::from_url("http://pakket.local/status?outdated=1&broken=1");
        assert!(query.only_broken);
        assert!(query.only_outdated);
        assert!(!query.only_noncpan);
        assert!(query.search.is_empty());
    }

    #[test]
    fn test_from_url_search() {
        let query = StatusQuery::from_url("/status?noncpan=1&s=foo-bar");
        assert!(query.only_noncpan);
        assert_eq!(query.search, "foo-bar");
    }

    #[test]
    fn test_from_url_decodes_search() {
        let query = StatusQuery::from_url("/status?s=foo%3A%3Abar");
        assert_eq!(query.search, "foo::bar");
    }

    #[test]
    fn test_from_url_ambiguous_search_is_ignored() {
        let query = StatusQuery::from_url("/status?s=a&s=b");
        assert!(query.search.is_empty());
    }

    #[test]
    fn test_to_url_without_filters() {
        assert_eq!(StatusQuery::default().to_url(), "/status");
    }

    #[test]
    fn test_to_url_orders_flags_then_search() {
        let query = StatusQuery {
            search: "Moose".to_string(),
            only_broken: true,
            only_outdated: false,
            only_noncpan: true,
        };
        assert_eq!(query.to_url(), "/status?broken=1&noncpan=1&s=moose");
    }

    #[test]
    fn test_to_url_round_trips_through_from_url() {
        let query = StatusQuery {
            search: "foo::bar baz".to_string(),
            only_broken: false,
            only_outdated: true,
            only_noncpan: false,
        };
        let parsed = StatusQuery::from_url(&query.to_url());
        assert_eq!(parsed.search, "foo::bar baz");
        assert!(parsed.only_outdated);
    }

    #[test]
    fn test_set_flag() {
        let mut query = StatusQuery::default();
        query.set_flag(FilterFlag::Outdated, true);
        assert!(query.flag(FilterFlag::Outdated));
        query.set_flag(FilterFlag::Outdated, false);
        assert!(!query.flag(FilterFlag::Outdated));
    }

    #[test]
    fn test_filter_flag_from_str() {
        assert_eq!(FilterFlag::from_str("broken").unwrap(), FilterFlag::Broken);
        assert_eq!(FilterFlag::from_str("NONCPAN").unwrap(), FilterFlag::NonCpan);
        assert!(FilterFlag::from_str("latest").is_err());
    }

    #[test]
    fn test_filter_state_carries_search_verbatim() {
        let query = StatusQuery::from_url("/status?broken=1&s=Foo");
        let state = query.filter_state();
        assert_eq!(state.search, "Foo");
        assert!(state.only_broken);
    }
}
