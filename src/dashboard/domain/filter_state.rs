/// Filter inputs for one render pass.
///
/// Rebuilt from the current URL and controls every time the table body is
/// rendered; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub only_broken: bool,
    pub only_outdated: bool,
    pub only_noncpan: bool,
}

impl FilterState {
    /// Search text as matched against identifiers: trimmed, lowercased, and
    /// with every `::` turned into `-` so module names match distribution
    /// names.
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase().replace("::", "-")
    }

    pub fn is_unfiltered(&self) -> bool {
        self.normalized_search().is_empty()
            && !self.only_broken
            && !self.only_outdated
            && !self.only_noncpan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_search() {
        let state = FilterState {
            search: "  Foo::Bar::Baz ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.normalized_search(), "foo-bar-baz");
    }

    #[test]
    fn test_is_unfiltered() {
        assert!(FilterState::default().is_unfiltered());
        let whitespace = FilterState {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(whitespace.is_unfiltered());
        let broken = FilterState {
            only_broken: true,
            ..Default::default()
        };
        assert!(!broken.is_unfiltered());
    }
}
