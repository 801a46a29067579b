/// Separator between name and version in a package identifier
const ID_SEPARATOR: char = '=';

/// Parsed `"<name>=<version>"` package identifier.
///
/// The split happens on the first `=`; an identifier without one has an
/// empty version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId {
    name: String,
    version: String,
}

impl PackageId {
    pub fn parse(id: &str) -> Self {
        match id.split_once(ID_SEPARATOR) {
            Some((name, version)) => Self {
                name: name.to_string(),
                version: version.to_string(),
            },
            None => Self {
                name: id.to_string(),
                version: String::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Part of the name after the first `/`, used as the release name on the
    /// public index (`perl/Foo-Bar` → `Foo-Bar`).
    pub fn release_name(&self) -> &str {
        self.name
            .split_once('/')
            .map(|(_, release)| release)
            .unwrap_or("")
    }

    /// DOM identity of the row rendering this package.
    pub fn row_key(&self) -> String {
        row_key(&self.name, &self.version)
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.name, ID_SEPARATOR, self.version)
    }
}

/// Strips path, dot and colon characters so the result is usable inside an
/// element id.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '/' | '.' | ':'))
        .collect()
}

/// Row identity for a name/version pair: `pak--<name>-<version>`, both sanitized.
pub fn row_key(name: &str, version: &str) -> String {
    format!(
        "pak--{}-{}",
        sanitize_identifier(name),
        sanitize_identifier(version)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_separator() {
        let id = PackageId::parse("perl/Foo-Bar=1.2=rc1");
        assert_eq!(id.name(), "perl/Foo-Bar");
        assert_eq!(id.version(), "1.2=rc1");
    }

    #[test]
    fn test_parse_without_separator() {
        let id = PackageId::parse("orphan");
        assert_eq!(id.name(), "orphan");
        assert_eq!(id.version(), "");
    }

    #[test]
    fn test_release_name() {
        assert_eq!(PackageId::parse("perl/Moose=2.2").release_name(), "Moose");
        assert_eq!(PackageId::parse("Moose=2.2").release_name(), "");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("perl/Foo::Bar"), "perlFooBar");
        assert_eq!(sanitize_identifier("1.02"), "102");
    }

    #[test]
    fn test_row_key() {
        let id = PackageId::parse("perl/Foo::Bar=1.02");
        assert_eq!(id.row_key(), "pak--perlFooBar-102");
    }

    #[test]
    fn test_display_round_trips_identifier() {
        let id = PackageId::parse("perl/Moose=2.2");
        assert_eq!(id.to_string(), "perl/Moose=2.2");
    }
}
