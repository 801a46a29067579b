use super::package_id::PackageId;

/// All versions of one package name, in global id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    name: String,
    versions: Vec<String>,
}

impl VersionGroup {
    pub fn new(name: String, versions: Vec<String>) -> Self {
        Self { name, versions }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Last listed version. Ordering is lexicographic on the full id, so
    /// `"9"` sorts after `"10"`.
    pub fn latest(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }

    pub fn has_single_version(&self) -> bool {
        self.versions.len() == 1
    }
}

/// One row ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub package: PackageId,
    pub group: VersionGroup,
    pub is_latest: bool,
    /// Shown on first paint: the latest version, or the one picked in the
    /// group's version selector.
    pub visible: bool,
}

impl TableRow {
    pub fn row_key(&self) -> String {
        self.package.row_key()
    }
}
