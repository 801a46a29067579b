use crate::dashboard::domain::{PackageId, TableRow, VersionGroup};
use std::collections::HashMap;

/// Versions explicitly picked in a group's version selector, by package name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSelections {
    selected: HashMap<String, String>,
}

impl VersionSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, name: &str, version: &str) {
        self.selected.insert(name.to_string(), version.to_string());
    }

    pub fn selected(&self, name: &str) -> Option<&str> {
        self.selected.get(name).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// VersionGrouper service for grouping identifiers by package name
///
/// Version lists always come from the full id set, so a row hidden by a
/// filter still appears as an option in its group's selector and the
/// latest marker does not move when filters change.
pub struct VersionGrouper;

impl VersionGrouper {
    /// Builds name → ordered version list from the full sorted id set
    pub fn groups(all_ids: &[String]) -> HashMap<String, VersionGroup> {
        let mut versions: HashMap<String, Vec<String>> = HashMap::new();
        for id in all_ids {
            let package = PackageId::parse(id);
            versions
                .entry(package.name().to_string())
                .or_default()
                .push(package.version().to_string());
        }

        versions
            .into_iter()
            .map(|(name, versions)| (name.clone(), VersionGroup::new(name, versions)))
            .collect()
    }

    /// Produces one row per visible id, in visible order
    ///
    /// # Arguments
    /// * `visible_ids` - Filtered identifiers, sorted
    /// * `all_ids` - Every identifier in the inventory, sorted
    /// * `selections` - Versions picked in the selectors; a group without a
    ///   selection, or whose selected row was filtered out, shows its latest
    ///   version
    pub fn group(
        visible_ids: &[String],
        all_ids: &[String],
        selections: &VersionSelections,
    ) -> Vec<TableRow> {
        let groups = Self::groups(all_ids);

        visible_ids
            .iter()
            .map(|id| {
                let package = PackageId::parse(id);
                let group = groups.get(package.name()).cloned().unwrap_or_else(|| {
                    VersionGroup::new(
                        package.name().to_string(),
                        vec![package.version().to_string()],
                    )
                });

                let is_latest = group.latest() == Some(package.version());
                // a selection only counts while its row survives the filter
                let selected = selections.selected(package.name()).filter(|selected| {
                    visible_ids.iter().any(|other| {
                        let other = PackageId::parse(other);
                        other.name() == package.name() && other.version() == *selected
                    })
                });
                let visible = match selected {
                    Some(selected) => selected == package.version(),
                    None => is_latest,
                };

                TableRow {
                    id: id.clone(),
                    package,
                    group,
                    is_latest,
                    visible,
                }
            })
            .collect()
    }
}
