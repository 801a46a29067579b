use crate::application::dto::FilterFlag;
use crate::shared::Result;

/// DashboardInteractionPort - Inbound port for user interaction
///
/// Every interaction re-runs filter, group and render against the inventory
/// already loaded; none of them fetch.
pub trait DashboardInteractionPort {
    /// Applies new search text (the caller is responsible for debouncing)
    ///
    /// # Arguments
    /// * `text` - Raw search input
    fn apply_search(&mut self, text: &str);

    /// Checks or unchecks one of the filter flags
    ///
    /// # Arguments
    /// * `flag` - Which flag changed
    /// * `checked` - New state of the control
    fn toggle_filter(&mut self, flag: FilterFlag, checked: bool);

    /// Switches the version shown for a package group
    ///
    /// # Arguments
    /// * `name` - Package name (the part before `=`)
    /// * `version` - Version to reveal
    ///
    /// # Errors
    /// Returns an error if no package has that name/version pair
    fn select_version(&mut self, name: &str, version: &str) -> Result<()>;

    /// Ids of the rows currently shown, in render order
    fn shown_ids(&self) -> Vec<String>;
}
