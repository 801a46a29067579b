use crate::application::dto::{FilterFlag, HistoryAction, HistoryEntry, StatusQuery};
use crate::application::use_cases::inventory_cache::{
    has_changed, product_version, Revalidation, SnapshotCache,
};
use crate::dashboard::domain::{ColumnSchema, Inventory, PackageId, PackageRecord, TableRow};
use crate::dashboard::services::{FilterEngine, SchemaInferencer, VersionGrouper, VersionSelections};
use crate::ports::inbound::DashboardInteractionPort;
use crate::ports::outbound::{CacheStore, InventorySource, ProgressReporter, TableFormatter, TableView};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use serde_json::Value;

/// Maximum number of drifting records listed individually in warnings
const MAX_DRIFT_WARNINGS: usize = 5;

/// State of the currently rendered inventory
struct LoadedInventory {
    inventory: Inventory,
    schema: ColumnSchema,
    sorted_ids: Vec<String>,
}

/// TableController - orchestrates load, cache diff and rendering
///
/// Owns the only mutable state of the dashboard: the loaded inventory, its
/// schema, the filter query and the version selections. Pipeline stages
/// (filter, group, render) are pure functions fed from this state.
///
/// # Type Parameters
/// * `CS` - CacheStore implementation
/// * `TV` - TableView implementation
/// * `PR` - ProgressReporter implementation
pub struct TableController<CS, TV, PR> {
    cache_store: CS,
    view: TV,
    formatter: Box<dyn TableFormatter>,
    progress_reporter: PR,
    query: StatusQuery,
    selections: VersionSelections,
    inventory_cache: SnapshotCache,
    version_cache: SnapshotCache,
    loaded: Option<LoadedInventory>,
}

impl<CS, TV, PR> TableController<CS, TV, PR>
where
    CS: CacheStore,
    TV: TableView,
    PR: ProgressReporter,
{
    /// Creates a new TableController with injected dependencies
    pub fn new(
        cache_store: CS,
        view: TV,
        formatter: Box<dyn TableFormatter>,
        progress_reporter: PR,
        query: StatusQuery,
    ) -> Self {
        Self {
            cache_store,
            view,
            formatter,
            progress_reporter,
            query,
            selections: VersionSelections::new(),
            inventory_cache: SnapshotCache::inventory(),
            version_cache: SnapshotCache::product_version(),
            loaded: None,
        }
    }

    /// Renders whatever the local cache holds, before anything is fetched
    ///
    /// # Returns
    /// `true` if a cached inventory was rendered
    pub fn load_cached(&mut self) -> bool {
        if let Some(version) = self.version_cache.load(&self.cache_store) {
            self.view.show_version(version);
        }

        let Some(raw) = self.inventory_cache.load(&self.cache_store) else {
            return false;
        };

        match Inventory::from_json_str(raw) {
            Ok(inventory) => {
                self.progress_reporter.report(&format!(
                    "📦 Rendering {} cached package(s)",
                    inventory.len()
                ));
                self.render_inventory(inventory);
                true
            }
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: Ignoring unreadable cached inventory: {}", e));
                false
            }
        }
    }

    /// Fetches both endpoints concurrently and re-renders what changed
    ///
    /// Failures are reported as warnings and otherwise ignored: whatever was
    /// rendered from the cache stays on screen.
    pub async fn refresh<IS: InventorySource + ?Sized>(&mut self, source: &IS) {
        self.progress_reporter
            .report_waiting("🌐 Fetching package inventory...");

        let (packages, info) = futures::join!(source.fetch_packages(), source.fetch_info());

        self.apply_packages(packages);
        self.apply_info(info);
    }

    /// Handles an `/all_packages` response
    ///
    /// # Returns
    /// `true` if the response differed from the known snapshot and was rendered
    pub fn apply_packages(&mut self, response: Result<Value>) -> bool {
        let payload = match response {
            Ok(payload) => payload,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not refresh package inventory: {}",
                    e
                ));
                return false;
            }
        };

        let serialized = match serde_json::to_string(&payload) {
            Ok(serialized) => serialized,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not serialize package inventory: {}",
                    e
                ));
                return false;
            }
        };

        if !has_changed(self.inventory_cache.current(), &serialized) {
            self.progress_reporter
                .report_completion("✅ Package inventory is up to date");
            return false;
        }

        let inventory = match Inventory::from_value(payload) {
            Ok(inventory) => inventory,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", e));
                return false;
            }
        };

        if let Revalidation::ChangedNotPersisted(reason) =
            self.inventory_cache.revalidate(&self.cache_store, serialized)
        {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not update the local cache: {}",
                reason
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} package(s)",
            inventory.len()
        ));
        self.render_inventory(inventory);
        true
    }

    /// Handles an `/info` response
    ///
    /// # Returns
    /// `true` if the product version changed and was shown
    pub fn apply_info(&mut self, response: Result<Value>) -> bool {
        let info = match response {
            Ok(info) => info,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not refresh server version: {}",
                    e
                ));
                return false;
            }
        };

        let Some(version) = product_version(&info) else {
            return false;
        };

        let outcome = self
            .version_cache
            .revalidate(&self.cache_store, version.clone());
        if let Revalidation::ChangedNotPersisted(reason) = &outcome {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not update the local cache: {}",
                reason
            ));
        }
        if outcome.is_changed() {
            self.view.show_version(&version);
        }
        outcome.is_changed()
    }

    /// Wraps the current view contents into the output document
    pub fn render_document(&self) -> Result<String> {
        self.formatter.format_document(&self.view.snapshot())
    }

    /// Rows of the current filter pass, in render order
    pub fn rows(&self) -> Vec<TableRow> {
        match &self.loaded {
            Some(loaded) => {
                let visible = FilterEngine::apply(
                    &loaded.sorted_ids,
                    &loaded.inventory,
                    &self.query.filter_state(),
                );
                VersionGrouper::group(&visible, &loaded.sorted_ids, &self.selections)
            }
            None => Vec::new(),
        }
    }

    pub fn query(&self) -> &StatusQuery {
        &self.query
    }

    pub fn schema(&self) -> Option<&ColumnSchema> {
        self.loaded.as_ref().map(|loaded| &loaded.schema)
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        self.loaded.as_ref().map(|loaded| &loaded.inventory)
    }

    pub fn view(&self) -> &TV {
        &self.view
    }

    /// Full re-render: schema, header and body
    fn render_inventory(&mut self, inventory: Inventory) {
        let schema = SchemaInferencer::infer_from(&inventory);
        self.report_schema_drift(&inventory, &schema);

        let sorted_ids = inventory.sorted_ids();
        self.view.replace_head(&self.formatter.format_head(&schema));
        self.selections.clear();
        self.loaded = Some(LoadedInventory {
            inventory,
            schema,
            sorted_ids,
        });
        self.render_body();
    }

    /// Filter, group and render the body from the loaded inventory
    fn render_body(&self) {
        let Some(loaded) = &self.loaded else {
            return;
        };

        let rows = self.rows();
        let empty = PackageRecord::new();
        let markup: String = rows
            .iter()
            .map(|row| {
                let record = loaded.inventory.get(&row.id).unwrap_or(&empty);
                self.formatter.format_row(row, record, &loaded.schema)
            })
            .collect();
        let visible = rows.iter().filter(|row| row.visible).count();

        self.view
            .replace_body(&markup, visible, loaded.inventory.len());
    }

    fn report_schema_drift(&self, inventory: &Inventory, schema: &ColumnSchema) {
        let drift = SchemaInferencer::validate(inventory, schema);
        if drift.is_empty() {
            return;
        }

        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: {} package(s) have fields outside the sampled column layout; they will not be shown.",
            drift.len()
        ));
        for entry in drift.iter().take(MAX_DRIFT_WARNINGS) {
            let mut fields: Vec<String> = entry.unexpected_keys.clone();
            fields.extend(
                entry
                    .unexpected_platforms
                    .iter()
                    .map(|(column, platform)| format!("{}/{}", column, platform)),
            );
            self.progress_reporter
                .report_error(&format!("   - {}: {}", entry.id, fields.join(", ")));
        }
    }

    fn write_location(&self, action: HistoryAction) {
        self.view.push_location(HistoryEntry {
            action,
            url: self.query.to_url(),
        });
    }
}

impl<CS, TV, PR> DashboardInteractionPort for TableController<CS, TV, PR>
where
    CS: CacheStore,
    TV: TableView,
    PR: ProgressReporter,
{
    fn apply_search(&mut self, text: &str) {
        self.query.search = text.to_string();
        self.selections.clear();
        self.write_location(HistoryAction::Push);
        self.render_body();
    }

    fn toggle_filter(&mut self, flag: FilterFlag, checked: bool) {
        self.query.set_flag(flag, checked);
        self.selections.clear();
        let action = if checked {
            HistoryAction::Push
        } else {
            HistoryAction::Replace
        };
        self.write_location(action);
        self.render_body();
    }

    fn select_version(&mut self, name: &str, version: &str) -> Result<()> {
        let known = self.loaded.as_ref().is_some_and(|loaded| {
            loaded.sorted_ids.iter().any(|id| {
                let package = PackageId::parse(id);
                package.name() == name && package.version() == version
            })
        });
        if !known {
            return Err(DashboardError::Validation {
                message: format!("No package {}={} in the inventory", name, version),
            }
            .into());
        }

        self.selections.select(name, version);
        self.render_body();
        Ok(())
    }

    fn shown_ids(&self) -> Vec<String> {
        self.rows()
            .into_iter()
            .filter(|row| row.visible)
            .map(|row| row.id)
            .collect()
    }
}
