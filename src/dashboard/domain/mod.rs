pub mod column_schema;
pub mod filter_state;
pub mod inventory;
pub mod package_id;
pub mod record;
pub mod table_row;

pub use column_schema::{Column, ColumnSchema, MANDATORY_COLUMNS};
pub use filter_state::FilterState;
pub use inventory::Inventory;
pub use package_id::{row_key, sanitize_identifier, PackageId};
pub use record::{
    field_is_broken, is_broken_sentinel, is_metadata_field, is_truthy, PackageRecord, FIELD_CPAN,
    FIELD_CPAN_VERSION,
};
pub use table_row::{TableRow, VersionGroup};
