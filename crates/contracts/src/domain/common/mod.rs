//! Common types and traits for all catalog entities

pub mod api_reference;
pub mod collection;
pub mod columns;
pub mod entity;
pub mod paths;

// Re-exports
pub use api_reference::{api_reference, ApiEndpoint, EndpointVariant};
pub use collection::EntityCollection;
pub use columns::{filter_rows, yes_no, ColumnDef, ColumnKind, TableRow};
pub use entity::{EntityDraft, EntityRecord, FormMessages, FormMode, GENERIC_FAILURE, SAVE_CHANGES};
pub use paths::{is_valid_store_id, store_id_from_path, ResourcePaths, NEW_ENTITY_SEGMENT};
