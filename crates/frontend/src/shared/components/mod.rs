pub mod alert_modal;
pub mod api_list;
pub mod data_table;
pub mod entity_form;
pub mod entity_list;
pub mod heading;
pub mod record_gate;
pub mod ui;

pub use alert_modal::AlertModal;
pub use api_list::ApiList;
pub use data_table::DataTable;
pub use entity_form::EntityForm;
pub use entity_list::EntityListClient;
pub use heading::Heading;
pub use record_gate::RecordGate;
