// GUI components module
pub mod price_form;
pub mod snapshot_table;

pub use price_form::PriceForm;
pub use snapshot_table::SnapshotTable;
