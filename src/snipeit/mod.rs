//! Snipe-IT module - target schema, mapping, and output

pub mod mapper;
pub mod record;
pub mod writer;

pub use mapper::{map_entries, GENERIC_MODEL};
pub use record::{AssetRecord, CSV_HEADERS};
pub use writer::{write_assets, ExportError};
