//! Catalogue module - reading and classifying the source export

pub mod entry;
pub mod parser;
pub mod reader;

pub use entry::{CatalogueEntry, MalformedRow};
pub use parser::{parse_rows, Anomaly, AnomalyKind, ParsedCatalogue};
pub use reader::{read_rows, MalformedKind, ReadError};
