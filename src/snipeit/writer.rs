//! Import-file output

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::snipeit::record::{AssetRecord, CSV_HEADERS};

/// Failure to land the import file on disk.
#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("cannot create output file {}", .path.display())]
    #[diagnostic(code(box2snipe::snipeit::create))]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to {}", .path.display())]
    #[diagnostic(code(box2snipe::snipeit::write))]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot flush {}", .path.display())]
    #[diagnostic(code(box2snipe::snipeit::flush))]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create or truncate `path` and write the header plus one row per record.
///
/// The header goes out unconditionally; an import file with no assets is
/// still a well-formed upload.
pub fn write_assets(path: &Path, records: &[AssetRecord]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut wtr = csv::Writer::from_writer(BufWriter::new(file));
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    wtr.write_record(CSV_HEADERS).map_err(write_err)?;
    for record in records {
        wtr.write_record(record.fields()).map_err(write_err)?;
    }
    wtr.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn atlas_record() -> AssetRecord {
        AssetRecord {
            item_name: "Old Atlas".to_string(),
            category: "Books".to_string(),
            model_name: "Generic-Model".to_string(),
            asset_tag: "BX01-20240102030405-00000000".to_string(),
            location: "ShelfA".to_string(),
            box_name: "BX01".to_string(),
            ..AssetRecord::default()
        }
    }

    #[test]
    fn test_writes_header_then_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("assets.csv");

        write_assets(&path, &[atlas_record()]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(CSV_HEADERS.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some(",,,Old Atlas,Books,Generic-Model,,,,BX01-20240102030405-00000000,ShelfA,,,,,,,,BX01")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_header_written_even_with_no_records() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("assets.csv");

        write_assets(&path, &[]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("{}\n", CSV_HEADERS.join(",")));
    }

    #[test]
    fn test_quotes_cells_containing_delimiters() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("assets.csv");
        let mut record = atlas_record();
        record.item_name = "Maps, assorted".to_string();

        write_assets(&path, &[record]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Maps, assorted\""));
    }

    #[test]
    fn test_unwritable_path_is_create_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("assets.csv");

        let err = write_assets(&path, &[]).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
    }

    #[test]
    fn test_truncates_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("assets.csv");
        fs::write(&path, "stale content that is much longer than one header line\nand another\n")
            .unwrap();

        write_assets(&path, &[]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("{}\n", CSV_HEADERS.join(",")));
    }
}
