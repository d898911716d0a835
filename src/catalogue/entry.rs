//! Named-field view of one catalogue data row

use csv::StringRecord;
use miette::Diagnostic;
use thiserror::Error;

/// Number of leading cells a data row must carry. Anything past them is
/// spreadsheet clutter and ignored.
pub const MIN_FIELDS: usize = 6;

/// A data row too short to carry the six catalogue columns.
#[derive(Debug, Error, Diagnostic)]
#[error("row {row} has {found} field(s), expected at least 6")]
#[diagnostic(code(box2snipe::catalogue::malformed_row))]
pub struct MalformedRow {
    /// 1-based position of the row in the input file.
    pub row: usize,
    pub found: usize,
}

/// One catalogue data row with its first six cells named.
///
/// `fullness` and `sealed` are carried verbatim even though the Snipe-IT
/// schema has no use for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub box_name: String,
    pub fullness: String,
    pub sealed: String,
    pub location: String,
    pub category: String,
    pub contents: String,
}

impl CatalogueEntry {
    /// Name the first six cells of a raw record.
    ///
    /// `row` is the record's 1-based position in the input file, used only
    /// for error reporting.
    pub fn from_record(record: &StringRecord, row: usize) -> Result<Self, MalformedRow> {
        if record.len() < MIN_FIELDS {
            return Err(MalformedRow {
                row,
                found: record.len(),
            });
        }
        Ok(Self {
            box_name: record[0].to_string(),
            fullness: record[1].to_string(),
            sealed: record[2].to_string(),
            location: record[3].to_string(),
            category: record[4].to_string(),
            contents: record[5].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_names_fields_in_order() {
        let record = StringRecord::from(vec![
            "BX01", "Full", "Sealed", "ShelfA", "Books", "Old Atlas",
        ]);
        let entry = CatalogueEntry::from_record(&record, 7).unwrap();
        assert_eq!(entry.box_name, "BX01");
        assert_eq!(entry.fullness, "Full");
        assert_eq!(entry.sealed, "Sealed");
        assert_eq!(entry.location, "ShelfA");
        assert_eq!(entry.category, "Books");
        assert_eq!(entry.contents, "Old Atlas");
    }

    #[test]
    fn test_from_record_ignores_extra_cells() {
        let record = StringRecord::from(vec![
            "BX01", "Full", "Sealed", "ShelfA", "Books", "Old Atlas", "note", "more",
        ]);
        let entry = CatalogueEntry::from_record(&record, 1).unwrap();
        assert_eq!(entry.contents, "Old Atlas");
    }

    #[test]
    fn test_from_record_rejects_short_row() {
        let record = StringRecord::from(vec!["BX01", "Full"]);
        let err = CatalogueEntry::from_record(&record, 12).unwrap_err();
        assert_eq!(err.row, 12);
        assert_eq!(err.found, 2);
        assert!(err.to_string().contains("row 12"));
    }
}
