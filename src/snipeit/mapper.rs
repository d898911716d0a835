//! Catalogue entries to Snipe-IT records

use chrono::{DateTime, Local};

use crate::catalogue::CatalogueEntry;
use crate::snipeit::record::AssetRecord;

/// Model name stamped on every import row; the boxes are containers, not
/// tracked hardware models.
pub const GENERIC_MODEL: &str = "Generic-Model";

/// Produce one import row per entry, in catalogue order. Cannot fail.
pub fn map_entries(entries: &[CatalogueEntry]) -> Vec<AssetRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| asset_record(entry, index, Local::now()))
        .collect()
}

fn asset_record(entry: &CatalogueEntry, index: usize, now: DateTime<Local>) -> AssetRecord {
    AssetRecord {
        item_name: entry.contents.clone(),
        category: entry.category.clone(),
        model_name: GENERIC_MODEL.to_string(),
        asset_tag: asset_tag(&entry.box_name, index, now),
        location: entry.location.clone(),
        box_name: entry.box_name.clone(),
        ..AssetRecord::default()
    }
}

/// `LABEL-YYYYMMDDHHMMSS-XXXXXXXX`: box label, wall-clock stamp, zero-padded
/// run index. The index is what keeps tags unique when every row maps within
/// the same second.
fn asset_tag(box_name: &str, index: usize, now: DateTime<Local>) -> String {
    format!("{}-{}-{:08}", box_name, now.format("%Y%m%d%H%M%S"), index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn atlas_entry() -> CatalogueEntry {
        CatalogueEntry {
            box_name: "BX01".to_string(),
            fullness: "Full".to_string(),
            sealed: "Sealed".to_string(),
            location: "ShelfA".to_string(),
            category: "Books".to_string(),
            contents: "Old Atlas".to_string(),
        }
    }

    #[test]
    fn test_mapped_fields() {
        let record = asset_record(&atlas_entry(), 0, stamp());
        assert_eq!(record.item_name, "Old Atlas");
        assert_eq!(record.category, "Books");
        assert_eq!(record.model_name, GENERIC_MODEL);
        assert_eq!(record.location, "ShelfA");
        assert_eq!(record.box_name, "BX01");
        // Fullness and sealed never cross over, and nothing else fills in.
        assert_eq!(record.full_name, "");
        assert_eq!(record.serial_number, "");
        assert_eq!(record.status, "");
        assert_eq!(record.supplier, "");
    }

    #[test]
    fn test_asset_tag_layout() {
        assert_eq!(
            asset_tag("BX01", 3, stamp()),
            "BX01-20240102030405-00000003"
        );
    }

    #[test]
    fn test_asset_tag_pads_index_to_eight_digits() {
        assert!(asset_tag("BX01", 0, stamp()).ends_with("-00000000"));
        assert!(asset_tag("BX01", 12_345_678, stamp()).ends_with("-12345678"));
    }

    #[test]
    fn test_map_entries_indexes_in_catalogue_order() {
        let mut second = atlas_entry();
        second.box_name = "BX02".to_string();
        let records = map_entries(&[atlas_entry(), second]);

        assert_eq!(records.len(), 2);
        assert!(records[0].asset_tag.starts_with("BX01-"));
        assert!(records[0].asset_tag.ends_with("-00000000"));
        assert!(records[1].asset_tag.starts_with("BX02-"));
        assert!(records[1].asset_tag.ends_with("-00000001"));
    }

    #[test]
    fn test_map_entries_empty_input() {
        assert!(map_entries(&[]).is_empty());
    }
}
