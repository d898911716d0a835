//! Row classification: header search, drop rules, anomaly flagging
//!
//! The export starts with free-form preamble (sheet title, export date,
//! column notes), so parsing is a two-state scan: discard rows until the
//! header sentinel appears, then treat everything after it as data. Data
//! rows are classified in priority order; most of the catalogue is
//! bookkeeping that must never reach the import file.

use std::fmt;

use csv::StringRecord;

use crate::catalogue::entry::{CatalogueEntry, MalformedRow};

/// Exact first two header cells that mark the start of catalogue data.
const HEADER_SENTINEL: (&str, &str) = ("Box", "Fullness");

/// Case-insensitive marker for audit rows ("Verification V7" and the like).
const VERIFICATION_PREFIX: &str = "verification v";

/// Where the scan is relative to the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Still inside the preamble; rows are discarded until the sentinel.
    Skipping,
    /// Past the header; every row is data. There is no way back.
    Collecting,
}

/// What classification decided for one data row.
#[derive(Debug, PartialEq, Eq)]
enum Disposition {
    /// Row becomes a [`CatalogueEntry`].
    Keep,
    /// Catalogue bookkeeping, dropped without comment.
    Drop,
    /// Dropped, and inconsistent enough to show a human.
    Flag(AnomalyKind),
}

/// The ways a dropped row can look wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Verification row whose data cells do not all repeat `"V" + suffix`.
    MalformedVerification,
    /// Box marked empty, yet contents are listed.
    EmptyBoxWithData,
    /// Box marked destroyed, yet the row carries data.
    DestroyedBoxWithData,
    /// Box marked unassigned, yet the row carries data.
    UnassignedBoxWithData,
    /// Label never printed, yet the row carries data.
    UnprintedLabelWithData,
    /// Label printed but never used, yet the row carries data.
    UnusedLabelWithData,
    /// No contents to import and the fullness is no known retired state.
    NoContents,
}

impl AnomalyKind {
    /// Operator-facing message. People grep run output for these; keep the
    /// wording stable.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedVerification => "Badly formatted verification line",
            Self::EmptyBoxWithData => "Empty box with data",
            Self::DestroyedBoxWithData => "Destroyed box with data",
            Self::UnassignedBoxWithData => "Unassigned box with data",
            Self::UnprintedLabelWithData => "Unprinted box label with data",
            Self::UnusedLabelWithData => "Unused box label with data",
            Self::NoContents => "Unhandled no data stat",
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dropped row that deserves human review. Advisory only; anomalies
/// never fail the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// 1-based position of the row in the input file.
    pub row: usize,
    pub kind: AnomalyKind,
    /// The raw row, every cell verbatim, trailing clutter included.
    pub fields: Vec<String>,
}

impl Anomaly {
    fn new(row: usize, kind: AnomalyKind, record: &StringRecord) -> Self {
        Self {
            row,
            kind,
            fields: record.iter().map(String::from).collect(),
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}: {:?}", self.row, self.kind, self.fields)
    }
}

/// Everything one pass over the export produced.
#[derive(Debug, Default)]
pub struct ParsedCatalogue {
    /// Importable entries, in catalogue order.
    pub entries: Vec<CatalogueEntry>,
    /// Flagged rows, in catalogue order.
    pub anomalies: Vec<Anomaly>,
    /// Data rows seen after the header, kept or not.
    pub rows_scanned: usize,
}

/// Scan raw rows for the header sentinel, then classify everything after it.
///
/// Rows before the sentinel are preamble and never inspected further. A data
/// row with fewer than six cells aborts the run; every other oddity is at
/// worst an [`Anomaly`].
pub fn parse_rows(rows: &[StringRecord]) -> Result<ParsedCatalogue, MalformedRow> {
    let mut state = ParseState::Skipping;
    let mut parsed = ParsedCatalogue::default();

    for (idx, record) in rows.iter().enumerate() {
        let row = idx + 1;
        match state {
            ParseState::Skipping => {
                if is_header(record) {
                    state = ParseState::Collecting;
                }
            }
            ParseState::Collecting => {
                parsed.rows_scanned += 1;
                let entry = CatalogueEntry::from_record(record, row)?;
                match classify(&entry) {
                    Disposition::Keep => parsed.entries.push(entry),
                    Disposition::Drop => {}
                    Disposition::Flag(kind) => {
                        parsed.anomalies.push(Anomaly::new(row, kind, record));
                    }
                }
            }
        }
    }

    Ok(parsed)
}

/// The header row: `Box` then `Fullness`, exact case. Extra columns do not
/// disqualify it.
fn is_header(record: &StringRecord) -> bool {
    record.get(0) == Some(HEADER_SENTINEL.0) && record.get(1) == Some(HEADER_SENTINEL.1)
}

/// Decide a data row's fate. First matching rule wins.
fn classify(entry: &CatalogueEntry) -> Disposition {
    // A bare label with nothing else filled in: the box exists, there is
    // nothing to import and nothing to complain about.
    if data_cells(entry).iter().all(|cell| cell.is_empty()) {
        return Disposition::Drop;
    }

    if let Some(suffix) = verification_suffix(entry) {
        let expected = format!("V{suffix}");
        if data_cells(entry).iter().any(|cell| *cell != expected) {
            return Disposition::Flag(AnomalyKind::MalformedVerification);
        }
        return Disposition::Drop;
    }

    if let Some(state) = RetiredState::from_fullness(&entry.fullness) {
        return match state.residue(entry) {
            Some(kind) => Disposition::Flag(kind),
            None => Disposition::Drop,
        };
    }

    if entry.contents.is_empty() {
        return Disposition::Flag(AnomalyKind::NoContents);
    }

    Disposition::Keep
}

/// Cells 1-5: everything except the box label.
fn data_cells(entry: &CatalogueEntry) -> [&str; 5] {
    [
        entry.fullness.as_str(),
        entry.sealed.as_str(),
        entry.location.as_str(),
        entry.category.as_str(),
        entry.contents.as_str(),
    ]
}

/// For audit rows ("Verification V2"), the text after the marker ("2").
///
/// The marker is matched on the lowercased label but the cut happens on the
/// raw one; `get` keeps a multibyte label from panicking the slice.
fn verification_suffix(entry: &CatalogueEntry) -> Option<&str> {
    if entry.box_name.to_lowercase().starts_with(VERIFICATION_PREFIX) {
        Some(
            entry
                .box_name
                .get(VERIFICATION_PREFIX.len()..)
                .unwrap_or_default(),
        )
    } else {
        None
    }
}

/// Fullness values meaning the box contributes no importable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetiredState {
    Empty,
    Destroyed,
    Unassigned,
    NotPrinted,
    PrintedUnused,
}

impl RetiredState {
    /// Match a raw fullness cell against the retired states.
    fn from_fullness(fullness: &str) -> Option<Self> {
        match fullness.trim().to_lowercase().as_str() {
            "empty" => Some(Self::Empty),
            "destroyed" => Some(Self::Destroyed),
            "unassigned" => Some(Self::Unassigned),
            "not printed" => Some(Self::NotPrinted),
            "printed-unused" => Some(Self::PrintedUnused),
            _ => None,
        }
    }

    /// Data lingering in a row that claims this state, if any.
    ///
    /// An empty box flags only on listed contents; a lingering location or
    /// seal note is tolerated (boxes sit somewhere even when cleared out).
    /// The other states tolerate nothing past the fullness cell.
    fn residue(self, entry: &CatalogueEntry) -> Option<AnomalyKind> {
        let kind = match self {
            Self::Empty => {
                return (!entry.contents.is_empty()).then_some(AnomalyKind::EmptyBoxWithData);
            }
            Self::Destroyed => AnomalyKind::DestroyedBoxWithData,
            Self::Unassigned => AnomalyKind::UnassignedBoxWithData,
            Self::NotPrinted => AnomalyKind::UnprintedLabelWithData,
            Self::PrintedUnused => AnomalyKind::UnusedLabelWithData,
        };
        let lingering = !entry.sealed.is_empty()
            || !entry.location.is_empty()
            || !entry.category.is_empty()
            || !entry.contents.is_empty();
        lingering.then_some(kind)
    }
}
