//! Whole-file CSV loading

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use miette::Diagnostic;
use thiserror::Error;

/// Failure to get rows out of the catalogue file.
#[derive(Debug, Error, Diagnostic)]
pub enum ReadError {
    #[error("cannot open catalogue file {}", .path.display())]
    #[diagnostic(code(box2snipe::catalogue::open))]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not well-formed CSV", .path.display())]
    #[diagnostic(code(box2snipe::catalogue::not_csv))]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedKind,
    },
}

/// What made the file unparseable.
#[derive(Debug, Error)]
pub enum MalformedKind {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("bare quote in an unquoted field on row {row}")]
    BareQuote { row: usize },

    #[error("text after a closing quote on row {row}")]
    TextAfterQuote { row: usize },

    #[error("quoted field opened on row {row} is never closed")]
    UnclosedQuote { row: usize },
}

/// Load every row of the export into memory, preamble included.
///
/// Quoting is checked strictly up front; the crate parser alone would
/// recover from an unbalanced quote by folding the rest of the file into
/// the open field. Width is not enforced here: preamble rows are free-form,
/// and the parser validates data rows itself. Cells pass through untrimmed.
pub fn read_rows(path: &Path) -> Result<Vec<StringRecord>, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    check_quoting(&bytes).map_err(|source| ReadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result.map_err(|source| ReadError::Malformed {
            path: path.to_path_buf(),
            source: source.into(),
        })?);
    }
    Ok(rows)
}

/// Where the quote scan is inside the current field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteScan {
    /// At a field boundary; a quote here opens a quoted field.
    FieldStart,
    /// Inside an unquoted field; a quote here is an error.
    Unquoted,
    /// Inside an open quoted field; separators and newlines are literal.
    Quoted,
    /// Saw a quote inside a quoted field; the next byte decides between an
    /// escaped quote and the close of the field.
    AfterQuote,
}

/// Strict quote check over the raw bytes, ahead of the lenient crate parser.
///
/// Fatal findings: a bare quote inside an unquoted field, text after a
/// closing quote, and a quoted field still open at end of file. Row numbers
/// are 1-based record positions; terminators inside an open quoted field do
/// not advance them.
fn check_quoting(bytes: &[u8]) -> Result<(), MalformedKind> {
    let mut state = QuoteScan::FieldStart;
    let mut row = 1;
    let mut opened_on = 1;

    for &byte in bytes {
        state = match state {
            QuoteScan::FieldStart => match byte {
                b'"' => {
                    opened_on = row;
                    QuoteScan::Quoted
                }
                b',' => QuoteScan::FieldStart,
                b'\n' => {
                    row += 1;
                    QuoteScan::FieldStart
                }
                b'\r' => QuoteScan::FieldStart,
                _ => QuoteScan::Unquoted,
            },
            QuoteScan::Unquoted => match byte {
                b'"' => return Err(MalformedKind::BareQuote { row }),
                b',' => QuoteScan::FieldStart,
                b'\n' => {
                    row += 1;
                    QuoteScan::FieldStart
                }
                b'\r' => QuoteScan::FieldStart,
                _ => QuoteScan::Unquoted,
            },
            QuoteScan::Quoted => match byte {
                b'"' => QuoteScan::AfterQuote,
                _ => QuoteScan::Quoted,
            },
            QuoteScan::AfterQuote => match byte {
                b'"' => QuoteScan::Quoted,
                b',' => QuoteScan::FieldStart,
                b'\n' => {
                    row += 1;
                    QuoteScan::FieldStart
                }
                b'\r' => QuoteScan::FieldStart,
                _ => return Err(MalformedKind::TextAfterQuote { row }),
            },
        };
    }

    if state == QuoteScan::Quoted {
        return Err(MalformedKind::UnclosedQuote { row: opened_on });
    }
    Ok(())
}
