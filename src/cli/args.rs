//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "box2snipe")]
#[command(version, about = "Convert a box catalogue CSV export into a Snipe-IT asset import file")]
#[command(
    long_about = "Reads a box catalogue exported from a spreadsheet as CSV, drops catalogue \
bookkeeping rows (blank, empty, destroyed, unassigned, unprinted, unused, and \
verification lines), flags inconsistent ones for review, and writes the surviving \
boxes as a Snipe-IT asset import CSV."
)]
pub struct Cli {
    /// Catalogue CSV exported from the box spreadsheet
    pub catalogue: PathBuf,

    /// Destination for the Snipe-IT import CSV (created or truncated)
    pub output: PathBuf,
}
