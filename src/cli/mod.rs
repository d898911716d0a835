//! CLI module - argument parsing and the conversion pipeline

pub mod args;

pub use args::Cli;

use console::style;
use miette::Result;

use crate::catalogue::{parse_rows, read_rows};
use crate::snipeit::{map_entries, write_assets};

/// Run the whole conversion: read, classify, map, write, summarize.
pub fn run(args: &Cli) -> Result<()> {
    println!(
        "{} Converting {} for Snipe-IT import",
        style("→").blue(),
        style(args.catalogue.display()).yellow()
    );

    let rows = read_rows(&args.catalogue)?;
    let parsed = parse_rows(&rows)?;

    if !parsed.anomalies.is_empty() {
        println!();
        for anomaly in &parsed.anomalies {
            println!("{} {}", style("⚠").yellow(), anomaly);
        }
    }

    let records = map_entries(&parsed.entries);
    write_assets(&args.output, &records)?;

    let dropped = parsed.rows_scanned - parsed.entries.len();
    println!();
    println!("{}", style("─".repeat(50)).dim());
    println!("{}", style("Conversion Summary").bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  Data rows scanned: {}", style(parsed.rows_scanned).cyan());
    println!("  Assets written:    {}", style(records.len()).green());
    if dropped > 0 {
        println!("  Rows dropped:      {}", style(dropped).dim());
    }
    if !parsed.anomalies.is_empty() {
        println!(
            "  Rows flagged:      {}",
            style(parsed.anomalies.len()).yellow()
        );
    }
    println!();
    println!(
        "{} Wrote {}",
        style("✓").green(),
        style(args.output.display()).yellow()
    );

    Ok(())
}
