//! box2snipe: box catalogue to Snipe-IT converter
//!
//! Reads a manually maintained box catalogue (a spreadsheet exported as CSV),
//! drops the bookkeeping rows, flags the suspicious ones, and writes the
//! survivors as a Snipe-IT asset import file.

pub mod catalogue;
pub mod cli;
pub mod snipeit;
