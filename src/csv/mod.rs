// src/csv/mod.rs
// =============================================================================
// This module contains all CSV reading and writing logic.
//
// Submodules:
// - reader: Parses the input CSV into Entry values
// - writer: Serializes Entry values back to a CSV file
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// The CSV dialect is deliberately small: a header line, comma-separated
// fields, and optional double-quote wrapping for fields that contain
// commas. Only the first two columns (File, YouTube_URL) are meaningful;
// anything after them is ignored.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod reader;
mod writer;

// Re-export public items from submodules
// This lets users write `csv::load_entries()` instead of
// `csv::reader::load_entries()`
pub use reader::{load_entries, Entry};
pub use writer::save_entries;
