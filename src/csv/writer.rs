// src/csv/writer.rs
// =============================================================================
// This module serializes Entry values back to a CSV file.
//
// Output format:
// - Header line: File,YouTube_URL
// - One line per entry, fields separated by a comma
// - A field that contains a literal comma is wrapped in double quotes so
//   the reader can round-trip it
//
// Error handling:
// - Failing to create the file is a "file access" error
// - Failing a write (e.g. disk full) is a "write failure" error
// Both are reported with the offending path via anyhow context.
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::Entry;

// Writes a header line plus one line per entry to the given path
pub fn save_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open output file for writing: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "File,YouTube_URL")
        .with_context(|| format!("failed to write to {}", path.display()))?;

    for entry in entries {
        writeln!(writer, "{},{}", quote_field(&entry.file), quote_field(&entry.url))
            .with_context(|| format!("failed to write to {}", path.display()))?;
    }

    // BufWriter buffers in memory; flush so a full disk shows up here
    // instead of being silently dropped when the writer goes out of scope
    writer
        .flush()
        .with_context(|| format!("failed to write to {}", path.display()))?;

    Ok(())
}

// Wraps a field in double quotes if it contains a comma
//
// Fields without commas are written as-is, matching the input dialect.
fn quote_field(field: &str) -> String {
    if field.contains(',') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}
