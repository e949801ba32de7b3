// src/csv/reader.rs
// =============================================================================
// This module parses the input CSV into Entry values.
//
// Parsing rules:
// - Line 1 is a header and is always skipped
// - A line containing a double quote is split quote-aware: quotes toggle
//   an "inside field" mode and commas inside quotes do not split fields
// - Any other line is split naively on its first two commas
// - Every field is trimmed of leading/trailing whitespace
// - A row survives only if its file field is non-empty and its URL field
//   starts with "http"; anything else is a warning on stderr, not an error
//
// Rust concepts:
// - BufReader: Buffered reading so we don't hit the OS for every line
// - Iterators: lines() gives us an iterator over Result<String>
// - Option<T>: parse helpers return None for rows we cannot use
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One file-to-URL association parsed from the input CSV.
///
/// Entries are created here and treated as read-only everywhere else:
/// the deduplicator and worker pool move them around but never edit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The media file name (first CSV column)
    pub file: String,
    /// The YouTube URL (second CSV column)
    pub url: String,
}

// Loads all usable entries from a CSV file
//
// Returns an error only if the file itself cannot be opened or read.
// Individual bad rows are skipped with a warning instead - data quality
// problems in one row shouldn't throw away the rest of the file.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    // Skip the header line; an empty file just yields no entries
    match lines.next() {
        Some(header) => {
            header.with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => return Ok(Vec::new()),
    }

    let mut entries = Vec::new();

    for (index, line) in lines.enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        // +2 because the header was line 1 and enumerate starts at 0
        let line_number = index + 2;

        // Quoted lines need the quote-aware splitter; everything else
        // takes the fast naive path (split on the first two commas)
        let fields = if line.contains('"') {
            let fields = split_quoted(&line);
            if fields.len() < 2 {
                eprintln!("⚠️  Warning: skipping malformed line {}: {}", line_number, line);
                continue;
            }
            fields
        } else {
            split_naive(&line)
        };

        let file_field = &fields[0];
        let url_field = &fields[1];

        if !file_field.is_empty() && url_field.starts_with("http") {
            entries.push(Entry {
                file: file_field.clone(),
                url: url_field.clone(),
            });
        } else {
            eprintln!("⚠️  Warning: skipping invalid entry at line {}", line_number);
        }
    }

    Ok(entries)
}

// Splits a line that contains double quotes
//
// Quotes toggle an "inside field" flag; commas inside quotes are part of
// the field, commas outside quotes end it. The quote characters themselves
// are not kept. Each field is trimmed as it is produced.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    // Don't forget the last field (there's no trailing comma)
    fields.push(current.trim().to_string());

    fields
}

// Splits a line without quotes on its first two commas
//
// Always returns exactly two (trimmed) fields; missing columns come back
// as empty strings and get rejected by the caller's validity check.
// Anything after the second comma is ignored.
fn split_naive(line: &str) -> Vec<String> {
    let mut parts = line.splitn(3, ',');
    let file_field = parts.next().unwrap_or("").trim().to_string();
    let url_field = parts.next().unwrap_or("").trim().to_string();
    vec![file_field, url_field]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_split_quoted_comma_inside_quotes() {
        let fields = split_quoted("\"clip, final.mp4\",https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], "clip, final.mp4");
        assert_eq!(fields[1], "https://youtu.be/dQw4w9WgXcQ");
    }

    #[test]
    fn test_split_quoted_trims_whitespace() {
        let fields = split_quoted("\" a.mp4 \" , https://youtu.be/dQw4w9WgXcQ ");
        assert_eq!(fields[0], "a.mp4");
        assert_eq!(fields[1], "https://youtu.be/dQw4w9WgXcQ");
    }

    #[test]
    fn test_split_naive_ignores_extra_columns() {
        let fields = split_naive("a.mp4,https://youtu.be/dQw4w9WgXcQ,extra,columns");
        assert_eq!(fields, vec!["a.mp4", "https://youtu.be/dQw4w9WgXcQ"]);
    }

    #[test]
    fn test_split_naive_missing_url_is_empty() {
        let fields = split_naive("a.mp4");
        assert_eq!(fields, vec!["a.mp4", ""]);
    }

    #[test]
    fn test_load_skips_header_and_bad_rows() {
        let csv = write_csv(
            "File,YouTube_URL\n\
             a.mp4,https://youtu.be/xxxxxxxxxxx\n\
             ,https://youtu.be/yyyyyyyyyyy\n\
             c.mp4,ftp://bad\n\
             d.mp4,  https://youtube.com/watch?v=dQw4w9WgXcQ  \n",
        );

        let entries = load_entries(csv.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file, "a.mp4");
        assert_eq!(entries[0].url, "https://youtu.be/xxxxxxxxxxx");
        // Whitespace around fields is trimmed
        assert_eq!(entries[1].file, "d.mp4");
        assert_eq!(entries[1].url, "https://youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_load_malformed_quoted_line_is_not_fatal() {
        // A quoted line with no comma at all produces a single field,
        // which is malformed but must not abort the whole read
        let csv = write_csv(
            "File,YouTube_URL\n\
             \"no comma here\"\n\
             a.mp4,https://youtu.be/xxxxxxxxxxx\n",
        );

        let entries = load_entries(csv.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file, "a.mp4");
    }

    #[test]
    fn test_load_empty_file_yields_no_entries() {
        let csv = write_csv("");
        let entries = load_entries(csv.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_header_only_yields_no_entries() {
        let csv = write_csv("File,YouTube_URL\n");
        let entries = load_entries(csv.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = load_entries(Path::new("/no/such/file.csv"));
        assert!(result.is_err());
    }
}
