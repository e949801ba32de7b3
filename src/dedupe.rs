// src/dedupe.rs
// =============================================================================
// This module removes entries whose URL has already been seen.
//
// How it works:
// - Walk the entries in order
// - Keep an entry only if its URL inserts cleanly into a HashSet
// - First occurrence wins, so the original order is preserved
//
// The set only lives for the duration of the pass; callers never see it.
//
// Rust concepts:
// - HashSet: O(1) membership test, insert() returns false on duplicates
// - into_iter()/filter(): Consume the input Vec and keep matching items
// =============================================================================

use std::collections::HashSet;

use crate::csv::Entry;

// Keeps the first entry for each distinct URL, dropping later duplicates
pub fn dedupe_by_url(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen_urls = HashSet::new();

    entries
        .into_iter()
        .filter(|entry| seen_urls.insert(entry.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(file: &str, url: &str) -> Entry {
        Entry {
            file: file.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_first_occurrence_wins_in_order() {
        // URLs in order [A, B, A, C] must come out as [A, B, C]
        let entries = vec![
            entry("1.mp4", "https://youtu.be/aaaaaaaaaaa"),
            entry("2.mp4", "https://youtu.be/bbbbbbbbbbb"),
            entry("3.mp4", "https://youtu.be/aaaaaaaaaaa"),
            entry("4.mp4", "https://youtu.be/ccccccccccc"),
        ];

        let unique = dedupe_by_url(entries);

        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0].file, "1.mp4");
        assert_eq!(unique[1].file, "2.mp4");
        assert_eq!(unique[2].file, "4.mp4");
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let entries = vec![
            entry("1.mp4", "https://youtu.be/aaaaaaaaaaa"),
            entry("2.mp4", "https://youtu.be/aaaaaaaaaaa"),
            entry("3.mp4", "https://youtu.be/bbbbbbbbbbb"),
        ];

        let once = dedupe_by_url(entries);
        let twice = dedupe_by_url(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_file_different_urls_are_kept() {
        // Deduplication is by URL only; the file field doesn't matter
        let entries = vec![
            entry("same.mp4", "https://youtu.be/aaaaaaaaaaa"),
            entry("same.mp4", "https://youtu.be/bbbbbbbbbbb"),
        ];

        let unique = dedupe_by_url(entries);
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_by_url(Vec::new()).is_empty());
    }

    // End-to-end scenario: read -> dedupe -> write, checking the exact
    // bytes that land in the output file
    #[test]
    fn test_read_dedupe_write_scenario() {
        use crate::csv::{load_entries, save_entries};
        use std::io::Write;

        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(
            input,
            "File,YouTube_URL\n\
             a.mp4,https://youtu.be/xxxxxxxxxxx\n\
             b.mp4,https://youtu.be/xxxxxxxxxxx\n\
             c.mp4,ftp://bad\n"
        )
        .unwrap();

        // c.mp4 is dropped by the reader (not an http URL)
        let entries = load_entries(input.path()).unwrap();
        assert_eq!(entries.len(), 2);

        // b.mp4 is dropped as a duplicate URL
        let unique = dedupe_by_url(entries);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].file, "a.mp4");

        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("fixed.csv");
        save_entries(&out_path, &unique).unwrap();

        let contents = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(
            contents,
            "File,YouTube_URL\na.mp4,https://youtu.be/xxxxxxxxxxx\n"
        );
    }
}
