// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Our tool has three subcommands, one per cleaning strategy:
// - dedupe: remove duplicate URLs, no validation
// - probe:  remove duplicates, then check each URL with a live HTTP request
// - format: remove duplicates, then check each URL against the known
//           YouTube URL shapes (offline, no network access)
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "yt-link-fixer",
    version = "0.1.0",
    about = "A CLI tool to deduplicate and validate YouTube URLs in CSV media catalogs",
    long_about = "yt-link-fixer reads a CSV mapping media files to YouTube URLs, removes \
                  duplicate URLs, optionally validates each surviving URL, and writes the \
                  cleaned entries (plus any rejected entries) back out as CSV."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (dedupe, probe, format)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove duplicate URLs from the CSV without validating them
    ///
    /// Example: yt-link-fixer dedupe dataset/youtube_urls.csv
    Dedupe {
        /// Path to the input CSV (header line + File,YouTube_URL rows)
        ///
        /// This is a positional argument (required, no flag needed)
        input: PathBuf,

        /// Where to write the cleaned CSV (default: <input stem>_fixed.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the run summary as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Validate each unique URL with a live HTTP HEAD request
    ///
    /// Example: yt-link-fixer probe dataset/youtube_urls.csv --workers 4
    Probe {
        /// Path to the input CSV (header line + File,YouTube_URL rows)
        input: PathBuf,

        /// Where to write the accepted entries (default: <input stem>_fixed.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Where to write the rejected entries (default: <input stem>_removed.csv)
        #[arg(long)]
        removed: Option<PathBuf>,

        /// Number of concurrent validation workers
        ///
        /// Defaults to the number of CPUs reported by the OS, capped at 8
        /// (or 4 if the CPU count cannot be determined)
        #[arg(long)]
        workers: Option<usize>,

        /// Print the run summary as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Validate each unique URL against the known YouTube URL shapes (offline)
    ///
    /// Example: yt-link-fixer format dataset/youtube_urls.csv
    Format {
        /// Path to the input CSV (header line + File,YouTube_URL rows)
        input: PathBuf,

        /// Where to write the accepted entries (default: <input stem>_fixed.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Where to write the rejected entries (default: <input stem>_removed.csv)
        #[arg(long)]
        removed: Option<PathBuf>,

        /// Number of concurrent validation workers
        #[arg(long)]
        workers: Option<usize>,

        /// Print the run summary as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why subcommands instead of a --mode flag?
//    - Each strategy has slightly different arguments (probe/format produce
//      a "removed" file, dedupe does not)
//    - Subcommands give each strategy its own help text
//
// 2. Why Option<PathBuf> for the output paths?
//    - None means "the user didn't pass the flag"
//    - main.rs then derives a sensible default next to the input file
//
// 3. Why PathBuf instead of String?
//    - PathBuf is the owned type for filesystem paths
//    - It handles platform differences (separators, encodings) for us
// -----------------------------------------------------------------------------
