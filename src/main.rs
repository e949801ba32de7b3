// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the input CSV and drop duplicate URLs
// 3. If a validation strategy was chosen, run the worker pool over the
//    unique entries
// 4. Write the accepted (and, when validating, rejected) entries to CSV
// 5. Print a summary and exit with the proper code (0 = success, 1 = error)
//
// Rust concepts used:
// - async/await: Because URL probing makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - URL validation strategies and the worker pool
mod cli; // src/cli.rs - command-line parsing
mod csv; // src/csv/ - CSV reading and writing
mod dedupe; // src/dedupe.rs - duplicate URL removal

// Import items we need from our modules
use checker::Validator;
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::{Path, PathBuf};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Every failure path funnels through here: file access problems,
    // write failures, and HTTP client initialization all exit with 1
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used; each one is the same pipeline
    // with a different (or no) validation strategy plugged in
    match cli.command {
        Commands::Dedupe { input, output, json } => {
            clean(&input, output, None, None, None, json).await
        }
        Commands::Probe {
            input,
            output,
            removed,
            workers,
            json,
        } => {
            let validator = Validator::probe()?;
            clean(&input, output, removed, Some(validator), workers, json).await
        }
        Commands::Format {
            input,
            output,
            removed,
            workers,
            json,
        } => {
            clean(&input, output, removed, Some(Validator::format()), workers, json).await
        }
    }
}

// Summary counts for one run, printed as text or (with --json) as JSON
#[derive(Debug, Serialize)]
struct RunSummary {
    loaded: usize,
    unique: usize,
    duplicates_removed: usize,
    valid: usize,
    invalid: usize,
    output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<PathBuf>,
}

// The whole pipeline: read -> dedupe -> (validate) -> write -> summarize
//
// Parameters:
//   input: path of the CSV to clean
//   output: where to write accepted entries (None = derive from input)
//   removed: where to write rejected entries (None = derive from input)
//   validator: None to skip validation entirely
//   workers: worker count override for the pool
//   json: print the summary as JSON instead of plain text
async fn clean(
    input: &Path,
    output: Option<PathBuf>,
    removed: Option<PathBuf>,
    validator: Option<Validator>,
    workers: Option<usize>,
    json: bool,
) -> Result<()> {
    println!("🔍 Loading CSV file: {}", input.display());
    let entries = csv::load_entries(input)?;
    println!("📄 Total entries loaded: {}", entries.len());

    if entries.is_empty() {
        println!("✅ No valid entries found, nothing to process.");
        return Ok(());
    }

    let loaded = entries.len();
    let unique_entries = dedupe::dedupe_by_url(entries);
    let unique = unique_entries.len();

    println!("🔗 Unique entries to check: {}", unique);
    println!("♻️  Duplicate entries removed: {}", loaded - unique);

    let output = output.unwrap_or_else(|| derive_path(input, "fixed"));
    let removed = removed.unwrap_or_else(|| derive_path(input, "removed"));
    let validating = validator.is_some();

    // Without a validator every unique entry is accepted as-is
    let (valid_entries, invalid_entries) = match validator {
        Some(validator) => {
            let workers = workers.unwrap_or_else(checker::default_worker_count);
            println!("\n🌐 Starting URL validation with {} workers...\n", workers);

            let partition = checker::run_pool(unique_entries, validator, workers).await;
            println!("URL validation complete!");
            (partition.valid, partition.invalid)
        }
        None => (unique_entries, Vec::new()),
    };

    csv::save_entries(&output, &valid_entries)?;

    // The rejected-entries file only exists when a validator ran;
    // plain deduplication has nothing to reject
    if validating {
        csv::save_entries(&removed, &invalid_entries)?;
    }

    let summary = RunSummary {
        loaded,
        unique,
        duplicates_removed: loaded - unique,
        valid: valid_entries.len(),
        invalid: invalid_entries.len(),
        output,
        removed: validating.then_some(removed),
    };

    print_summary(&summary, json)
}

// Derives a default output path next to the input file
//
// dataset/youtube_urls.csv + "fixed" -> dataset/youtube_urls_fixed.csv
fn derive_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("youtube_urls");
    input.with_file_name(format!("{}_{}.csv", stem, suffix))
}

// Prints the summary either as plain text or JSON
fn print_summary(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        // Serialize the summary to JSON and print
        let json_output = serde_json::to_string_pretty(summary)?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("\n📊 Summary:");
    println!("   📄 Entries loaded: {}", summary.loaded);
    println!("   🔗 Unique URLs: {}", summary.unique);
    println!("   ♻️  Duplicates removed: {}", summary.duplicates_removed);
    if summary.removed.is_some() {
        println!("   ✅ Valid: {}", summary.valid);
        println!("   ❌ Invalid: {}", summary.invalid);
    }
    println!("   💾 Cleaned file saved to: {}", summary.output.display());
    if let Some(removed) = &summary.removed {
        println!("   🗑️  Removed URLs saved to: {}", removed.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_path_keeps_directory() {
        let path = derive_path(Path::new("dataset/youtube_urls.csv"), "fixed");
        assert_eq!(path, Path::new("dataset/youtube_urls_fixed.csv"));
    }

    #[test]
    fn test_derive_path_removed_suffix() {
        let path = derive_path(Path::new("urls.csv"), "removed");
        assert_eq!(path, Path::new("urls_removed.csv"));
    }

    #[test]
    fn test_summary_serializes_without_removed() {
        let summary = RunSummary {
            loaded: 3,
            unique: 2,
            duplicates_removed: 1,
            valid: 2,
            invalid: 0,
            output: PathBuf::from("out.csv"),
            removed: None,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"loaded\":3"));
        // A dedupe-only run has no removed file, and the JSON shouldn't
        // pretend otherwise
        assert!(!json.contains("removed\":null"));
    }
}
