// src/checker/mod.rs
// =============================================================================
// This module contains all URL validation logic.
//
// Submodules:
// - validator: The two interchangeable validation strategies (live HTTP
//   probe vs. offline format check), behind one check() method
// - pool: The worker pool that drains the entry queue concurrently and
//   partitions entries into valid/invalid buckets
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod pool;
mod validator;

// Re-export public items from submodules
// This lets users write `checker::run_pool()` instead of
// `checker::pool::run_pool()`
pub use pool::{default_worker_count, run_pool, Partition};
pub use validator::Validator;
