// src/checker/pool.rs
// =============================================================================
// This module runs URL validation across a pool of concurrent workers.
//
// How it works:
// 1. Pre-load every entry into a shared work queue before any worker starts
// 2. Spawn a fixed number of worker tasks
// 3. Each worker loops: pop one entry under the queue lock, run the
//    validator on it with no lock held, then append it to the valid or
//    invalid bucket under the results lock
// 4. A worker exits when the queue comes up empty - no new work can ever
//    arrive, so empty means done
//
// Locking rules:
// - The queue lock and the results lock are separate mutexes
// - A worker never holds both at once, so the pool cannot deadlock
// - The validator runs outside both locks (it may block on the network
//   for up to 10 seconds)
//
// Guarantees:
// - Every entry lands in exactly one bucket: the pop is atomic under the
//   queue lock, and a popped entry is always pushed before the worker
//   loops again
// - |valid| + |invalid| equals the number of entries fed in
// - No ordering guarantee inside the buckets; it depends on scheduling
//   and per-request latency
// =============================================================================

use futures::future::join_all;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::csv::Entry;

use super::Validator;

// How often to report progress (every Nth processed entry)
const PROGRESS_INTERVAL: usize = 10;

// The two output buckets populated by the workers
#[derive(Debug, Default)]
pub struct Partition {
    /// Entries whose URL passed the validator
    pub valid: Vec<Entry>,
    /// Entries whose URL failed the validator
    pub invalid: Vec<Entry>,
}

// Picks how many workers to run
//
// Uses the hardware-reported concurrency, capped at 8 so we don't hammer
// the network on big machines, with a fallback of 4 if the OS can't tell
// us how many CPUs there are.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(8)
}

// Validates all entries concurrently and partitions them
//
// Parameters:
//   entries: the (already deduplicated) entries to classify
//   validator: the strategy deciding valid vs. invalid
//   workers: how many concurrent workers to run (at least 1)
//
// The pool runs to completion; there is no cancellation. Each network
// probe carries its own timeout, so a stuck server costs at most that
// timeout, never a hang.
pub async fn run_pool(entries: Vec<Entry>, validator: Validator, workers: usize) -> Partition {
    let total = entries.len();
    if total == 0 {
        return Partition::default();
    }

    // All work is queued up-front; workers treat an empty queue as "done"
    let queue = Arc::new(Mutex::new(VecDeque::from(entries)));
    let results = Arc::new(Mutex::new(Partition::default()));
    let processed = Arc::new(AtomicUsize::new(0));
    let validator = Arc::new(validator);

    let mut handles = Vec::with_capacity(workers.max(1));

    for _ in 0..workers.max(1) {
        let queue = Arc::clone(&queue);
        let results = Arc::clone(&results);
        let processed = Arc::clone(&processed);
        let validator = Arc::clone(&validator);

        handles.push(tokio::spawn(async move {
            loop {
                // Pop one entry; the scope drops the lock before we await
                let entry = {
                    let mut queue = queue.lock();
                    queue.pop_front()
                };

                let Some(entry) = entry else {
                    // Queue drained and no more work will ever arrive
                    break;
                };

                // Validation happens with no lock held
                let is_valid = validator.check(&entry.url).await;

                {
                    let mut results = results.lock();
                    if is_valid {
                        results.valid.push(entry);
                    } else {
                        results.invalid.push(entry);
                    }

                    // fetch_add returns the old value, so +1 is how many
                    // entries have been fully processed including this one
                    let done = processed.fetch_add(1, Ordering::SeqCst) + 1;

                    // Progress is printed under the results lock so lines
                    // from different workers never interleave
                    if done % PROGRESS_INTERVAL == 0 || done == total {
                        let percent = (done as f64 * 100.0) / total as f64;
                        print!("\rProgress: {}/{} ({:.1}%)", done, total, percent);
                        let _ = std::io::stdout().flush();
                    }
                }
            }
        }));
    }

    // Wait for every worker to drain the queue
    join_all(handles).await;
    println!();

    // All workers are done, so we're the only owner of the results now
    let mut results = results.lock();
    std::mem::take(&mut *results)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc + Mutex?
//    - Arc lets several workers share ownership of the same queue
//    - Mutex makes sure only one worker pops (or pushes results) at a time
//    - parking_lot's Mutex has no poisoning, so lock() needs no unwrap
//
// 2. Why pop inside a { } block?
//    - The lock guard is dropped at the end of the block
//    - We must not hold a lock across .await, or one slow request would
//      stall every other worker
//
// 3. Why no "done" flag?
//    - The queue is fully loaded before any worker starts
//    - So "queue empty" already means "no more work will arrive"
//
// 4. What is join_all?
//    - Waits for all spawned tasks to finish, like joining threads
// -----------------------------------------------------------------------------
