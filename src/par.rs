// src/par.rs
//! Independent generators on worker threads.
//!
//! A generator is never shared: each seed set builds its own, and each worker
//! owns a disjoint slice of the output, so results do not depend on the
//! thread count or scheduling.

use std::thread;

use crate::alea::Alea;
use crate::seed::Seed;

fn stream(seeds: &[Seed], n: usize) -> Vec<f64> {
    Alea::new(seeds.iter()).take(n).collect()
}

/// First `n` outputs for each seed set, in seed-set order.
/// With `threads <= 1` everything runs on the calling thread.
pub fn parallel_streams(seed_sets: &[Vec<Seed>], n: usize, threads: usize) -> Vec<Vec<f64>> {
    let mut out: Vec<Vec<f64>> = vec![Vec::new(); seed_sets.len()];
    if seed_sets.is_empty() { return out; }
    if threads <= 1 {
        for (slot, seeds) in out.iter_mut().zip(seed_sets) { *slot = stream(seeds, n); }
        return out;
    }

    // contiguous block of seed sets per worker
    let per_worker = seed_sets.len().div_ceil(threads);
    thread::scope(|scope| {
        for (slots, sets) in out.chunks_mut(per_worker).zip(seed_sets.chunks(per_worker)) {
            scope.spawn(move || {
                for (slot, seeds) in slots.iter_mut().zip(sets) { *slot = stream(seeds, n); }
            });
        }
    });
    out
}
