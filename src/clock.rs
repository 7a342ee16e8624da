// src/clock.rs
//! Where the default seed comes from when a caller supplies none.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::seed::Seed;

/// Supplies the single seed used when a generator is built without seeds.
pub trait SeedSource {
    fn seed(&self) -> Seed;
}

/// Wall clock, in whole milliseconds since the UNIX epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn seed(&self) -> Seed {
        let ms = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as f64,
            // clock set before 1970: count backwards instead of failing
            Err(e) => -(e.duration().as_millis() as f64),
        };
        Seed::Number(ms)
    }
}

/// Always hands out the same seed. Useful for replay and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSeed(pub Seed);

impl SeedSource for FixedSeed {
    fn seed(&self) -> Seed { self.0.clone() }
}

impl<F: Fn() -> Seed> SeedSource for F {
    fn seed(&self) -> Seed { self() }
}
