//! alea — deterministic, seedable pseudo-random numbers in [0, 1).
//!
//! Modules:
//! - `seed`: Seed values (numbers or text) and their canonical text.
//! - `mash`: the seed mixer that turns seed text into initial state.
//! - `alea`: the three-lag multiply-with-carry generator.
//! - `state`: capture/restore of generator state.
//! - `clock`: default seed sources (wall clock, fixed).
//! - `error`: AleaError.
//! - `eval`: range, uniformity and determinism checks.
//! - `par`: independent generators across worker threads.
//!
//! Not cryptographically secure.

pub mod error;
pub mod seed;
pub mod mash;
pub mod clock;
pub mod state;
pub mod alea;
pub mod eval;
pub mod par;

pub use alea::Alea;
pub use clock::{FixedSeed, SeedSource, SystemClock};
pub use error::{AleaError, AleaResult};
pub use seed::Seed;
pub use state::AleaState;
