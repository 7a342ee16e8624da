// src/alea.rs
//! Alea: a lagged multiply-with-carry generator over three f64 words.
//!
//! Each step computes `t = 2091639 * s0 + c * 2^-32`, shifts the lag window
//! (`s0 <- s1 <- s2`) and splits `t` into a new integer carry and a new
//! fractional `s2`, which is also the output. The constants are part of the
//! sequence definition; changing either one changes every output.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::clock::{SeedSource, SystemClock};
use crate::error::AleaResult;
use crate::mash::{to_int32, Mash, TWO_POW_32, TWO_POW_NEG_32};
use crate::seed::Seed;
use crate::state::AleaState;

const MULTIPLIER: f64 = 2091639.0;
/// 2^21, the high part of a 53-bit fraction.
const TWO_POW_21: f64 = 2097152.0;
/// 2^-53
const TWO_POW_NEG_53: f64 = 1.1102230246251565e-16;

#[derive(Clone, Debug)]
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,
    c: i32,
    args: Vec<Seed>,
}

impl Alea {
    pub const VERSION: &'static str = "Alea 0.9";

    /// Seed from any mix of numbers and text. With no seeds the wall clock
    /// supplies one.
    pub fn new<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Seed>,
    {
        Self::with_source(seeds, &SystemClock)
    }

    /// Like [`Alea::new`], but an empty seed list draws from `source`.
    pub fn with_source<I, S, C>(seeds: I, source: &C) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Seed>,
        C: SeedSource + ?Sized,
    {
        let mut args: Vec<Seed> = seeds.into_iter().map(Into::into).collect();
        if args.is_empty() {
            args.push(source.seed());
        }

        let mut mash = Mash::new();
        let mut s0 = mash.mash_str(" ");
        let mut s1 = mash.mash_str(" ");
        let mut s2 = mash.mash_str(" ");

        // every word draws its own point of the stream for every seed
        for seed in &args {
            s0 -= mash.mash(seed);
            if s0 < 0.0 { s0 += 1.0; }
            s1 -= mash.mash(seed);
            if s1 < 0.0 { s1 += 1.0; }
            s2 -= mash.mash(seed);
            if s2 < 0.0 { s2 += 1.0; }
        }

        Self { s0, s1, s2, c: 1, args }
    }

    /// Seeded from the system clock.
    pub fn from_entropy() -> Self {
        Self::new(std::iter::empty::<Seed>())
    }

    /// Rebuild a generator from a captured state. `args` is informational only.
    pub fn from_state(state: AleaState, args: Vec<Seed>) -> AleaResult<Self> {
        state.validate()?;
        Ok(Self { s0: state.s0, s1: state.s1, s2: state.s2, c: state.c, args })
    }

    /// Seeds this generator was built from, in order. For a clock-seeded
    /// generator this is the single time seed that was used.
    pub fn args(&self) -> &[Seed] { &self.args }

    pub fn state(&self) -> AleaState {
        AleaState { s0: self.s0, s1: self.s1, s2: self.s2, c: self.c }
    }

    /// Rewind (or fast-forward) to a captured state. On error the generator is untouched.
    pub fn restore(&mut self, state: AleaState) -> AleaResult<()> {
        state.validate()?;
        self.s0 = state.s0;
        self.s1 = state.s1;
        self.s2 = state.s2;
        self.c = state.c;
        Ok(())
    }

    /// Next value, nominally in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let t = MULTIPLIER * self.s0 + self.c as f64 * TWO_POW_NEG_32;
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.c = to_int32(t);
        self.s2 = t - self.c as f64;
        self.s2
    }

    /// 32 random bits: one step scaled to [0, 2^32).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_f64() * TWO_POW_32) as u32
    }

    /// A fraction with 53 bits of resolution, consuming two steps.
    #[inline]
    pub fn fract53(&mut self) -> f64 {
        let hi = self.next_f64();
        let lo = to_int32(self.next_f64() * TWO_POW_21);
        hi + lo as f64 * TWO_POW_NEG_53
    }

    /// Uniform index in `0..end`; `end == 0` yields 0.
    #[inline]
    pub fn gen_range(&mut self, end: usize) -> usize {
        if end == 0 { return 0; }
        ((self.next_f64() * end as f64) as usize).min(end - 1)
    }
}

/// Endless stream of [`Alea::next_f64`] values.
impl Iterator for Alea {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> { Some(self.next_f64()) }
}

impl RngCore for Alea {
    fn next_u32(&mut self) -> u32 { Alea::next_u32(self) }

    fn next_u64(&mut self) -> u64 {
        let hi = Alea::next_u32(self) as u64;
        let lo = Alea::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Seed bytes are a little-endian u64, mixed as its decimal text, so
/// `Alea::seed_from_u64(7)` and `Alea::new([7])` produce the same sequence.
impl SeedableRng for Alea {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Alea::new([Seed::from(u64::from_le_bytes(seed))])
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed(state.to_le_bytes())
    }
}
