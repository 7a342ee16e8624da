// src/mash.rs
//! Seed mixer ("mash").
//!
//! Folds the text of each seed into an accumulator and emits a fraction in
//! [0, 1) per call. Every call advances the accumulator, so repeated calls
//! with the same input return different values.
//!
//! The accumulator is an f64, not a u32: after the last character it is
//! re-widened with the fractional remainder and may exceed 2^32. Only the
//! returned value is reduced mod 2^32. Keeping it as a double between calls
//! is required to reproduce the reference stream.

use crate::seed::Seed;

const MASH_INIT: f64 = 0xefc8249d_u32 as f64;
const MASH_MUL: f64 = 0.02519603282416938;
pub(crate) const TWO_POW_32: f64 = 4294967296.0;
/// 2^-32
pub(crate) const TWO_POW_NEG_32: f64 = 2.3283064365386963e-10;

#[derive(Clone, Debug)]
pub struct Mash { n: f64 }

impl Mash {
    pub fn new() -> Self { Self { n: MASH_INIT } }

    /// Mix one seed and return the next fraction of the stream.
    pub fn mash(&mut self, seed: &Seed) -> f64 {
        self.fold(seed.code_units())
    }

    pub fn mash_str(&mut self, data: &str) -> f64 {
        self.fold(data.encode_utf16())
    }

    fn fold<I: IntoIterator<Item = u16>>(&mut self, units: I) -> f64 {
        let mut n = self.n;
        for code in units {
            n += code as f64;
            let mut h = MASH_MUL * n;
            n = to_uint32(h) as f64;
            h -= n;
            h *= n;
            n = to_uint32(h) as f64;
            h -= n;
            n += h * TWO_POW_32;
        }
        self.n = n;
        to_uint32(n) as f64 * TWO_POW_NEG_32
    }
}

impl Default for Mash {
    fn default() -> Self { Self::new() }
}

/// ECMAScript ToUint32: truncate toward zero, then reduce mod 2^32.
#[inline]
pub fn to_uint32(x: f64) -> u32 {
    if !x.is_finite() { return 0; }
    x.trunc().rem_euclid(TWO_POW_32) as u32
}

/// ECMAScript ToInt32: ToUint32 reinterpreted as two's complement.
#[inline]
pub fn to_int32(x: f64) -> i32 {
    to_uint32(x) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_like_reference() {
        let mut m = Mash::new();
        assert_eq!(m.mash_str(" "), 0.8633289230056107);
        assert_eq!(m.mash_str(" "), 0.15019597788341343);
        assert_eq!(m.mash_str(" "), 0.9176952994894236);
    }

    #[test]
    fn empty_text_repeats_current_position() {
        let mut m = Mash::new();
        for _ in 0..3 { m.mash_str(" "); }
        // nothing to fold: the stream does not move
        assert_eq!(m.mash_str(""), 0.9176952994894236);
        assert_eq!(m.mash(&Seed::from("")), 0.9176952994894236);
    }

    #[test]
    fn seeds_mix_through_their_code_units() {
        let (mut a, mut b) = (Mash::new(), Mash::new());
        assert_eq!(a.mash(&Seed::from(0.5)), b.mash_str("0.5"));
        assert_eq!(a.mash(&Seed::from("😀")), b.mash_str("\u{1f600}"));
        assert_eq!(a.mash(&Seed::from(587215043362.03125)), b.mash_str("587215043362.0312"));
    }

    #[test]
    fn every_call_advances() {
        let mut m = Mash::new();
        let a = m.mash(&Seed::from("x"));
        let b = m.mash(&Seed::from("x"));
        assert_ne!(a, b);
        assert!((0.0..1.0).contains(&a) && (0.0..1.0).contains(&b));
    }

    #[test]
    fn uint32_truncation_is_unsigned() {
        assert_eq!(to_uint32(3.9), 3);
        assert_eq!(to_uint32(4294967296.5), 0);
        assert_eq!(to_uint32(4294967297.0), 1);
        assert_eq!(to_uint32(6442450944.0), 2147483648);
        assert_eq!(to_uint32(-1.0), u32::MAX);
        assert_eq!(to_uint32(f64::NAN), 0);
        assert_eq!(to_int32(6442450944.0), i32::MIN);
        assert_eq!(to_int32(-2.7), -2);
        assert_eq!(to_int32(2091638.99), 2091638);
    }
}
