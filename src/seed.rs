// src/seed.rs
//! Seed values and their canonical text.
//!
//! The mixer never looks at a seed's type, only at its text, so two seeds
//! with equal text mix identically (`Seed::from(1)` and `Seed::from("1")`).
//! Numbers are rendered the way ECMAScript `Number.prototype.toString`
//! renders them, which keeps numeric seeds compatible with the reference
//! Alea sequences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AleaError, AleaResult};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: u64 = 1 << 53;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Seed {
    Number(f64),
    Text(String),
}

impl Seed {
    /// Strict numeric parse, for seeds that arrive as text but must mix as numbers.
    pub fn parse_number(s: &str) -> AleaResult<Seed> {
        let t = s.trim();
        let v = match t {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            "NaN" => f64::NAN,
            _ => match f64::from_str(t) {
                // std also accepts "inf"/"nan" spellings and overflows to inf; reject those
                Ok(v) if v.is_finite() => v,
                _ => return Err(AleaError::InvalidSeed { input: s.to_string() }),
            },
        };
        Ok(Seed::Number(v))
    }

    /// Canonical text fed to the mixer.
    pub fn to_text(&self) -> String {
        match self {
            Seed::Number(v) => number_to_text(*v),
            Seed::Text(s) => s.clone(),
        }
    }

    /// UTF-16 code units of the canonical text, in order.
    ///
    /// For text inside the Basic Multilingual Plane these are the code points;
    /// astral characters contribute their surrogate pair.
    pub fn code_units(&self) -> Vec<u16> {
        self.to_text().encode_utf16().collect()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<f64> for Seed { fn from(v: f64) -> Self { Seed::Number(v) } }
impl From<f32> for Seed { fn from(v: f32) -> Self { Seed::Number(v as f64) } }
impl From<i32> for Seed { fn from(v: i32) -> Self { Seed::Number(v as f64) } }
impl From<u32> for Seed { fn from(v: u32) -> Self { Seed::Number(v as f64) } }
impl From<&str> for Seed { fn from(s: &str) -> Self { Seed::Text(s.to_string()) } }
impl From<String> for Seed { fn from(s: String) -> Self { Seed::Text(s) } }
impl From<&String> for Seed { fn from(s: &String) -> Self { Seed::Text(s.clone()) } }
impl From<char> for Seed { fn from(c: char) -> Self { Seed::Text(c.to_string()) } }
impl From<&Seed> for Seed { fn from(s: &Seed) -> Self { s.clone() } }

// Wide integers past 2^53 keep their exact decimal instead of rounding through f64.
impl From<i64> for Seed {
    fn from(v: i64) -> Self {
        if v.unsigned_abs() <= MAX_SAFE_INTEGER { Seed::Number(v as f64) } else { Seed::Text(v.to_string()) }
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        if v <= MAX_SAFE_INTEGER { Seed::Number(v as f64) } else { Seed::Text(v.to_string()) }
    }
}

impl From<usize> for Seed {
    fn from(v: usize) -> Self { Seed::from(v as u64) }
}

/// ECMAScript Number::toString(10).
///
/// `ryu_js` picks the same digits ECMAScript does, including the
/// even-digit choice when two shortest strings are equally close.
pub fn number_to_text(v: f64) -> String {
    if v.is_nan() { return "NaN".to_string(); }
    if v == 0.0 { return "0".to_string(); }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    ryu_js::Buffer::new().format_finite(v).to_string()
}
