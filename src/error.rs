//! Error types for seed parsing and state restoration.
//!
//! Mixing seeds and stepping the generator are total: every [`Seed`] has a
//! canonical text and every step is plain float arithmetic. Errors only arise
//! at the edges, when a number arrives as text or when a captured state is
//! handed back to a generator.
//!
//! [`Seed`]: crate::seed::Seed

use std::fmt;

/// Result alias used across the crate.
pub type AleaResult<T> = Result<T, AleaError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AleaError {
    /// Text that was expected to hold a number could not be parsed as one.
    InvalidSeed {
        /// The offending input, verbatim.
        input: String,
    },

    /// A captured state word is not a finite number.
    InvalidState {
        /// Which word was rejected (`"s0"`, `"s1"` or `"s2"`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for AleaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AleaError::InvalidSeed { input } => {
                write!(f, "invalid numeric seed {:?}", input)
            }
            AleaError::InvalidState { field, value } => {
                write!(f, "invalid generator state: {} = {} is not finite", field, value)
            }
        }
    }
}

impl std::error::Error for AleaError {}
