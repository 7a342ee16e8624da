// src/state.rs
//! Captured generator state.
//!
//! A snapshot of the three lag words and the carry. Restoring a snapshot
//! resumes the exact output sequence from where it was taken. Serde derives
//! make the snapshot printable as JSON; storing it is left to the caller.

use serde::{Deserialize, Serialize};

use crate::error::{AleaError, AleaResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AleaState {
    pub s0: f64,
    pub s1: f64,
    pub s2: f64,
    pub c: i32,
}

impl AleaState {
    /// Words must be finite. Values a hair outside [0, 1) are legitimate
    /// rounding drift and are accepted as-is.
    pub fn validate(&self) -> AleaResult<()> {
        for (field, value) in [("s0", self.s0), ("s1", self.s1), ("s2", self.s2)] {
            if !value.is_finite() {
                return Err(AleaError::InvalidState { field, value });
            }
        }
        Ok(())
    }
}
