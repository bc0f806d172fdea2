//! Input size limits
//!
//! Values are arbitrary precision, so every entry point that accepts a width
//! or a digit string from the outside checks it against a `Limits` first.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

pub const DEFAULT_MAX_WIDTH: u32 = 4096;
pub const DEFAULT_MAX_DIGITS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted bit width
    pub max_width: u32,
    /// Longest accepted numeral, in characters
    pub max_digits: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

impl Limits {
    pub fn unbounded() -> Self {
        Self {
            max_width: u32::MAX,
            max_digits: usize::MAX,
        }
    }

    pub fn check_width(&self, width: u32) -> Result<()> {
        if width > self.max_width {
            return Err(CalcError::input_too_large(
                "bit width",
                width as usize,
                self.max_width as usize,
            ));
        }
        Ok(())
    }

    pub fn check_digits(&self, what: &'static str, len: usize) -> Result<()> {
        if len > self.max_digits {
            return Err(CalcError::input_too_large(what, len, self.max_digits));
        }
        Ok(())
    }
}
