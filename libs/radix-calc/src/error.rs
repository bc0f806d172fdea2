//! Error types for radix-calc

use serde::Serialize;
use thiserror::Error;

/// Stable, machine-readable error classification.
///
/// Serialized in snake_case and carried in service error bodies as `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidDigit,
    LengthMismatch,
    OutOfRange,
    Overflow,
    DivisionByZero,
    InvalidBase,
    UnsupportedOperation,
    UnsupportedRepresentation,
    InvalidWidth,
    EmptyNumeral,
    InputTooLarge,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDigit => "invalid_digit",
            Self::LengthMismatch => "length_mismatch",
            Self::OutOfRange => "out_of_range",
            Self::Overflow => "overflow",
            Self::DivisionByZero => "division_by_zero",
            Self::InvalidBase => "invalid_base",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::UnsupportedRepresentation => "unsupported_representation",
            Self::InvalidWidth => "invalid_width",
            Self::EmptyNumeral => "empty_numeral",
            Self::InputTooLarge => "input_too_large",
        }
    }

    /// Failures produced by a well-formed request whose arithmetic cannot be
    /// represented (as opposed to malformed input)
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Overflow | Self::DivisionByZero)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("Bit pattern length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Value {value} out of range [{min}, {max}] for {width}-bit {representation}")]
    OutOfRange {
        value: String,
        min: String,
        max: String,
        width: u32,
        representation: &'static str,
    },

    #[error(
        "Overflow: {operation} result {value} outside [{min}, {max}] for {width}-bit {representation}"
    )]
    Overflow {
        operation: &'static str,
        value: String,
        min: String,
        max: String,
        width: u32,
        representation: &'static str,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid base {0}: must be between 2 and 36")]
    InvalidBase(i64),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unsupported representation: {0}")]
    UnsupportedRepresentation(String),

    #[error("Invalid bit width {0}: must be at least 1")]
    InvalidWidth(i64),

    #[error("Empty numeral")]
    EmptyNumeral,

    #[error("Input too large: {what} is {size}, limit is {limit}")]
    InputTooLarge {
        what: &'static str,
        size: usize,
        limit: usize,
    },
}

impl CalcError {
    pub fn invalid_digit(digit: char, position: usize, base: u32) -> Self {
        Self::InvalidDigit {
            digit,
            position,
            base,
        }
    }

    pub fn unsupported_operation(name: impl Into<String>) -> Self {
        Self::UnsupportedOperation(name.into())
    }

    pub fn unsupported_representation(name: impl Into<String>) -> Self {
        Self::UnsupportedRepresentation(name.into())
    }

    pub fn input_too_large(what: &'static str, size: usize, limit: usize) -> Self {
        Self::InputTooLarge { what, size, limit }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidBase(_) => ErrorKind::InvalidBase,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::UnsupportedRepresentation(_) => ErrorKind::UnsupportedRepresentation,
            Self::InvalidWidth(_) => ErrorKind::InvalidWidth,
            Self::EmptyNumeral => ErrorKind::EmptyNumeral,
            Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = CalcError::invalid_digit('2', 2, 2);
        assert_eq!(err.to_string(), "Invalid digit '2' at position 2 for base 2");
        assert_eq!(err.kind(), ErrorKind::InvalidDigit);

        let err = CalcError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Bit pattern length mismatch: expected 4 bits, got 3"
        );
    }

    #[test]
    fn test_kind_strings_match_serde() {
        for kind in [
            ErrorKind::InvalidDigit,
            ErrorKind::DivisionByZero,
            ErrorKind::InputTooLarge,
            ErrorKind::UnsupportedRepresentation,
        ] {
            let json = serde_json::to_value(kind).unwrap_or_default();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn test_arithmetic_kinds() {
        assert!(CalcError::DivisionByZero.kind().is_arithmetic());
        assert!(!CalcError::EmptyNumeral.kind().is_arithmetic());
        assert!(!CalcError::InvalidBase(37).kind().is_arithmetic());
    }
}
