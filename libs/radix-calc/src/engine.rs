//! Fixed-width binary arithmetic engine
//!
//! Every operation computes the exact mathematical result first and then
//! checks it against the representation's range. Results that do not fit
//! are reported as [`CalcError::Overflow`]; nothing wraps silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bigint::BigInt;
use crate::codec;
use crate::error::{CalcError, Result};
use crate::limits::Limits;
use crate::representation::{BitWidth, Representation};

/// Arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Accepts canonical names, short verbs and suffixed labels such as
    /// `"2's complement division"`; the last word decides.
    fn from_str(s: &str) -> Result<Self> {
        let word = s
            .split_whitespace()
            .next_back()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match word.as_str() {
            "addition" | "add" | "+" => Ok(Self::Addition),
            "subtraction" | "subtract" | "sub" | "-" => Ok(Self::Subtraction),
            "multiplication" | "multiply" | "mul" | "*" => Ok(Self::Multiplication),
            "division" | "divide" | "div" | "/" => Ok(Self::Division),
            _ => Err(CalcError::unsupported_operation(s)),
        }
    }
}

/// Decoded outcome of [`compute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Computation {
    Value(BigInt),
    Division { quotient: BigInt, remainder: BigInt },
}

/// Apply `op` to two decoded operands within `width` bits of `repr`.
///
/// Division truncates toward zero; the remainder takes the dividend's sign.
pub fn compute(
    op: Operation,
    a: &BigInt,
    b: &BigInt,
    width: BitWidth,
    repr: Representation,
) -> Result<Computation> {
    match op {
        Operation::Addition => checked(op, a + b, width, repr).map(Computation::Value),
        Operation::Subtraction => checked(op, a - b, width, repr).map(Computation::Value),
        Operation::Multiplication => checked(op, a * b, width, repr).map(Computation::Value),
        Operation::Division => {
            let (quotient, remainder) = a.div_rem_trunc(b).ok_or(CalcError::DivisionByZero)?;
            Ok(Computation::Division {
                quotient: checked(op, quotient, width, repr)?,
                remainder: checked(op, remainder, width, repr)?,
            })
        },
    }
}

fn checked(
    op: Operation,
    value: BigInt,
    width: BitWidth,
    repr: Representation,
) -> Result<BigInt> {
    if repr.contains(&value, width) {
        return Ok(value);
    }
    let (min, max) = repr.range(width);
    debug!(
        operation = op.as_str(),
        representation = repr.as_str(),
        width = width.get(),
        value = %value,
        "overflow detected"
    );
    Err(CalcError::Overflow {
        operation: op.as_str(),
        value: value.to_string(),
        min: min.to_string(),
        max: max.to_string(),
        width: width.get(),
        representation: repr.as_str(),
    })
}

/// Encoded output of a binary operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    Value {
        bits: String,
        value: BigInt,
    },
    Division {
        quotient_bits: String,
        quotient: BigInt,
        remainder_bits: String,
        remainder: BigInt,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub operation: Operation,
    pub representation: Representation,
    pub width: BitWidth,
    pub output: OperationOutput,
}

impl OperationResult {
    /// e.g. `"2's complement division"`
    pub fn description(&self) -> String {
        format!("{} {}", self.representation.label(), self.operation)
    }
}

/// Decode, compute and re-encode in one call, with input limits applied
#[derive(Debug, Clone, Default)]
pub struct BinaryEngine {
    limits: Limits,
}

impl BinaryEngine {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn execute(
        &self,
        op: Operation,
        lhs: &str,
        rhs: &str,
        width: BitWidth,
        repr: Representation,
    ) -> Result<OperationResult> {
        self.limits.check_width(width.get())?;
        self.limits.check_digits("operand", lhs.len())?;
        self.limits.check_digits("operand", rhs.len())?;

        let a = codec::decode(lhs, width, repr)?;
        let b = codec::decode(rhs, width, repr)?;
        debug!(
            operation = op.as_str(),
            representation = repr.as_str(),
            width = width.get(),
            a = %a,
            b = %b,
            "evaluating binary operation"
        );

        let output = match compute(op, &a, &b, width, repr)? {
            Computation::Value(value) => OperationOutput::Value {
                bits: codec::encode(&value, width, repr)?,
                value,
            },
            Computation::Division {
                quotient,
                remainder,
            } => OperationOutput::Division {
                quotient_bits: codec::encode(&quotient, width, repr)?,
                quotient,
                remainder_bits: codec::encode(&remainder, width, repr)?,
                remainder,
            },
        };

        Ok(OperationResult {
            operation: op,
            representation: repr,
            width,
            output,
        })
    }
}
