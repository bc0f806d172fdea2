//! radix-calc - Fixed-width binary arithmetic and base conversion for RadixLab
//!
//! # Features
//!
//! - **Representation codec**: bit pattern <-> signed value for four schemes
//! - **Binary arithmetic engine**: add, subtract, multiply, divide within a
//!   fixed bit width, with per-representation overflow detection
//! - **Base converter**: numerals between any two bases in 2..=36
//!
//! All values are arbitrary precision; bit widths and numeral lengths are
//! bounded only by the caller-supplied [`Limits`].
//!
//! # Example
//!
//! ```rust
//! use radix_calc::{BinaryEngine, BitWidth, Operation, OperationOutput, Representation};
//!
//! let engine = BinaryEngine::default();
//! let width = BitWidth::new(8).unwrap();
//! let result = engine
//!     .execute(Operation::Division, "11111001", "00000010", width, Representation::TwosComplement)
//!     .unwrap();
//!
//! // -7 / 2 truncates toward zero
//! match result.output {
//!     OperationOutput::Division { quotient, remainder, .. } => {
//!         assert_eq!(quotient.to_string(), "-3");
//!         assert_eq!(remainder.to_string(), "-1");
//!     },
//!     _ => unreachable!(),
//! }
//!
//! assert_eq!(radix_calc::convert("FF", 16, 10).unwrap(), "255");
//! ```
//!
//! # Representations
//!
//! | Wire name | Range for width `w` | Zero patterns |
//! |-----------|---------------------|---------------|
//! | `unsigned` | `[0, 2^w - 1]` | 1 |
//! | `signOnly` | `[-(2^(w-1) - 1), 2^(w-1) - 1]` | 2 |
//! | `onesComplement` | `[-(2^(w-1) - 1), 2^(w-1) - 1]` | 2 |
//! | `twosComplement` | `[-2^(w-1), 2^(w-1) - 1]` | 1 |

pub mod bigint;
pub mod codec;
pub mod converter;
pub mod engine;
pub mod error;
pub mod limits;
pub mod representation;

// Re-exports for convenience
pub use bigint::{BigInt, BigUint};
pub use codec::{decode, encode};
pub use converter::{convert, validate_base, BaseConverter, DEFAULT_FRACTION_DIGITS};
pub use engine::{compute, BinaryEngine, Computation, Operation, OperationOutput, OperationResult};
pub use error::{CalcError, ErrorKind, Result};
pub use limits::Limits;
pub use representation::{BitWidth, Representation};
