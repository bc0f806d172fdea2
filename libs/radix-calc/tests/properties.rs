//! Exhaustive small-width checks of the codec, engine and converter
//!
//! Every bit pattern of widths 1..=8 is enumerated and compared against
//! plain `i64` arithmetic.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use std::collections::HashSet;

use radix_calc::{
    compute, convert, decode, encode, BigInt, BinaryEngine, BitWidth, CalcError, Computation,
    Limits, Operation, OperationOutput, Representation,
};

const MAX_WIDTH: u32 = 8;

fn patterns(width: u32) -> impl Iterator<Item = String> {
    (0u64..(1 << width)).map(move |n| format!("{:0w$b}", n, w = width as usize))
}

fn width(w: u32) -> BitWidth {
    BitWidth::new(w).unwrap()
}

fn is_negative_zero(bits: &str, repr: Representation) -> bool {
    match repr {
        Representation::SignMagnitude => bits.starts_with('1') && !bits[1..].contains('1'),
        Representation::OnesComplement => bits.starts_with('1') && !bits.contains('0'),
        _ => false,
    }
}

/// Reference decoder over machine integers
fn reference_decode(bits: &str, repr: Representation) -> i64 {
    let w = bits.len() as u32;
    let raw = i64::from_str_radix(bits, 2).unwrap();
    let msb = (raw >> (w - 1)) & 1 == 1;
    match repr {
        Representation::Unsigned => raw,
        _ if !msb => raw,
        Representation::SignMagnitude => -(raw - (1 << (w - 1))),
        Representation::OnesComplement => -(((1 << w) - 1) ^ raw),
        Representation::TwosComplement => raw - (1 << w),
    }
}

fn reference_range(w: u32, repr: Representation) -> (i64, i64) {
    let half = 1i64 << (w - 1);
    match repr {
        Representation::Unsigned => (0, (1 << w) - 1),
        Representation::SignMagnitude | Representation::OnesComplement => (-(half - 1), half - 1),
        Representation::TwosComplement => (-half, half - 1),
    }
}

#[test]
fn decode_matches_reference_for_every_pattern() {
    for w in 1..=MAX_WIDTH {
        for repr in Representation::ALL {
            for bits in patterns(w) {
                let value = decode(&bits, width(w), repr).unwrap();
                assert_eq!(
                    value.to_i64(),
                    Some(reference_decode(&bits, repr)),
                    "{bits} as {repr}"
                );
            }
        }
    }
}

#[test]
fn encode_inverts_decode_except_negative_zero() {
    for w in 1..=MAX_WIDTH {
        for repr in Representation::ALL {
            for bits in patterns(w) {
                let value = decode(&bits, width(w), repr).unwrap();
                let encoded = encode(&value, width(w), repr).unwrap();
                if is_negative_zero(&bits, repr) {
                    assert_eq!(encoded, "0".repeat(w as usize));
                } else {
                    assert_eq!(encoded, bits, "{repr} width {w}");
                }
            }
        }
    }
}

#[test]
fn twos_complement_is_a_bijection() {
    for w in 2..=MAX_WIDTH {
        let values: HashSet<i64> = patterns(w)
            .map(|bits| {
                decode(&bits, width(w), Representation::TwosComplement)
                    .unwrap()
                    .to_i64()
                    .unwrap()
            })
            .collect();
        let (min, max) = reference_range(w, Representation::TwosComplement);
        assert_eq!(values.len(), 1 << w);
        assert!(values.iter().all(|v| (min..=max).contains(v)));
    }
}

#[test]
fn both_zero_patterns_decode_to_zero() {
    for w in 2..=MAX_WIDTH {
        let positive = "0".repeat(w as usize);
        let negative = format!("1{}", "0".repeat(w as usize - 1));
        let all_ones = "1".repeat(w as usize);
        for bits in [&positive, &negative] {
            let v = decode(bits, width(w), Representation::SignMagnitude).unwrap();
            assert!(v.is_zero());
        }
        for bits in [&positive, &all_ones] {
            let v = decode(bits, width(w), Representation::OnesComplement).unwrap();
            assert!(v.is_zero());
        }
    }
}

#[test]
fn compute_matches_reference_arithmetic() {
    for w in 1..=5 {
        for repr in Representation::ALL {
            let (min, max) = reference_range(w, repr);
            for a in min..=max {
                for b in min..=max {
                    for op in Operation::ALL {
                        let got = compute(op, &BigInt::from(a), &BigInt::from(b), width(w), repr);
                        let expected = match op {
                            Operation::Addition => Some((a + b, None)),
                            Operation::Subtraction => Some((a - b, None)),
                            Operation::Multiplication => Some((a * b, None)),
                            Operation::Division if b == 0 => None,
                            Operation::Division => Some((a / b, Some(a % b))),
                        };
                        match (expected, got) {
                            (None, Err(CalcError::DivisionByZero)) => {},
                            (Some((v, None)), Ok(Computation::Value(r))) => {
                                assert_eq!(r.to_i64(), Some(v));
                            },
                            (Some((v, None)), Err(CalcError::Overflow { .. })) => {
                                assert!(v < min || v > max, "{a} {op} {b} = {v}");
                            },
                            (
                                Some((q, Some(r))),
                                Ok(Computation::Division {
                                    quotient,
                                    remainder,
                                }),
                            ) => {
                                assert_eq!(quotient.to_i64(), Some(q));
                                assert_eq!(remainder.to_i64(), Some(r));
                            },
                            (Some((q, Some(_))), Err(CalcError::Overflow { .. })) => {
                                assert!(q < min || q > max, "{a} / {b} = {q}");
                            },
                            (expected, got) => {
                                panic!("{a} {op} {b} ({repr}, w={w}): {expected:?} vs {got:?}")
                            },
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn engine_results_are_always_full_width() {
    let engine = BinaryEngine::new(Limits::unbounded());
    for w in 1..=4 {
        for repr in Representation::ALL {
            for lhs in patterns(w) {
                for rhs in patterns(w) {
                    for op in Operation::ALL {
                        match engine.execute(op, &lhs, &rhs, width(w), repr) {
                            Ok(result) => match result.output {
                                OperationOutput::Value { bits, .. } => {
                                    assert_eq!(bits.len(), w as usize);
                                },
                                OperationOutput::Division {
                                    quotient_bits,
                                    remainder_bits,
                                    ..
                                } => {
                                    assert_eq!(quotient_bits.len(), w as usize);
                                    assert_eq!(remainder_bits.len(), w as usize);
                                },
                            },
                            Err(CalcError::Overflow { .. } | CalcError::DivisionByZero) => {},
                            Err(other) => panic!("unexpected error {other}"),
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn conversion_round_trips() {
    let numerals = ["0", "1", "7", "255", "1000000", "-42", "123456789012345678901234567890"];
    for n in numerals {
        for b1 in [2u32, 3, 8, 10, 16, 20, 36] {
            let source = convert(n, 10, b1).unwrap();
            for b2 in [2u32, 5, 7, 10, 16, 35, 36] {
                let there = convert(&source, b1, b2).unwrap();
                let back = convert(&there, b2, b1).unwrap();
                assert_eq!(back, source, "{n}: base {b1} -> {b2} -> {b1}");
            }
        }
    }
}

#[test]
fn zero_converts_to_zero_for_every_base_pair() {
    for b1 in 2..=36 {
        for b2 in 2..=36 {
            assert_eq!(convert("0", b1, b2).unwrap(), "0");
        }
    }
}
