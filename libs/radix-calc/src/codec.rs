//! Representation codec
//!
//! Converts between `'0'`/`'1'` bit patterns and signed values under a
//! [`Representation`] and [`BitWidth`].
//!
//! | Representation | MSB = 0 | MSB = 1 |
//! |----------------|---------|---------|
//! | `unsigned` | unsigned value | unsigned value |
//! | `signOnly` | +magnitude | -magnitude (low `w-1` bits) |
//! | `onesComplement` | unsigned value | -(complement of pattern) |
//! | `twosComplement` | unsigned value | unsigned value - 2^w |
//!
//! Negative-zero patterns decode to 0. Encoding 0 always yields the
//! all-zero pattern.

use crate::bigint::{BigInt, BigUint};
use crate::error::{CalcError, Result};
use crate::representation::{BitWidth, Representation};

/// Parse a bit string into its unsigned pattern value.
///
/// Characters are validated before the length is checked.
pub fn parse_pattern(bits: &str, width: BitWidth) -> Result<BigUint> {
    let mut pattern = BigUint::zero();
    let mut len = 0usize;
    for (position, c) in bits.chars().enumerate() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => return Err(CalcError::invalid_digit(other, position, 2)),
        };
        pattern.mul_small_add(2, bit);
        len += 1;
    }
    if len != width.as_usize() {
        return Err(CalcError::LengthMismatch {
            expected: width.as_usize(),
            actual: len,
        });
    }
    Ok(pattern)
}

/// Decode a bit pattern into a signed value
pub fn decode(bits: &str, width: BitWidth, repr: Representation) -> Result<BigInt> {
    let pattern = parse_pattern(bits, width)?;
    let w = u64::from(width.get());
    let sign_bit = w - 1;

    let value = match repr {
        Representation::Unsigned => BigInt::from(pattern),
        _ if !pattern.bit(sign_bit) => BigInt::from(pattern),
        Representation::SignMagnitude => {
            let mut magnitude = pattern;
            magnitude.clear_bit(sign_bit);
            BigInt::from_parts(true, magnitude)
        },
        Representation::OnesComplement => BigInt::from_parts(true, pattern.complement(w)),
        Representation::TwosComplement => {
            // pattern - 2^w, always negative here
            let magnitude = BigUint::pow2(w)
                .checked_sub(&pattern)
                .unwrap_or_default();
            BigInt::from_parts(true, magnitude)
        },
    };
    Ok(value)
}

/// Encode a signed value as a bit pattern of exactly `width` characters
pub fn encode(value: &BigInt, width: BitWidth, repr: Representation) -> Result<String> {
    if !repr.contains(value, width) {
        return Err(out_of_range(value, width, repr));
    }
    let w = u64::from(width.get());

    let pattern = if !value.is_negative() {
        value.magnitude().clone()
    } else {
        match repr {
            // Unsigned never contains a negative value
            Representation::Unsigned => return Err(out_of_range(value, width, repr)),
            Representation::SignMagnitude => {
                let mut pattern = value.magnitude().clone();
                pattern.set_bit(w - 1);
                pattern
            },
            Representation::OnesComplement => value.magnitude().complement(w),
            Representation::TwosComplement => BigUint::pow2(w)
                .checked_sub(value.magnitude())
                .unwrap_or_default(),
        }
    };
    Ok(to_bit_string(&pattern, width))
}

/// Render a pattern as exactly `width` binary digits, zero-padded on the left
pub fn to_bit_string(pattern: &BigUint, width: BitWidth) -> String {
    let w = u64::from(width.get());
    (0..w)
        .rev()
        .map(|i| if pattern.bit(i) { '1' } else { '0' })
        .collect()
}

fn out_of_range(value: &BigInt, width: BitWidth, repr: Representation) -> CalcError {
    let (min, max) = repr.range(width);
    CalcError::OutOfRange {
        value: value.to_string(),
        min: min.to_string(),
        max: max.to_string(),
        width: width.get(),
        representation: repr.as_str(),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn w(width: u32) -> BitWidth {
        BitWidth::new(width).unwrap()
    }

    fn dec(bits: &str, repr: Representation) -> i64 {
        decode(bits, w(bits.len() as u32), repr)
            .unwrap()
            .to_i64()
            .unwrap()
    }

    fn enc(value: i64, width: u32, repr: Representation) -> String {
        encode(&BigInt::from(value), w(width), repr).unwrap()
    }

    #[test]
    fn test_decode_each_representation() {
        assert_eq!(dec("11111111", Representation::Unsigned), 255);
        assert_eq!(dec("10000101", Representation::SignMagnitude), -5);
        assert_eq!(dec("11111010", Representation::OnesComplement), -5);
        assert_eq!(dec("11111011", Representation::TwosComplement), -5);
        assert_eq!(dec("10000000", Representation::TwosComplement), -128);
        assert_eq!(dec("01111111", Representation::TwosComplement), 127);
    }

    #[test]
    fn test_negative_zero_decodes_to_zero() {
        assert_eq!(dec("10000000", Representation::SignMagnitude), 0);
        assert_eq!(dec("11111111", Representation::OnesComplement), 0);
        let zero = decode("1000", w(4), Representation::SignMagnitude).unwrap();
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_encode_each_representation() {
        assert_eq!(enc(255, 8, Representation::Unsigned), "11111111");
        assert_eq!(enc(-5, 8, Representation::SignMagnitude), "10000101");
        assert_eq!(enc(-5, 8, Representation::OnesComplement), "11111010");
        assert_eq!(enc(-5, 8, Representation::TwosComplement), "11111011");
        assert_eq!(enc(-128, 8, Representation::TwosComplement), "10000000");
        assert_eq!(enc(0, 8, Representation::OnesComplement), "00000000");
    }

    #[test]
    fn test_invalid_digit_reported_before_length() {
        assert_eq!(
            decode("102", w(3), Representation::TwosComplement),
            Err(CalcError::invalid_digit('2', 2, 2))
        );
        // Wrong length and bad digit: the digit wins
        assert_eq!(
            decode("1x", w(8), Representation::Unsigned),
            Err(CalcError::invalid_digit('x', 1, 2))
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            decode("101", w(4), Representation::TwosComplement),
            Err(CalcError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            decode("", w(1), Representation::Unsigned),
            Err(CalcError::LengthMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn test_encode_out_of_range() {
        let err = encode(&BigInt::from(128), w(8), Representation::TwosComplement).unwrap_err();
        assert_eq!(
            err,
            CalcError::OutOfRange {
                value: "128".into(),
                min: "-128".into(),
                max: "127".into(),
                width: 8,
                representation: "twosComplement",
            }
        );
        assert!(encode(&BigInt::from(-1), w(8), Representation::Unsigned).is_err());
        assert!(encode(&BigInt::from(-128), w(8), Representation::SignMagnitude).is_err());
    }

    #[test]
    fn test_wide_patterns() {
        let bits = format!("1{}", "0".repeat(99));
        let value = decode(&bits, w(100), Representation::TwosComplement).unwrap();
        assert_eq!(value, BigInt::from_parts(true, BigUint::pow2(99)));
        assert_eq!(
            encode(&value, w(100), Representation::TwosComplement).unwrap(),
            bits
        );
    }
}
