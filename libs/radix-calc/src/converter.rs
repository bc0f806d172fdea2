//! Arbitrary-base numeral conversion
//!
//! Numerals are an optional leading `-`, integer digits and an optional
//! `.`-separated fraction, using the alphabet `0-9A-Z` (case-insensitive).
//! The integer part is converted exactly. The fraction is converted as an
//! exact rational and truncated to `fraction_digits` output digits.

use tracing::debug;

use crate::bigint::{BigUint, DIGIT_ALPHABET};
use crate::error::{CalcError, Result};
use crate::limits::Limits;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;
pub const DEFAULT_FRACTION_DIGITS: usize = 6;

pub fn validate_base(base: i64) -> Result<u32> {
    match u32::try_from(base) {
        Ok(b) if (MIN_BASE..=MAX_BASE).contains(&b) => Ok(b),
        _ => Err(CalcError::InvalidBase(base)),
    }
}

/// Parsed numeral, digits already validated against their base
struct Numeral {
    negative: bool,
    integer: BigUint,
    /// Fraction numerator; the denominator is `base^fraction_len`
    fraction: BigUint,
    fraction_len: usize,
}

fn parse_numeral(input: &str, base: u32) -> Result<Numeral> {
    let (negative, body, offset) = match input.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, input, 0),
    };

    let mut integer = BigUint::zero();
    let mut fraction = BigUint::zero();
    let mut fraction_len = 0usize;
    let mut digit_count = 0usize;
    let mut in_fraction = false;

    for (i, c) in body.chars().enumerate() {
        let position = i + offset;
        if c == '.' && !in_fraction {
            in_fraction = true;
            continue;
        }
        let digit = c
            .to_digit(MAX_BASE)
            .filter(|d| *d < base)
            .ok_or_else(|| CalcError::invalid_digit(c, position, base))?;
        if in_fraction {
            fraction.mul_small_add(base, digit);
            fraction_len += 1;
        } else {
            integer.mul_small_add(base, digit);
        }
        digit_count += 1;
    }

    if digit_count == 0 {
        return Err(CalcError::EmptyNumeral);
    }
    Ok(Numeral {
        negative,
        integer,
        fraction,
        fraction_len,
    })
}

/// Emit up to `max_digits` fraction digits of `numerator / denominator` in
/// `base`, trailing zeros dropped
fn render_fraction(
    numerator: &BigUint,
    denominator: &BigUint,
    base: u32,
    max_digits: usize,
) -> String {
    let radix = BigUint::from_u64(u64::from(base));
    let mut remainder = numerator.clone();
    let mut digits = String::new();
    for _ in 0..max_digits {
        if remainder.is_zero() {
            break;
        }
        let scaled = &remainder * &radix;
        let Some((digit, rest)) = scaled.div_rem(denominator) else {
            break;
        };
        let digit = digit.to_u64().unwrap_or_default() as usize;
        digits.push(char::from(DIGIT_ALPHABET[digit]));
        remainder = rest;
    }
    digits.trim_end_matches('0').to_string()
}

/// Numeral converter with input limits and fraction precision
#[derive(Debug, Clone)]
pub struct BaseConverter {
    limits: Limits,
    fraction_digits: usize,
}

impl Default for BaseConverter {
    fn default() -> Self {
        Self::new(Limits::default(), DEFAULT_FRACTION_DIGITS)
    }
}

impl BaseConverter {
    pub fn new(limits: Limits, fraction_digits: usize) -> Self {
        Self {
            limits,
            fraction_digits,
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// Re-express `number` from `from_base` in `to_base`.
    ///
    /// Bases are checked first, then the input length, then the digits.
    pub fn convert(&self, number: &str, from_base: u32, to_base: u32) -> Result<String> {
        let from = validate_base(i64::from(from_base))?;
        let to = validate_base(i64::from(to_base))?;
        let number = number.trim();
        self.limits.check_digits("numeral", number.chars().count())?;

        let numeral = parse_numeral(number, from)?;
        let mut out = numeral.integer.to_str_radix(to);
        if numeral.fraction_len > 0 {
            let mut denominator = BigUint::one();
            for _ in 0..numeral.fraction_len {
                denominator.mul_small_add(from, 0);
            }
            let fraction =
                render_fraction(&numeral.fraction, &denominator, to, self.fraction_digits);
            if !fraction.is_empty() {
                out.push('.');
                out.push_str(&fraction);
            }
        }
        if numeral.negative && out != "0" {
            out.insert(0, '-');
        }

        debug!(from_base = from, to_base = to, input = number, output = %out, "converted numeral");
        Ok(out)
    }
}

/// Convert with default limits and fraction precision
pub fn convert(number: &str, from_base: u32, to_base: u32) -> Result<String> {
    BaseConverter::default().convert(number, from_base, to_base)
}
