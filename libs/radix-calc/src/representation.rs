//! Numeric representations and bit widths

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bigint::{BigInt, BigUint};
use crate::error::{CalcError, Result};

/// Scheme mapping a fixed-width bit pattern to a signed integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    #[serde(rename = "unsigned")]
    Unsigned,
    /// Sign-magnitude: MSB is the sign, the rest is the magnitude
    #[serde(rename = "signOnly")]
    SignMagnitude,
    #[serde(rename = "onesComplement")]
    OnesComplement,
    #[serde(rename = "twosComplement")]
    TwosComplement,
}

impl Representation {
    pub const ALL: [Representation; 4] = [
        Self::Unsigned,
        Self::SignMagnitude,
        Self::OnesComplement,
        Self::TwosComplement,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::SignMagnitude => "signOnly",
            Self::OnesComplement => "onesComplement",
            Self::TwosComplement => "twosComplement",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::SignMagnitude => "sign-magnitude",
            Self::OnesComplement => "1's complement",
            Self::TwosComplement => "2's complement",
        }
    }

    /// Inclusive `(min, max)` of values representable in `width` bits
    pub fn range(&self, width: BitWidth) -> (BigInt, BigInt) {
        let w = u64::from(width.get());
        match self {
            Self::Unsigned => (BigInt::zero(), BigInt::from(BigUint::ones(w))),
            Self::SignMagnitude | Self::OnesComplement => {
                let max = BigInt::from(BigUint::ones(w - 1));
                (-&max, max)
            },
            Self::TwosComplement => (
                BigInt::from_parts(true, BigUint::pow2(w - 1)),
                BigInt::from(BigUint::ones(w - 1)),
            ),
        }
    }

    pub fn contains(&self, value: &BigInt, width: BitWidth) -> bool {
        let (min, max) = self.range(width);
        min <= *value && *value <= max
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        // Case, spaces, underscores, dashes and apostrophes are not significant
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "unsigned" => Ok(Self::Unsigned),
            "signonly" | "signed" | "signmagnitude" | "signedmagnitude" => Ok(Self::SignMagnitude),
            "onescomplement" | "1scomplement" => Ok(Self::OnesComplement),
            "twoscomplement" | "2scomplement" => Ok(Self::TwosComplement),
            _ => Err(CalcError::unsupported_representation(s)),
        }
    }
}

/// Validated bit width (at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BitWidth(u32);

impl BitWidth {
    pub fn new(width: u32) -> Result<Self> {
        if width == 0 {
            return Err(CalcError::InvalidWidth(0));
        }
        Ok(Self(width))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for BitWidth {
    type Error = CalcError;

    fn try_from(width: i64) -> Result<Self> {
        let width = u32::try_from(width).map_err(|_| CalcError::InvalidWidth(width))?;
        Self::new(width)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn range_i64(repr: Representation, width: u32) -> (i64, i64) {
        let (min, max) = repr.range(BitWidth::new(width).unwrap());
        (min.to_i64().unwrap(), max.to_i64().unwrap())
    }

    #[test]
    fn test_ranges_at_width_8() {
        assert_eq!(range_i64(Representation::Unsigned, 8), (0, 255));
        assert_eq!(range_i64(Representation::SignMagnitude, 8), (-127, 127));
        assert_eq!(range_i64(Representation::OnesComplement, 8), (-127, 127));
        assert_eq!(range_i64(Representation::TwosComplement, 8), (-128, 127));
    }

    #[test]
    fn test_ranges_at_width_1() {
        assert_eq!(range_i64(Representation::Unsigned, 1), (0, 1));
        assert_eq!(range_i64(Representation::SignMagnitude, 1), (0, 0));
        assert_eq!(range_i64(Representation::OnesComplement, 1), (0, 0));
        assert_eq!(range_i64(Representation::TwosComplement, 1), (-1, 0));
    }

    #[test]
    fn test_wide_range_is_not_machine_bounded() {
        let (min, max) = Representation::TwosComplement.range(BitWidth::new(200).unwrap());
        assert_eq!(min.magnitude().bits(), 200);
        assert_eq!(max.magnitude().bits(), 199);
    }

    #[test]
    fn test_parse_wire_and_legacy_names() {
        let cases = [
            ("unsigned", Representation::Unsigned),
            ("signOnly", Representation::SignMagnitude),
            ("sign-magnitude", Representation::SignMagnitude),
            ("Signed", Representation::SignMagnitude),
            ("onesComplement", Representation::OnesComplement),
            ("1's complement", Representation::OnesComplement),
            ("ones_complement", Representation::OnesComplement),
            ("twosComplement", Representation::TwosComplement),
            ("2's Complement", Representation::TwosComplement),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Representation>().unwrap(), expected, "{input}");
        }
        assert_eq!(
            "excess-127".parse::<Representation>(),
            Err(CalcError::UnsupportedRepresentation("excess-127".into()))
        );
    }

    #[test]
    fn test_serde_wire_names() {
        for repr in Representation::ALL {
            let json = serde_json::to_string(&repr).unwrap();
            assert_eq!(json, format!("\"{}\"", repr.as_str()));
            let back: Representation = serde_json::from_str(&json).unwrap();
            assert_eq!(back, repr);
        }
    }

    #[test]
    fn test_bit_width_validation() {
        assert_eq!(BitWidth::new(0), Err(CalcError::InvalidWidth(0)));
        assert_eq!(BitWidth::try_from(-3), Err(CalcError::InvalidWidth(-3)));
        assert_eq!(BitWidth::try_from(8).unwrap().get(), 8);
    }
}
