//! Arbitrary-precision integers
//!
//! Digit-array big integers shared by the codec, the arithmetic engine and the
//! base converter. Nothing in the value path is bounded by a machine word:
//! bit widths and digit strings are caller-controlled.
//!
//! `BigUint` stores `u32` limbs little-endian with no high zero limbs, so zero
//! is the empty vector. `BigInt` is sign + magnitude and zero is never negative.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Digit alphabet for radix 2..=36, most significant digit value first
pub(crate) const DIGIT_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const LIMB_BITS: u64 = 32;

// ============================================================================
// BigUint
// ============================================================================

/// Arbitrary-precision unsigned integer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    /// Little-endian limbs (least significant first)
    limbs: Vec<u32>,
}

impl BigUint {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    pub fn from_u64(value: u64) -> Self {
        let mut n = Self {
            limbs: vec![value as u32, (value >> 32) as u32],
        };
        n.normalize();
        n
    }

    /// `2^exp`
    pub fn pow2(exp: u64) -> Self {
        let mut n = Self::zero();
        n.set_bit(exp);
        n
    }

    /// `2^bits - 1`, i.e. a run of `bits` one bits
    pub fn ones(bits: u64) -> Self {
        let full = (bits / LIMB_BITS) as usize;
        let partial = bits % LIMB_BITS;
        let mut limbs = vec![u32::MAX; full];
        if partial > 0 {
            limbs.push((1u32 << partial) - 1);
        }
        Self { limbs }
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits (0 for zero)
    pub fn bits(&self) -> u64 {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                (self.limbs.len() as u64 - 1) * LIMB_BITS + u64::from(32 - top.leading_zeros())
            },
        }
    }

    pub fn bit(&self, index: u64) -> bool {
        let limb = (index / LIMB_BITS) as usize;
        limb < self.limbs.len() && (self.limbs[limb] >> (index % LIMB_BITS)) & 1 == 1
    }

    pub fn set_bit(&mut self, index: u64) {
        let limb = (index / LIMB_BITS) as usize;
        if limb >= self.limbs.len() {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] |= 1 << (index % LIMB_BITS);
    }

    pub fn clear_bit(&mut self, index: u64) {
        let limb = (index / LIMB_BITS) as usize;
        if limb < self.limbs.len() {
            self.limbs[limb] &= !(1 << (index % LIMB_BITS));
            self.normalize();
        }
    }

    /// Bitwise complement within a field of `bits` bits.
    ///
    /// Bits of `self` at or above `bits` are ignored.
    pub fn complement(&self, bits: u64) -> Self {
        let mut out = Self::ones(bits);
        for (limb, &own) in out.limbs.iter_mut().zip(self.limbs.iter()) {
            *limb ^= own;
        }
        out.normalize();
        out
    }

    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [lo] => Some(u64::from(*lo)),
            [lo, hi] => Some(u64::from(*lo) | (u64::from(*hi) << 32)),
            _ => None,
        }
    }

    /// Multiply-and-add in place: `self = self * multiplier + addend`
    pub fn mul_small_add(&mut self, multiplier: u32, addend: u32) {
        let mut carry = u64::from(addend);
        for limb in self.limbs.iter_mut() {
            let wide = u64::from(*limb) * u64::from(multiplier) + carry;
            *limb = wide as u32;
            carry = wide >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
        self.normalize();
    }

    /// Divide-and-remainder in place: `self = self / divisor`, returns `self % divisor`.
    ///
    /// `divisor` must be non-zero.
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        debug_assert!(divisor != 0, "div_rem_small by zero");
        let divisor = u64::from(divisor);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let cur = (rem << 32) | u64::from(*limb);
            *limb = (cur / divisor) as u32;
            rem = cur % divisor;
        }
        self.normalize();
        rem as u32
    }

    fn shl1(&mut self) {
        let mut carry = 0u32;
        for limb in self.limbs.iter_mut() {
            let next = *limb >> 31;
            *limb = (*limb << 1) | carry;
            carry = next;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// `larger - smaller`; caller guarantees `larger >= smaller`
    fn sub_magnitude(larger: &Self, smaller: &Self) -> Self {
        let mut limbs = Vec::with_capacity(larger.limbs.len());
        let mut borrow = 0i64;
        for (i, &a) in larger.limbs.iter().enumerate() {
            let b = i64::from(smaller.limbs.get(i).copied().unwrap_or(0));
            let mut diff = i64::from(a) - b - borrow;
            if diff < 0 {
                diff += 1 << 32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs.push(diff as u32);
        }
        let mut n = Self { limbs };
        n.normalize();
        n
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self < other {
            None
        } else {
            Some(Self::sub_magnitude(self, other))
        }
    }

    /// Long division, `None` when `divisor` is zero
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if self < divisor {
            return Some((Self::zero(), self.clone()));
        }
        if let [single] = divisor.limbs.as_slice() {
            let mut quotient = self.clone();
            let rem = quotient.div_rem_small(*single);
            return Some((quotient, Self::from_u64(u64::from(rem))));
        }

        // Shift-subtract, one dividend bit at a time
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        for i in (0..self.bits()).rev() {
            remainder.shl1();
            if self.bit(i) {
                remainder.set_bit(0);
            }
            if let Some(diff) = remainder.checked_sub(divisor) {
                remainder = diff;
                quotient.set_bit(i);
            }
        }
        Some((quotient, remainder))
    }

    /// Render in `radix` (2..=36), most significant digit first, uppercase letters
    pub fn to_str_radix(&self, radix: u32) -> String {
        debug_assert!((2..=36).contains(&radix), "radix out of range: {}", radix);
        if self.is_zero() {
            return "0".to_string();
        }
        let mut n = self.clone();
        let mut digits = Vec::new();
        while !n.is_zero() {
            let digit = n.div_rem_small(radix);
            digits.push(char::from(DIGIT_ALPHABET[digit as usize]));
        }
        digits.iter().rev().collect()
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut limbs = Vec::with_capacity(long.limbs.len() + 1);
        let mut carry = 0u64;
        for (i, &a) in long.limbs.iter().enumerate() {
            let sum = u64::from(a) + u64::from(short.limbs.get(i).copied().unwrap_or(0)) + carry;
            limbs.push(sum as u32);
            carry = sum >> 32;
        }
        if carry != 0 {
            limbs.push(carry as u32);
        }
        BigUint { limbs }
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        let mut limbs = vec![0u32; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.limbs.iter().enumerate() {
                let cur = u64::from(limbs[i + j]) + u64::from(a) * u64::from(b) + carry;
                limbs[i + j] = cur as u32;
                carry = cur >> 32;
            }
            limbs[i + other.limbs.len()] = carry as u32;
        }
        let mut n = BigUint { limbs };
        n.normalize();
        n
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10))
    }
}

// ============================================================================
// BigInt
// ============================================================================

/// Arbitrary-precision signed integer (sign + magnitude)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: BigUint,
}

impl BigInt {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from sign and magnitude; a zero magnitude is always non-negative
    pub fn from_parts(negative: bool, magnitude: BigUint) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Truncating division: quotient rounds toward zero, remainder takes the
    /// dividend's sign. `None` when `divisor` is zero.
    pub fn div_rem_trunc(&self, divisor: &Self) -> Option<(Self, Self)> {
        let (quotient, remainder) = self.magnitude.div_rem(&divisor.magnitude)?;
        Some((
            Self::from_parts(self.negative != divisor.negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, BigUint::from_u64(value.unsigned_abs()))
    }
}

impl From<BigUint> for BigInt {
    fn from(magnitude: BigUint) -> Self {
        Self::from_parts(false, magnitude)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.magnitude.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.magnitude)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        if self.negative == other.negative {
            return BigInt::from_parts(self.negative, &self.magnitude + &other.magnitude);
        }
        match self.magnitude.cmp(&other.magnitude) {
            Ordering::Less => BigInt::from_parts(
                other.negative,
                BigUint::sub_magnitude(&other.magnitude, &self.magnitude),
            ),
            _ => BigInt::from_parts(
                self.negative,
                BigUint::sub_magnitude(&self.magnitude, &other.magnitude),
            ),
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        self + &(-other)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_parts(
            self.negative != other.negative,
            &self.magnitude * &other.magnitude,
        )
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&self.magnitude, f)
    }
}
