//! # BigUint
//! Arbitrary-precision unsigned integers.
//!
//! The magnitude is a little-endian sequence of base-2³² limbs kept in
//! canonical form: no most-significant zero limb, except that zero itself is
//! exactly one zero limb. Every operation preserves that form, so equality
//! and ordering can compare limbs directly.
//!
//! # Example
//! ```
//! use big_mul::BigUint;
//!
//! let a: BigUint = "255".parse().unwrap();
//! let b: BigUint = "+4294967296".parse().unwrap();
//! assert_eq!(a.to_hex(), "0xff");
//! assert_eq!((&a * &b).to_hex(), "0xff00000000");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, MulAssign};
use std::str::FromStr;

use crate::big_mul_cache::*;
use crate::big_mul_constants::*;
use crate::error::ParseBigUintError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigUint {
    /// Little-endian limbs; `limbs[0]` holds the least-significant 32 bits.
    limbs: Vec<u32>,
}

// construction
impl BigUint {
    /// Builds from raw limbs, restoring canonical form.
    pub(crate) fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        BigUint { limbs }
    }

    /// The canonical zero value: a single zero limb.
    pub fn zero() -> Self {
        SMALL_CACHE[0].clone()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Number of significant limbs. Zero occupies one limb.
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    fn value_of(val: u64) -> Self {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let high = (val >> u32::BITS) as u32;
        let limbs = if high == 0 {
            vec![val as u32]
        } else {
            vec![val as u32, high]
        };
        BigUint { limbs }
    }
}

macro_rules! impl_unsigned_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_uint!(u8, u16, u32, usize, u64);

// storage management
impl BigUint {
    /// Ensures capacity for at least `need` limbs, doubling from
    /// [`MIN_CAPACITY`]. A target past [`MAX_LIMBS`] means the number's limb
    /// count itself is unaddressable, which is fatal.
    fn reserve(&mut self, need: usize) {
        if self.limbs.capacity() >= need {
            return;
        }
        let mut cap = self.limbs.capacity().max(MIN_CAPACITY);
        while cap < need {
            if cap > MAX_LIMBS >> 1 {
                panic!("BigUint capacity overflow: {} limbs requested", need);
            }
            cap <<= 1;
        }
        self.limbs.reserve_exact(cap - self.limbs.len());
    }

    /// Resets to the canonical zero form.
    fn set_zero(&mut self) {
        self.reserve(1);
        self.limbs.clear();
        self.limbs.push(0);
    }

    /// Trims most-significant zero limbs; an emptied magnitude collapses back
    /// to the canonical zero form. Idempotent.
    fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.set_zero();
        }
    }
}

// parsing
impl BigUint {
    /// One step of decimal accumulation: `self = self * 10 + digit`.
    ///
    /// The digit rides in as the initial carry of a widened 64-bit sweep over
    /// the limbs. A limb is appended only for a nonzero final carry, so
    /// canonical form is preserved without re-normalizing.
    fn mul10_add(&mut self, digit: u32) {
        let mut carry = digit as u64;
        for limb in self.limbs.iter_mut() {
            let cur = *limb as u64 * 10 + carry;
            *limb = cur as u32;
            carry = cur >> u32::BITS;
        }
        if carry != 0 {
            self.reserve(self.limbs.len() + 1);
            self.limbs.push(carry as u32);
        }
    }
}

impl FromStr for BigUint {
    type Err = ParseBigUintError;

    /// Parses an unsigned decimal string.
    ///
    /// Leading ASCII whitespace and one leading `+` are accepted. At least
    /// one digit must follow. ASCII whitespace after the digits terminates
    /// the number; whatever follows the terminator is not inspected. Any
    /// other character fails the parse. Leading zeros carry no magnitude, so
    /// `"007"` parses to seven.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = BigUint::zero();
        let mut chars = s.chars().skip_while(|c| c.is_ascii_whitespace()).peekable();
        if chars.peek() == Some(&'+') {
            chars.next();
        }
        match chars.peek() {
            Some(c) if c.is_ascii_digit() => {}
            Some(&c) => return Err(ParseBigUintError::InvalidDigit(c)),
            None => return Err(ParseBigUintError::Empty),
        }
        for c in chars {
            if c.is_ascii_whitespace() {
                break;
            }
            match c.to_digit(10) {
                Some(digit) => result.mul10_add(digit),
                None => return Err(ParseBigUintError::InvalidDigit(c)),
            }
        }
        result.normalize();
        Ok(result)
    }
}

// comparison
impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form: a longer magnitude is strictly larger, and equal
        // lengths compare most-significant limb first.
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

// multiplication
impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    /// Schoolbook product, O(an · bn) limb multiplications.
    fn mul(self, rhs: &BigUint) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }
        let mut product = BigUint {
            limbs: BigUint::mul_limbs(&self.limbs, &rhs.limbs),
        };
        product.normalize();
        product
    }
}

impl BigUint {
    /// Accumulates `a * b` into a fresh `a.len() + b.len()` limb buffer.
    ///
    /// `a.len() + b.len()` limbs always hold the product, with at most one
    /// leading zero limb left for the caller to trim. Row `i`'s final carry
    /// lands at index `i + b.len()`, untouched by earlier rows, so a single
    /// widened add settles it.
    fn mul_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
        let mut acc = vec![0u32; a.len() + b.len()];
        for (i, &a_limb) in a.iter().enumerate() {
            let a_limb = a_limb as u64;
            let mut carry = 0u64;
            for (j, &b_limb) in b.iter().enumerate() {
                let sum = acc[i + j] as u64 + a_limb * b_limb as u64 + carry;
                acc[i + j] = sum as u32;
                carry = sum >> u32::BITS;
            }
            let top = acc[i + b.len()] as u64 + carry;
            acc[i + b.len()] = top as u32;
        }
        acc
    }
}

impl Mul for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign for BigUint {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = &*self * rhs;
    }
}

// printing
impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Top limb bare, the rest zero-padded to 8 digits each. The single
        // zero limb of canonical zero renders as "0" on its own.
        write!(f, "{:x}", self.limbs.last().unwrap_or(&0))?;
        for limb in self.limbs.iter().rev().skip(1) {
            write!(f, "{limb:08x}")?;
        }
        Ok(())
    }
}

impl BigUint {
    /// Lowercase hexadecimal rendering with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{self:x}")
    }
}

#[test]
fn test_zero_canonical_form() {
    for s in ["0", "000", "+0", "  0"] {
        let zero: BigUint = s.parse().unwrap();
        assert_eq!(zero.limbs, vec![0]);
        assert_eq!(zero.to_hex(), "0x0");
    }
    let by_product = &BigUint::from(12345_u32) * &BigUint::zero();
    assert_eq!(by_product.limbs, vec![0]);
    assert_eq!(by_product.to_hex(), "0x0");
}

#[test]
fn test_parse_to_hex() {
    let a: BigUint = "255".parse().unwrap();
    assert_eq!(a.to_hex(), "0xff");
    // 2^32 needs a second limb; its low limb must render zero-padded.
    let b: BigUint = "4294967296".parse().unwrap();
    assert_eq!(b.limbs, vec![0, 1]);
    assert_eq!(b.to_hex(), "0x100000000");
    // 2^128
    let c: BigUint = "340282366920938463463374607431768211456".parse().unwrap();
    assert_eq!(c.limb_len(), 5);
    assert_eq!(c.to_hex(), "0x100000000000000000000000000000000");
}

#[test]
fn test_parse_leading_zeros_and_terminator() {
    let a: BigUint = "007".parse().unwrap();
    assert_eq!(a.limbs, vec![7]);
    let b: BigUint = " +42\n".parse().unwrap();
    assert_eq!(b.limbs, vec![42]);
    // whitespace ends the number; the tail is not inspected
    let c: BigUint = "13 anything".parse().unwrap();
    assert_eq!(c.limbs, vec![13]);
}

#[test]
fn test_parse_rejects() {
    assert_eq!("".parse::<BigUint>(), Err(ParseBigUintError::Empty));
    assert_eq!("  ".parse::<BigUint>(), Err(ParseBigUintError::Empty));
    assert_eq!("+".parse::<BigUint>(), Err(ParseBigUintError::Empty));
    assert_eq!(
        "-5".parse::<BigUint>(),
        Err(ParseBigUintError::InvalidDigit('-'))
    );
    assert_eq!(
        "12a3".parse::<BigUint>(),
        Err(ParseBigUintError::InvalidDigit('a'))
    );
    assert_eq!(
        "++1".parse::<BigUint>(),
        Err(ParseBigUintError::InvalidDigit('+'))
    );
}

#[test]
fn test_normalize_idempotent() {
    let mut a = BigUint::from_limbs(vec![5, 9, 0, 0]);
    assert_eq!(a.limbs, vec![5, 9]);
    a.normalize();
    assert_eq!(a.limbs, vec![5, 9]);

    let zero = BigUint::from_limbs(vec![0, 0, 0]);
    assert_eq!(zero.limbs, vec![0]);
}

#[test]
fn test_known_product() {
    let a: BigUint = "123456789".parse().unwrap();
    let b: BigUint = "987654321".parse().unwrap();
    // 121932631112635269
    assert_eq!((&a * &b).to_hex(), "0x1b13114fbff5385");
    assert_eq!((&b * &a).to_hex(), "0x1b13114fbff5385");
}

#[test]
fn test_product_limb_growth() {
    // (2^64 - 1)^2 : two 2-limb operands, product fills exactly 4 limbs
    let a: BigUint = "18446744073709551615".parse().unwrap();
    assert_eq!(a.limb_len(), 2);
    let sq = &a * &a;
    assert_eq!(sq.limb_len(), 4);
    assert_eq!(sq.to_hex(), "0xfffffffffffffffe0000000000000001");

    // 2^32 * 2^32: the top limb of the 4-limb buffer trims away
    let b: BigUint = "4294967296".parse().unwrap();
    let p = &b * &b;
    assert_eq!(p.limb_len(), 3);
    assert_eq!(p.to_hex(), "0x10000000000000000");
}

#[test]
fn test_mul_identity_and_assign() {
    let a: BigUint = "340282366920938463463374607431768211456".parse().unwrap();
    let one = BigUint::from(1_u32);
    assert_eq!(&a * &one, a);

    let mut b = a.clone();
    b *= &one;
    assert_eq!(b, a);
    b *= BigUint::from(2_u32);
    assert_eq!(b.to_hex(), "0x200000000000000000000000000000000");
}

#[test]
fn test_value_of_and_ordering() {
    assert_eq!(BigUint::from(0_u8), BigUint::zero());
    assert_eq!(BigUint::from(16_u32).limbs, vec![16]);
    assert_eq!(BigUint::from(u64::MAX).limbs, vec![u32::MAX, u32::MAX]);

    let small: BigUint = "999999999999".parse().unwrap();
    let big: BigUint = "1000000000000000000000".parse().unwrap();
    assert!(small < big);
    assert!(BigUint::zero() < BigUint::from(1_u32));
    assert_eq!(
        small.cmp(&"999999999999".parse().unwrap()),
        Ordering::Equal
    );
}

#[test]
fn test_reserve_growth_during_parse() {
    // 60 decimal digits force several capacity doublings through mul10_add
    let s = "9".repeat(60);
    let a: BigUint = s.parse().unwrap();
    assert_eq!(a.limb_len(), 7);
    assert!(a.limbs.capacity() >= a.limb_len());
}
