//! Big Mul \
//! This crate provides:
//! - [`BigUint`]: arbitrary-precision unsigned integers stored as little-endian
//!   base-2³² limbs, with decimal parsing, schoolbook multiplication and
//!   lowercase hexadecimal rendering.
//! - [`ParseBigUintError`]: the failure cases of decimal parsing.
//!
//! # Example
//! ```
//! use big_mul::BigUint;
//!
//! let a: BigUint = "123456789".parse().unwrap();
//! let b: BigUint = "987654321".parse().unwrap();
//! assert_eq!((&a * &b).to_hex(), "0x1b13114fbff5385");
//! ```

mod big_mul_cache;
mod big_mul_constants;
mod big_uint;
mod error;

pub use big_uint::BigUint;
pub use error::ParseBigUintError;

#[cfg(test)]
mod tests {
    use crate::BigUint;

    #[test]
    fn it_works() {
        let a: BigUint = "10000000000000".parse().unwrap();
        let b: BigUint = "900000000000".parse().unwrap();
        assert_eq!((&a * &b).to_hex(), "0x771d2fa45345aa9000000");
        assert_eq!(&a * &BigUint::zero(), BigUint::zero());
    }
}
