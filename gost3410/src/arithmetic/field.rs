//! Arithmetic modulo the field characteristic `p`.
//!
//! Field elements are plain [`BigInt`]s. The remainder operator truncates
//! toward zero, so `v % p` lies in `(-p, p)` and one addition of `p` is enough
//! to bring a negative residue back into `[0, p)`.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::Signed;

/// Fold a residue in `(-p, p)` into `[0, p)`.
#[inline]
pub(crate) fn pos(mut v: BigInt, p: &BigInt) -> BigInt {
    if v.is_negative() {
        v += p;
    }
    v
}

/// Returns `v mod p` in `[0, p)`.
#[inline]
pub(crate) fn reduce(v: BigInt, p: &BigInt) -> BigInt {
    pos(v % p, p)
}

/// Returns `v⁻¹ mod p` in `[0, p)`.
///
/// Fails with [`Error::UndefinedInverse`] when `gcd(v, p) ≠ 1`, which for a
/// prime `p` means `v ≡ 0`.
pub(crate) fn invert(v: &BigInt, p: &BigInt) -> Result<BigInt> {
    match v.modinv(p) {
        Some(inv) => Ok(inv),
        None => {
            log::debug!("no inverse of {v} modulo {p}");
            Err(Error::UndefinedInverse)
        }
    }
}
