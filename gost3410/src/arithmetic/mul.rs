//! Scalar multiplication.

use crate::{AffinePoint, CurveParams, Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

impl CurveParams {
    /// Returns `degree · point`.
    ///
    /// Binary double-and-add over `degree − 1`, least significant bit first:
    /// the accumulator starts at `point` and each set bit `i` adds
    /// `2ⁱ · point` into it. A zero degree fails with [`Error::ZeroDegree`]
    /// since the result would be the point at infinity.
    ///
    /// The degree is expected to be reduced modulo the subgroup order `q`
    /// already. Not constant time.
    pub fn scalar_multiply(&self, degree: &BigUint, point: &AffinePoint) -> Result<AffinePoint> {
        if degree.is_zero() {
            return Err(Error::ZeroDegree);
        }

        log::trace!("{}: scalar multiplication by a {}-bit degree", self, degree.bits());

        let mut bits = degree - BigUint::one();
        let mut acc = point.clone();
        let mut doubled = point.clone();

        while !bits.is_zero() {
            if bits.is_odd() {
                acc = self.add(&acc, &doubled)?;
            }

            bits >>= 1u32;

            // the doubling after the top bit would never be used
            if !bits.is_zero() {
                doubled = self.double(&doubled)?;
            }
        }

        Ok(acc)
    }

    /// Returns `degree · G` for the curve's base point `G`.
    pub fn mul_base(&self, degree: &BigUint) -> Result<AffinePoint> {
        self.scalar_multiply(degree, self.generator())
    }
}
