//! Chord-and-tangent addition law for short Weierstrass curves.

use super::field::{invert, reduce};
use crate::{AffinePoint, CurveParams, Result};
use num_bigint::BigInt;

impl CurveParams {
    /// Returns `lhs + rhs`.
    ///
    /// Identical inputs are doubled with the tangent slope, anything else
    /// takes the chord through both points:
    ///
    /// ```text
    /// λ  = (y₂ − y₁) / (x₂ − x₁)
    /// x₃ = λ² − x₁ − x₂
    /// y₃ = λ·(x₁ − x₃) − y₁
    /// ```
    ///
    /// Adding a point to its negation, or any two distinct points sharing an
    /// x-coordinate, fails with [`Error::UndefinedInverse`](crate::Error::UndefinedInverse).
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        if lhs == rhs {
            return self.double(lhs);
        }

        let p = self.p();
        let dx = reduce(&rhs.x - &lhs.x, p);
        let dy = reduce(&rhs.y - &lhs.y, p);
        let lambda = reduce(invert(&dx, p)? * dy, p);

        Ok(self.chord(lhs, &rhs.x, &lambda))
    }

    /// Returns `point + point`, using the tangent slope
    /// `λ = (3·x² + a) / (2·y)`.
    ///
    /// Doubling a point with `y ≡ 0` fails with
    /// [`Error::UndefinedInverse`](crate::Error::UndefinedInverse).
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        let p = self.p();
        let numerator = BigInt::from(3u8) * &point.x * &point.x + self.a();
        let denominator = reduce(BigInt::from(2u8) * &point.y, p);
        let lambda = reduce(numerator * invert(&denominator, p)?, p);

        Ok(self.chord(point, &point.x, &lambda))
    }

    /// Third intersection of the line with slope `lambda` through `lhs`,
    /// reflected over the x-axis.
    fn chord(&self, lhs: &AffinePoint, rhs_x: &BigInt, lambda: &BigInt) -> AffinePoint {
        let p = self.p();
        let x = reduce(lambda * lambda - &lhs.x - rhs_x, p);
        let y = reduce(lambda * (&lhs.x - &x) - &lhs.y, p);
        AffinePoint { x, y }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AffinePoint, CurveParams, Error};
    use num_bigint::BigInt;
    use proptest::prelude::*;

    /// `y² = x³ + x + 1` over GF(23), whose 28 points form a cyclic group
    /// generated by `(3, 10)`.
    fn toy_curve() -> CurveParams {
        CurveParams::new(
            BigInt::from(23),
            BigInt::from(28),
            BigInt::from(1),
            BigInt::from(1),
            BigInt::from(3),
            BigInt::from(10),
        )
        .unwrap()
    }

    fn point(x: i32, y: i32) -> AffinePoint {
        AffinePoint::new(BigInt::from(x), BigInt::from(y))
    }

    #[test]
    fn double_toy_point() {
        let curve = toy_curve();
        let p = point(3, 10);
        assert_eq!(curve.double(&p).unwrap(), point(7, 12));
        assert_eq!(curve.add(&p, &p).unwrap(), point(7, 12));
    }

    #[test]
    fn add_distinct_toy_points() {
        let curve = toy_curve();
        let sum = curve.add(&point(3, 10), &point(7, 12)).unwrap();
        assert_eq!(sum, point(19, 5));
        assert!(curve.is_on_curve(&sum));
    }

    #[test]
    fn add_with_negative_differences() {
        // both x₂ − x₁ and y₂ − y₁ are negative before reduction
        let curve = toy_curve();
        assert_eq!(curve.add(&point(7, 12), &point(3, 10)).unwrap(), point(19, 5));
    }

    #[test]
    fn add_does_not_touch_operands() {
        let curve = toy_curve();
        let lhs = point(3, 10);
        let rhs = point(7, 12);
        let _ = curve.add(&lhs, &rhs).unwrap();
        assert_eq!(lhs, point(3, 10));
        assert_eq!(rhs, point(7, 12));
    }

    #[test]
    fn add_inverse_pair_is_undefined() {
        let curve = toy_curve();
        assert_eq!(
            curve.add(&point(3, 10), &point(3, 13)),
            Err(Error::UndefinedInverse)
        );
    }

    #[test]
    fn double_two_torsion_point_is_undefined() {
        // (4, 0) = 14·(3, 10) has order two
        let curve = toy_curve();
        assert_eq!(curve.double(&point(4, 0)), Err(Error::UndefinedInverse));
    }

    #[test]
    fn negative_a_coefficient() {
        // y² = x³ − 1·x + 1 over GF(23) is the same curve as a = 22
        let negative = CurveParams::new(
            BigInt::from(23),
            BigInt::from(28),
            BigInt::from(-1),
            BigInt::from(1),
            BigInt::from(0),
            BigInt::from(1),
        )
        .unwrap();
        let canonical = CurveParams::new(
            BigInt::from(23),
            BigInt::from(28),
            BigInt::from(22),
            BigInt::from(1),
            BigInt::from(0),
            BigInt::from(1),
        )
        .unwrap();
        let g = negative.generator().clone();
        assert_eq!(negative.double(&g).unwrap(), canonical.double(&g).unwrap());
        assert!(negative.is_on_curve(&negative.double(&g).unwrap()));
    }

    /// Multiples `k·(3, 10)` for `k` in `1..28`.
    fn multiple() -> impl Strategy<Value = AffinePoint> {
        (1u32..28).prop_map(|k| {
            let curve = toy_curve();
            curve
                .scalar_multiply(&k.into(), curve.generator())
                .unwrap()
        })
    }

    proptest! {
        #[test]
        fn sum_stays_on_curve(a in multiple(), b in multiple()) {
            let curve = toy_curve();
            // inverse pairs leave the affine part of the group
            prop_assume!(a.x != b.x || a.y == b.y);
            prop_assume!(a != b || a.y != BigInt::from(0));
            let sum = curve.add(&a, &b).unwrap();
            prop_assert!(curve.is_on_curve(&sum));
        }

        #[test]
        fn addition_commutes(a in multiple(), b in multiple()) {
            let curve = toy_curve();
            prop_assume!(a.x != b.x);
            prop_assert_eq!(curve.add(&a, &b).unwrap(), curve.add(&b, &a).unwrap());
        }
    }
}
