//! Curve domain parameters.

use crate::{AffinePoint, Error, Result, arithmetic::field::reduce};
use alloc::borrow::Cow;
use core::fmt;
use num_bigint::BigInt;
use num_traits::{One, Signed};

/// Field size of the largest curves which still encode coordinates in
/// 32 bytes.
const SMALL_FIELD_BITS: u64 = 256;

/// Domain parameters of an elliptic curve in short Weierstrass form
///
/// ```text
/// y² ≡ x³ + a·x + b (mod p)
/// ```
///
/// together with a base point `G` generating a subgroup of prime order `q`.
/// The base point is checked against the equation when the parameters are
/// built; afterwards the value is read-only and can be shared freely between
/// threads.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Identifier used for display purposes only
    name: Cow<'static, str>,

    /// Characteristic of the underlying prime field
    p: BigInt,

    /// Order of the subgroup generated by the base point
    q: BigInt,

    /// Ratio of the curve's point count to `q`
    cofactor: BigInt,

    /// Coefficient `a` in the curve equation
    a: BigInt,

    /// Coefficient `b` in the curve equation
    b: BigInt,

    /// Coefficients `(e, d)` of the twisted Edwards form
    edwards: Option<(BigInt, BigInt)>,

    /// Base point
    generator: AffinePoint,
}

impl CurveParams {
    /// Build curve parameters from the field characteristic `p`, subgroup
    /// order `q`, equation coefficients `a`, `b` and base point `(x, y)`.
    ///
    /// The cofactor defaults to 1 and no Edwards coefficients are attached,
    /// see [`CurveParams::with_cofactor`] and [`CurveParams::with_edwards`].
    ///
    /// Returns [`Error::InvalidCurveParameters`] if `p ≤ 3` or if `(x, y)` is
    /// not a point of the curve with both coordinates in `[0, p)`.
    pub fn new(p: BigInt, q: BigInt, a: BigInt, b: BigInt, x: BigInt, y: BigInt) -> Result<Self> {
        if p <= BigInt::from(3u8) {
            log::debug!("rejecting curve parameters: field characteristic {p} is too small");
            return Err(Error::InvalidCurveParameters);
        }

        let curve = Self {
            name: Cow::Borrowed("unknown"),
            p,
            q,
            cofactor: BigInt::one(),
            a,
            b,
            edwards: None,
            generator: AffinePoint::new(x, y),
        };

        if !curve.is_on_curve(&curve.generator) {
            log::debug!(
                "rejecting curve parameters: base point ({}, {}) is not on the curve",
                curve.generator.x,
                curve.generator.y
            );
            return Err(Error::InvalidCurveParameters);
        }

        Ok(curve)
    }

    /// Set the cofactor.
    pub fn with_cofactor(mut self, cofactor: BigInt) -> Self {
        self.cofactor = cofactor;
        self
    }

    /// Attach the coefficients of the equivalent twisted Edwards curve
    /// `e·u² + v² = 1 + d·u²·v²`.
    ///
    /// The values are stored as given and never checked against `a` and `b`.
    pub fn with_edwards(mut self, e: BigInt, d: BigInt) -> Self {
        self.edwards = Some((e, d));
        self
    }

    /// Set the name shown by the [`fmt::Display`] impl.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Characteristic of the underlying prime field.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Order of the base point subgroup.
    pub fn q(&self) -> &BigInt {
        &self.q
    }

    /// Cofactor.
    pub fn cofactor(&self) -> &BigInt {
        &self.cofactor
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Twisted Edwards coefficients `(e, d)`, if any were attached.
    pub fn edwards(&self) -> Option<(&BigInt, &BigInt)> {
        self.edwards.as_ref().map(|(e, d)| (e, d))
    }

    /// Base point.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Size of a serialized point coordinate in bytes: 32 for curves over
    /// fields of up to 256 bits, 64 for larger ones.
    pub fn point_size(&self) -> usize {
        if self.p.bits() <= SMALL_FIELD_BITS {
            32
        } else {
            64
        }
    }

    /// Does `point` lie on this curve?
    ///
    /// Both coordinates must already be reduced into `[0, p)`.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        if !self.is_reduced(&point.x) || !self.is_reduced(&point.y) {
            return false;
        }

        let lhs = reduce(&point.y * &point.y, &self.p);
        let rhs = reduce((&point.x * &point.x + &self.a) * &point.x + &self.b, &self.p);
        lhs == rhs
    }

    fn is_reduced(&self, v: &BigInt) -> bool {
        !v.is_negative() && v < &self.p
    }
}

/// Curves compare equal when every parameter matches; the name is ignored.
impl PartialEq for CurveParams {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
            && self.q == other.q
            && self.a == other.a
            && self.b == other.b
            && self.generator == other.generator
            && self.edwards == other.edwards
            && self.cofactor == other.cofactor
    }
}

impl Eq for CurveParams {}

impl fmt::Display for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
