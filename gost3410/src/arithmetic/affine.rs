//! Affine curve points.

use num_bigint::BigInt;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// A point carries no reference to the curve it lives on; the
/// [`CurveParams`](crate::CurveParams) passed to each operation decides the
/// field and the equation. There is no encoding of the point at infinity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigInt,

    /// y-coordinate
    pub(crate) y: BigInt,
}

impl AffinePoint {
    /// Create a point from its coordinates.
    ///
    /// No curve membership check is done here, see
    /// [`CurveParams::is_on_curve`](crate::CurveParams::is_on_curve).
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Borrow the x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Borrow the y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Split the point into its `(x, y)` coordinates.
    pub fn into_coordinates(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

impl From<(BigInt, BigInt)> for AffinePoint {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Self::new(x, y)
    }
}

impl From<AffinePoint> for (BigInt, BigInt) {
    fn from(point: AffinePoint) -> Self {
        point.into_coordinates()
    }
}
