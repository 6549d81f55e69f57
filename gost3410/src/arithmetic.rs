//! Affine point arithmetic over the curve's prime field.
//!
//! All operations are provided as methods on [`CurveParams`](crate::CurveParams),
//! which supplies the modulus and the equation coefficients. Points are plain
//! coordinate pairs and every operation returns a fresh [`AffinePoint`].

pub(crate) mod field;

mod affine;
mod mul;
mod point_arithmetic;

pub use self::affine::AffinePoint;
