//! Error types.

use core::fmt;

/// Errors raised by curve construction and point arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The base point does not satisfy `y² ≡ x³ + a·x + b (mod p)`.
    InvalidCurveParameters,

    /// Scalar multiplication was asked for a zero multiple.
    ZeroDegree,

    /// A slope denominator has no inverse modulo `p`.
    ///
    /// Happens when doubling a point with `y = 0` or when adding a point to
    /// its own negation: the result of both is the point at infinity, which
    /// affine coordinates cannot express.
    UndefinedInverse,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurveParameters => f.write_str("invalid curve parameters"),
            Error::ZeroDegree => f.write_str("zero degree value"),
            Error::UndefinedInverse => f.write_str("modular inverse is undefined"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
