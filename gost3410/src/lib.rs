#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use gost3410::{AffinePoint, CurveParams};
//! use gost3410::num_bigint::{BigInt, BigUint};
//!
//! // y² = x³ + x + 1 over GF(23), base point of order 7
//! let curve = CurveParams::new(
//!     BigInt::from(23),
//!     BigInt::from(7),
//!     BigInt::from(1),
//!     BigInt::from(1),
//!     BigInt::from(17),
//!     BigInt::from(3),
//! )?
//! .with_cofactor(BigInt::from(4));
//!
//! let point = curve.mul_base(&BigUint::from(2u8))?;
//! assert_eq!(point, AffinePoint::new(BigInt::from(13), BigInt::from(16)));
//! # Ok::<(), gost3410::Error>(())
//! ```

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod arithmetic;

mod curve;
mod error;

#[cfg(feature = "test-vectors")]
pub mod test_vectors;

pub use crate::{
    arithmetic::AffinePoint,
    curve::CurveParams,
    error::{Error, Result},
};
pub use num_bigint;
