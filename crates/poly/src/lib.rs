//! poly crate: dense univariate polynomials with `i64` coefficients.
//!
//! Key points:
//! - Backing storage maps exponent `i` to the coefficient of `x^i`; it is
//!   always zero-initialized and only ever grows.
//! - Arithmetic goes through the standard operator traits; the compound
//!   forms (`+=`, `-=`, `*=`) mutate in place and the binary forms copy.
//! - Equality is value-based: capacity and trailing zero slots never
//!   affect comparisons.
//! - Coefficient arithmetic is native `i64` arithmetic; overflow is not
//!   checked. This is a documented limitation, not a bug.
//! - Enable the `serde1` feature for Serialize/Deserialize derives.

mod coeffs;
mod dense;
mod ops;
mod text;

#[cfg(test)]
mod proptests;

pub use crate::coeffs::CoeffBuffer;
pub use crate::dense::Polynomial;
pub use crate::text::ParseError;
