//! Elliptic curve arithmetic over binary fields.
//!
//! Points live on y^2 + xy = x^3 + a2*x^2 + b over GF(2^m) with m < 256.
//! This crate provides the field engine, affine and López-Dahab projective
//! points, a constant-time multiplier and the x-plus-one-bit point
//! compression. Curves are selected at the type level through
//! [`CurveConfig`]; the standard curves are in [`curves`].

mod affine;
pub mod curves;
mod error;
mod field;
mod group;
mod params;
mod projective;
mod random;
mod scalar;

pub use affine::Affine;
pub use curves::{Sect163k1, Sect163r2, Sect233k1, Toy5};
pub use error::Error;
pub use field::{BinaryField, Gf2m, Modulus, FIELD_LIMBS, MAX_DEGREE};
pub use group::Group;
pub use params::{CurveConfig, CurveParams};
pub use projective::Projective;
pub use random::{random_scalar_below, RandomField};
pub use scalar::{Scalar, SCALAR_BYTES, SCALAR_LIMBS};
