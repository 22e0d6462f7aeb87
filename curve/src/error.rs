//! Error types for point arithmetic and point encoding.

use thiserror::Error;

/// Errors reported by the curve engine.
///
/// Group law operations are total over valid points, so these only surface
/// where external input is decoded or where a caller contract is checked.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The encoding does not describe a point on the curve.
    ///
    /// Returned when a compressed point carries bits outside the x-coordinate
    /// and y-bit positions, when a field element is not reduced, or when the
    /// x-coordinate admits no y solving the curve equation.
    #[error("invalid point encoding")]
    InvalidEncoding,
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
    /// The scalar is not below the order of the curve group.
    #[error("scalar is out of range for this curve")]
    ScalarOutOfRange,
    /// The point at infinity has no compressed encoding.
    #[error("the point at infinity cannot be compressed")]
    PointAtInfinity,
    /// The curve parameters are unusable.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(&'static str),
    /// Points and scalars passed to a multi-scalar multiplication differ in length.
    #[error("unequal slice lengths: {0} and {1}")]
    LengthMismatch(usize, usize),
}
