//! Curve parameters for y^2 + xy = x^3 + a2*x^2 + b over GF(2^m).

use core::fmt::Debug;
use core::hash::Hash;

use crate::{BinaryField, Error, Scalar};

/// Domain parameters of a binary curve.
///
/// Fixed for the lifetime of a curve and shared read-only by every point
/// operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurveParams<F> {
    /// Standard name of the curve.
    pub name: &'static str,
    /// Coefficient of x^2.
    pub a2: F,
    /// Constant coefficient; must be nonzero.
    pub b: F,
    /// x-coordinate of the base point.
    pub gx: F,
    /// y-coordinate of the base point.
    pub gy: F,
    /// Order of the base point.
    pub order: Scalar,
    /// Number of points on the curve divided by `order`.
    pub cofactor: u64,
}

impl<F: BinaryField> CurveParams<F> {
    /// Evaluate the curve equation at (x, y).
    pub fn satisfies_equation(&self, x: &F, y: &F) -> bool {
        let x2 = x.square();
        let lhs = y.square() + *x * *y;
        let rhs = x2 * *x + self.a2 * x2 + self.b;
        lhs == rhs
    }

    /// Number of points on the curve, `order * cofactor`.
    pub fn group_order(&self) -> Option<Scalar> {
        self.order.checked_mul_u64(self.cofactor)
    }

    /// Check the parameters are usable.
    ///
    /// `b = 0` is rejected because (0, 0) then lies on the curve and would
    /// collide with the encoding of the point at infinity.
    pub fn validate(&self) -> Result<(), Error> {
        if self.b.is_zero() {
            return Err(Error::InvalidParameters("b must be nonzero"));
        }
        if self.order.is_zero() || self.cofactor == 0 {
            return Err(Error::InvalidParameters("order and cofactor must be nonzero"));
        }
        if self.group_order().is_none() {
            return Err(Error::InvalidParameters("group order exceeds 256 bits"));
        }
        if F::DEGREE + 1 > 64 * 4 {
            return Err(Error::InvalidParameters("field too large for compressed encoding"));
        }
        if !self.satisfies_equation(&self.gx, &self.gy) {
            return Err(Error::InvalidParameters("base point is not on the curve"));
        }
        Ok(())
    }
}

/// Binds a marker type to a field and one set of curve parameters.
///
/// Points are generic over a `CurveConfig`, so the parameters are captured
/// once by the type and never passed around as mutable state.
pub trait CurveConfig:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    type Field: BinaryField;

    const PARAMS: CurveParams<Self::Field>;
}
