//! Affine points on y^2 + xy = x^3 + a2*x^2 + b over GF(2^m).
//!
//! Points are plain values: every operation returns a fresh point and never
//! writes through a reference to its inputs, so expressions such as `p + p`
//! or `p - p` are well defined.
//!
//! The point at infinity is encoded as (0, 0). Since b != 0, no finite point
//! has x = 0 and y = 0 (x = 0 forces y^2 = b).

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::projective::Projective;
use crate::{BinaryField, CurveConfig, Error, Group, Scalar};

/// Affine point on the curve `C`, or the point at infinity.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Affine<C: CurveConfig> {
    x: C::Field,
    y: C::Field,
    _curve: PhantomData<C>,
}

impl<C: CurveConfig> Affine<C> {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: <C::Field as BinaryField>::ZERO,
        y: <C::Field as BinaryField>::ZERO,
        _curve: PhantomData,
    };

    /// Create a point from coordinates, checking the curve equation.
    ///
    /// (0, 0) is accepted and yields the point at infinity.
    pub fn from_coordinates(x: C::Field, y: C::Field) -> Result<Self, Error> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Create a point without checking the curve equation.
    ///
    /// Group operations on a point that is not on the curve produce
    /// meaningless results.
    #[inline]
    pub fn new_unchecked(x: C::Field, y: C::Field) -> Self {
        Affine {
            x,
            y,
            _curve: PhantomData,
        }
    }

    /// Base point of the curve.
    pub fn generator() -> Self {
        Self::new_unchecked(C::PARAMS.gx, C::PARAMS.gy)
    }

    #[inline]
    pub fn x(&self) -> C::Field {
        self.x
    }

    #[inline]
    pub fn y(&self) -> C::Field {
        self.y
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Check if a point is on the curve: y^2 + xy = x^3 + a2*x^2 + b.
    pub fn is_on_curve(&self) -> bool {
        self.is_infinity() || C::PARAMS.satisfies_equation(&self.x, &self.y)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        // Covers the identity and the single point of order two, (0, sqrt(b)),
        // which is its own negative.
        if self.x.is_zero() {
            return Self::INFINITY;
        }

        // λ = x + y/x
        let lambda = self.x + self.y * self.x.invert();

        // x_r = λ^2 + λ + a2
        let x_r = lambda.square() + lambda + C::PARAMS.a2;

        // y_r = x^2 + λ*x_r + x_r
        let y_r = self.x.square() + lambda * x_r + x_r;

        Self::new_unchecked(x_r, y_r)
    }

    /// Negate a point: -(x, y) = (x, x + y).
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Self::new_unchecked(self.x, self.x + self.y)
    }

    /// Scalar multiplication by double-and-add.
    ///
    /// Accumulates in López-Dahab coordinates and normalizes once at the end.
    ///
    /// Fails with [`Error::ScalarOutOfRange`] unless `k` is below the order of
    /// the curve group. Timing depends on the bits of `k`.
    pub fn multiply(&self, k: &Scalar) -> Result<Self, Error> {
        Self::check_scalar(k)?;
        Ok(Projective::mul_affine(self, k).to_affine())
    }

    /// Scalar multiplication with a uniform double-and-always-add ladder.
    ///
    /// Performs the same sequence of group operations for every `k` below the
    /// group order. The addition formulas still branch on exceptional inputs
    /// such as the identity.
    pub fn multiply_ct(&self, k: &Scalar) -> Result<Self, Error> {
        let bound = Self::check_scalar(k)?;
        Ok(Projective::from_affine(self)
            .scalar_mul_ct(k, bound.bits())
            .to_affine())
    }

    fn check_scalar(k: &Scalar) -> Result<Scalar, Error> {
        let bound = C::PARAMS
            .group_order()
            .ok_or(Error::InvalidParameters("group order exceeds 256 bits"))?;
        if *k >= bound {
            return Err(Error::ScalarOutOfRange);
        }
        Ok(bound)
    }

    /// Bit selecting between the two points sharing this x-coordinate.
    ///
    /// The low coefficient of y/x, or 0 when x = 0.
    pub fn y_bit(&self) -> bool {
        if self.x.is_zero() {
            return false;
        }
        (self.y * self.x.invert()).low_bit()
    }

    /// Compress the point into x with the y-bit stored at bit m.
    pub fn pack(&self) -> Result<Scalar, Error> {
        if self.is_infinity() {
            return Err(Error::PointAtInfinity);
        }
        Ok(self
            .x
            .to_scalar()
            .with_bit(<C::Field as BinaryField>::DEGREE, self.y_bit()))
    }

    /// Decompress a value produced by [`Affine::pack`].
    pub fn unpack(k: &Scalar) -> Result<Self, Error> {
        let m = <C::Field as BinaryField>::DEGREE;
        let y_bit = k.bit(m);
        let x = C::Field::from_scalar(&k.with_bit(m, false)).map_err(|err| {
            log::debug!("{}: compressed point has bits above the y-bit", C::PARAMS.name);
            err
        })?;
        Self::recover_y(x, y_bit)
    }

    /// Find the point with x-coordinate `x` whose [`Affine::y_bit`] is `y_bit`.
    ///
    /// Fails with [`Error::InvalidEncoding`] when no point has this
    /// x-coordinate, or when `x = 0` and `y_bit` is set.
    pub fn recover_y(x: C::Field, y_bit: bool) -> Result<Self, Error> {
        if x.is_zero() {
            // y^2 = b has exactly one root.
            if y_bit {
                log::debug!("{}: y-bit set for x = 0", C::PARAMS.name);
                return Err(Error::InvalidEncoding);
            }
            return Ok(Self::new_unchecked(x, C::PARAMS.b.sqrt()));
        }

        // With y = x*z the equation becomes z^2 + z = x + a2 + b/x^2.
        let beta = x + C::PARAMS.a2 + C::PARAMS.b * x.invert().square();
        let mut z = beta.solve_quadratic().ok_or_else(|| {
            log::trace!("{}: x is not the x-coordinate of a point", C::PARAMS.name);
            Error::InvalidEncoding
        })?;
        if z.low_bit() != y_bit {
            z += <C::Field as BinaryField>::ONE;
        }

        Ok(Self::new_unchecked(x, x * z))
    }
}

impl<C: CurveConfig> Group for Affine<C> {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl<C: CurveConfig> Default for Affine<C> {
    fn default() -> Self {
        Self::INFINITY
    }
}

// Implement addition for affine points
impl<C: CurveConfig> Add for Affine<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity() {
            return other;
        }
        if other.is_infinity() {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                // Same x, different y: other = -self
                return Self::INFINITY;
            }
        }

        // λ = (y1 + y2) / (x1 + x2)
        let sum_x = self.x + other.x;
        let lambda = (self.y + other.y) * sum_x.invert();

        // x_r = λ^2 + λ + x1 + x2 + a2
        let x_r = lambda.square() + lambda + sum_x + C::PARAMS.a2;

        // y_r = λ(x1 + x_r) + x_r + y1
        let y_r = lambda * (self.x + x_r) + x_r + self.y;

        Self::new_unchecked(x_r, y_r)
    }
}

impl<C: CurveConfig> AddAssign for Affine<C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<C: CurveConfig> Sub for Affine<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl<C: CurveConfig> SubAssign for Affine<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<C: CurveConfig> Neg for Affine<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: CurveConfig> ConditionallySelectable for Affine<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new_unchecked(
            C::Field::conditional_select(&a.x, &b.x, choice),
            C::Field::conditional_select(&a.y, &b.y, choice),
        )
    }
}

impl<C: CurveConfig> ConstantTimeEq for Affine<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

/// Zeroizing a point leaves the point at infinity.
impl<C: CurveConfig> Zeroize for Affine<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

impl<C: CurveConfig> Debug for Affine<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            write!(f, "Affine<{}>(infinity)", C::PARAMS.name)
        } else {
            f.debug_struct("Affine")
                .field("curve", &C::PARAMS.name)
                .field("x", &self.x)
                .field("y", &self.y)
                .finish()
        }
    }
}

impl<C: CurveConfig> Serialize for Affine<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de, C: CurveConfig> Deserialize<'de> for Affine<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(C::Field, C::Field)>::deserialize(deserializer)?;
        Self::from_coordinates(x, y).map_err(D::Error::custom)
    }
}
