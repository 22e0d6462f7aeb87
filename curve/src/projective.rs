use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use crate::affine::Affine;
use crate::{BinaryField, CurveConfig, Error, Group, Scalar};

/// Projective point on a binary curve in López-Dahab coordinates.
///
/// Represents a point (X:Y:Z) where (x,y) = (X/Z, Y/Z^2). The point at
/// infinity is represented as (1:0:0); any point with Z = 0 is treated as
/// infinity.
#[derive(Copy, Clone)]
pub struct Projective<C: CurveConfig> {
    pub x: C::Field,
    pub y: C::Field,
    pub z: C::Field,
    _curve: PhantomData<C>,
}

impl<C: CurveConfig> Projective<C> {
    /// The point at infinity (identity element): (1:0:0)
    pub const INFINITY: Self = Projective {
        x: <C::Field as BinaryField>::ONE,
        y: <C::Field as BinaryField>::ZERO,
        z: <C::Field as BinaryField>::ZERO,
        _curve: PhantomData,
    };

    /// Create a new projective point.
    pub fn new(x: C::Field, y: C::Field, z: C::Field) -> Self {
        Projective {
            x,
            y,
            z,
            _curve: PhantomData,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine<C> {
        if self.is_infinity() {
            return Affine::INFINITY;
        }

        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv.square();

        Affine::new_unchecked(x, y)
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine<C>) -> Self {
        if point.is_infinity() {
            return Self::INFINITY;
        }

        Projective::new(point.x(), point.y(), <C::Field as BinaryField>::ONE)
    }

    /// Check if a point is on the curve: Y^2 + XYZ = X^3*Z + a2*X^2*Z^2 + b*Z^4.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let x2 = self.x.square();
        let z2 = self.z.square();

        let lhs = self.y.square() + self.x * self.y * self.z;
        let rhs = x2 * self.x * self.z + C::PARAMS.a2 * x2 * z2 + C::PARAMS.b * z2.square();

        lhs == rhs
    }

    /// Base point of the curve.
    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Point doubling: 2*P in López-Dahab coordinates.
    pub fn double(&self) -> Self {
        // X = 0 is the point of order two.
        if self.is_infinity() || self.x.is_zero() {
            return Self::INFINITY;
        }

        let x2 = self.x.square();
        let z2 = self.z.square();
        let z3 = x2 * z2;
        let b_z4 = C::PARAMS.b * z2.square();
        let x3 = x2.square() + b_z4;
        let y3 = b_z4 * z3 + x3 * (C::PARAMS.a2 * z3 + self.y.square() + b_z4);

        Projective::new(x3, y3, z3)
    }

    /// Negate a point: -(X:Y:Z) = (X : XZ + Y : Z).
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Projective::new(self.x, self.x * self.z + self.y, self.z)
    }

    /// Mixed addition of an affine point.
    pub fn add_affine(&self, other: &Affine<C>) -> Self {
        if other.is_infinity() {
            return *self;
        }
        if self.is_infinity() {
            return Self::from_affine(other);
        }

        let (x2, y2) = (other.x(), other.y());
        let z1_sq = self.z.square();
        let a = y2 * z1_sq + self.y;
        let b = x2 * self.z + self.x;

        if b.is_zero() {
            if a.is_zero() {
                return Self::from_affine(other).double();
            }
            return Self::INFINITY;
        }

        let c = self.z * b;
        let d = b.square() * (c + C::PARAMS.a2 * z1_sq);
        let z3 = c.square();
        let e = a * c;
        let x3 = a.square() + d + e;
        let f = x3 + x2 * z3;
        let g = (x2 + y2) * z3.square();
        let y3 = (e + z3) * f + g;

        Projective::new(x3, y3, z3)
    }

    /// Double-and-add over an affine base using mixed additions.
    pub fn mul_affine(point: &Affine<C>, scalar: &Scalar) -> Self {
        let mut result = Self::INFINITY;

        for i in (0..scalar.bits()).rev() {
            result = result.double();
            if scalar.bit(i) {
                result = result.add_affine(point);
            }
        }

        result
    }

    /// Batch normalization: convert multiple projective points to affine.
    ///
    /// Uses a single field inversion for the whole batch.
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine<C>> {
        let one = <C::Field as BinaryField>::ONE;

        // Prefix products of the nonzero Z coordinates.
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = one;
        for p in points {
            prefix.push(acc);
            if !p.is_infinity() {
                acc *= p.z;
            }
        }

        let mut inv = acc.invert();
        let mut result = vec![Affine::INFINITY; points.len()];
        for (i, p) in points.iter().enumerate().rev() {
            if p.is_infinity() {
                continue;
            }
            let z_inv = inv * prefix[i];
            inv *= p.z;
            result[i] = Affine::new_unchecked(p.x * z_inv, p.y * z_inv.square());
        }

        result
    }
}

impl<C: CurveConfig> Group for Projective<C> {
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
        Projective::generator()
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

impl<C: CurveConfig> Default for Projective<C> {
    fn default() -> Self {
        Self::INFINITY
    }
}

// Implement addition for projective points
impl<C: CurveConfig> Add for Projective<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity() {
            return other;
        }
        if other.is_infinity() {
            return self;
        }

        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let a = self.y * z2_sq + other.y * z1_sq;
        let b = self.x * other.z + other.x * self.z;

        if b.is_zero() {
            if a.is_zero() {
                return self.double();
            }
            return Self::INFINITY;
        }

        let b_sq = b.square();
        let c = self.z * other.z * b;
        let z3 = c.square();
        let e = a * c;
        let x3 = a.square() + e + b_sq * c + C::PARAMS.a2 * z3;
        let w = self.z * z2_sq * b_sq;
        let y3 = e * (self.x * w + x3) + x3 * z3 + self.y * w.square();

        Projective::new(x3, y3, z3)
    }
}

impl<C: CurveConfig> AddAssign for Projective<C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<C: CurveConfig> Sub for Projective<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl<C: CurveConfig> SubAssign for Projective<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<C: CurveConfig> Neg for Projective<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Points are equal when they normalize to the same affine point.
impl<C: CurveConfig> PartialEq for Projective<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (false, false) => {
                self.x * other.z == other.x * self.z
                    && self.y * other.z.square() == other.y * self.z.square()
            }
            _ => false,
        }
    }
}

impl<C: CurveConfig> Eq for Projective<C> {}

impl<C: CurveConfig> ConditionallySelectable for Projective<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Projective::new(
            C::Field::conditional_select(&a.x, &b.x, choice),
            C::Field::conditional_select(&a.y, &b.y, choice),
            C::Field::conditional_select(&a.z, &b.z, choice),
        )
    }
}

impl<C: CurveConfig> Zeroize for Projective<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
    }
}

impl<C: CurveConfig> Debug for Projective<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projective")
            .field("curve", &C::PARAMS.name)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

// Scalar multiplication
impl<C: CurveConfig> Mul<Scalar> for Projective<C> {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl<C: CurveConfig> Mul<&Scalar> for Projective<C> {
    type Output = Self;

    fn mul(self, scalar: &Scalar) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

// Conversions
impl<C: CurveConfig> From<Affine<C>> for Projective<C> {
    fn from(point: Affine<C>) -> Self {
        Projective::from_affine(&point)
    }
}

impl<C: CurveConfig> From<&Affine<C>> for Projective<C> {
    fn from(point: &Affine<C>) -> Self {
        Projective::from_affine(point)
    }
}

impl<C: CurveConfig> From<Projective<C>> for Affine<C> {
    fn from(point: Projective<C>) -> Self {
        point.to_affine()
    }
}

impl<C: CurveConfig> From<&Projective<C>> for Affine<C> {
    fn from(point: &Projective<C>) -> Self {
        point.to_affine()
    }
}

impl<C: CurveConfig> TryFrom<Projective<C>> for Scalar {
    type Error = Error;

    /// Compressed encoding of the normalized point.
    fn try_from(point: Projective<C>) -> Result<Self, Error> {
        point.to_affine().pack()
    }
}
