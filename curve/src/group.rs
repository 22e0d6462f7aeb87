use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable};

use crate::{Error, Scalar};

pub trait Group:
    Sized
    + Copy
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
    + ConditionallySelectable
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Left-to-right double-and-add.
    ///
    /// Runs in time dependent on the position and number of set bits of
    /// `scalar`; use [`Group::scalar_mul_ct`] for secret scalars.
    #[inline]
    fn scalar_mul(&self, scalar: &Scalar) -> Self {
        let mut result = Self::identity();

        for i in (0..scalar.bits()).rev() {
            result = result.double();
            if scalar.bit(i) {
                result = result + *self;
            }
        }

        result
    }

    /// Double-and-always-add over exactly `bit_len` bits of `scalar`.
    ///
    /// Every iteration performs one doubling and one addition, and the sum is
    /// kept or dropped with a constant-time selection. Bits of `scalar` at or
    /// above `bit_len` are ignored.
    fn scalar_mul_ct(&self, scalar: &Scalar, bit_len: usize) -> Self {
        let limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for i in (0..bit_len.min(256)).rev() {
            result = result.double();
            let sum = result + *self;
            let bit = ((limbs[i / 64] >> (i % 64)) & 1) as u8;
            result = Self::conditional_select(&result, &sum, Choice::from(bit));
        }

        result
    }

    fn scalar_mul_windowed(&self, scalar: &Scalar) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let top_limb = scalar.bits().div_ceil(64);
        let mut result = Self::identity();

        for &limb in scalar_limbs[..top_limb].iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                result = result.double();
                result = result.double();
                result = result.double();
                result = result.double();

                let window = ((limb >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + table[window];
                }
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        self.scalar_mul(&Scalar::from_u64(n))
    }

    fn multi_scalar_mul(points: &[Self], scalars: &[Scalar]) -> Result<Self, Error> {
        if points.len() != scalars.len() {
            return Err(Error::LengthMismatch(points.len(), scalars.len()));
        }

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = result + point.scalar_mul(scalar);
        }
        Ok(result)
    }
}
