//! Fixed-width 256-bit unsigned integers.
//!
//! A `Scalar` is both the multiplier in scalar multiplication and the carrier
//! of the compressed point encoding. The value is stored as [u64; 4] in
//! little-endian limb order; byte encodings are big-endian.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::Error;

/// Number of 64-bit limbs in a scalar.
pub const SCALAR_LIMBS: usize = 4;

/// Number of bytes in the big-endian encoding of a scalar.
pub const SCALAR_BYTES: usize = 32;

/// Non-negative 256-bit integer.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Scalar {
    limbs: [u64; SCALAR_LIMBS],
}

impl Scalar {
    pub const ZERO: Self = Scalar { limbs: [0; 4] };

    pub const ONE: Self = Scalar {
        limbs: [1, 0, 0, 0],
    };

    /// Largest representable value, 2^256 - 1.
    pub const MAX: Self = Scalar {
        limbs: [u64::MAX; 4],
    };

    /// Create a scalar from little-endian limbs.
    #[inline]
    pub const fn from_limbs(limbs: [u64; SCALAR_LIMBS]) -> Self {
        Scalar { limbs }
    }

    #[inline]
    pub const fn from_u64(val: u64) -> Self {
        Scalar {
            limbs: [val, 0, 0, 0],
        }
    }

    /// Little-endian limbs of the value.
    #[inline]
    pub const fn to_u64_limbs(&self) -> [u64; SCALAR_LIMBS] {
        self.limbs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Bit `i` of the value; bits past 255 read as zero.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        if i >= 64 * SCALAR_LIMBS {
            return false;
        }
        (self.limbs[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Copy of the value with bit `i` set to `value`.
    pub fn with_bit(&self, i: usize, value: bool) -> Self {
        let mut limbs = self.limbs;
        if i < 64 * SCALAR_LIMBS {
            let mask = 1u64 << (i % 64);
            if value {
                limbs[i / 64] |= mask;
            } else {
                limbs[i / 64] &= !mask;
            }
        }
        Scalar { limbs }
    }

    /// Number of significant bits; zero has bit length 0.
    pub fn bits(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            if limb != 0 {
                return 64 * i + (64 - limb.leading_zeros() as usize);
            }
        }
        0
    }

    /// `self + rhs`, or `None` on overflow past 256 bits.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let (r0, carry) = self.limbs[0].overflowing_add(rhs.limbs[0]);
        let (r1, carry) = carrying_add(self.limbs[1], rhs.limbs[1], carry);
        let (r2, carry) = carrying_add(self.limbs[2], rhs.limbs[2], carry);
        let (r3, carry) = carrying_add(self.limbs[3], rhs.limbs[3], carry);
        if carry {
            None
        } else {
            Some(Scalar {
                limbs: [r0, r1, r2, r3],
            })
        }
    }

    /// `self * rhs`, or `None` on overflow past 256 bits.
    pub fn checked_mul_u64(&self, rhs: u64) -> Option<Self> {
        let mut limbs = [0u64; SCALAR_LIMBS];
        let mut carry = 0u128;
        for (out, &limb) in limbs.iter_mut().zip(self.limbs.iter()) {
            let product = (limb as u128) * (rhs as u128) + carry;
            *out = product as u64;
            carry = product >> 64;
        }
        if carry != 0 {
            None
        } else {
            Some(Scalar { limbs })
        }
    }

    /// Decode a 32-byte big-endian integer.
    pub fn from_be_bytes(bytes: &[u8; SCALAR_BYTES]) -> Self {
        let mut limbs = [0u64; SCALAR_LIMBS];
        for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(word);
        }
        Scalar { limbs }
    }

    /// Encode as a 32-byte big-endian integer.
    pub fn to_be_bytes(&self) -> [u8; SCALAR_BYTES] {
        let mut bytes = [0u8; SCALAR_BYTES];
        for (i, chunk) in bytes.rchunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.limbs[i].to_be_bytes());
        }
        bytes
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    /// Convert from a `BigUint`, failing if the value needs more than 256 bits.
    pub fn from_biguint(value: &BigUint) -> Result<Self, Error> {
        let raw = value.to_bytes_be();
        if raw.len() > SCALAR_BYTES {
            return Err(Error::ScalarOutOfRange);
        }
        let mut bytes = [0u8; SCALAR_BYTES];
        bytes[SCALAR_BYTES - raw.len()..].copy_from_slice(&raw);
        Ok(Self::from_be_bytes(&bytes))
    }
}

/// Helper: Carrying addition
#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs.iter().rev().cmp(other.limbs.iter().rev())
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Scalar {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self)
    }
}
