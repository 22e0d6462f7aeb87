use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::field::{Gf2m, Modulus};
use crate::Scalar;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<M: Modulus> RandomField for Gf2m<M> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

/// Sample a scalar uniformly from `[0, bound)`.
///
/// Returns zero when `bound` is zero.
pub fn random_scalar_below<R: Rng + ?Sized>(rng: &mut R, bound: &Scalar) -> Scalar {
    let bits = bound.bits();
    if bits == 0 {
        return Scalar::ZERO;
    }

    loop {
        let mut limbs: [u64; 4] = rng.random();
        for (i, limb) in limbs.iter_mut().enumerate() {
            let low = 64 * i;
            if bits <= low {
                *limb = 0;
            } else if bits < low + 64 {
                *limb &= (1u64 << (bits - low)) - 1;
            }
        }

        let candidate = Scalar::from_limbs(limbs);
        if candidate < *bound {
            return candidate;
        }
    }
}
