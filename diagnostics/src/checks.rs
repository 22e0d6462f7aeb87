use binary_curve::{Affine, BinaryField, CurveConfig, RandomField};
use rand::Rng;
use zeroize::Zeroize;

/// Whether `point` satisfies the curve equation. Always true for the point at
/// infinity.
pub fn check<C: CurveConfig>(point: &Affine<C>) -> bool {
    point.is_on_curve()
}

/// Coordinate-wise equality; the point at infinity equals only itself.
pub fn equal<C: CurveConfig>(p: &Affine<C>, q: &Affine<C>) -> bool {
    p == q
}

/// Sample a uniformly random finite point.
///
/// Draws a nonzero x and a y-bit until x is the x-coordinate of a point.
/// Each draw succeeds with probability close to 1/2.
pub fn random_point<C: CurveConfig, R: Rng + ?Sized>(rng: &mut R) -> Affine<C> {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let x = C::Field::random(rng);
        if x.is_zero() {
            continue;
        }
        if let Ok(point) = Affine::<C>::recover_y(x, rng.random()) {
            log::trace!("{}: random point after {} attempts", C::PARAMS.name, attempts);
            return point;
        }
    }
}

/// Reset `point` to the point at infinity, overwriting its coordinates.
pub fn clear<C: CurveConfig>(point: &mut Affine<C>) {
    point.zeroize();
}
