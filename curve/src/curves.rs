//! Named binary curves.
//!
//! Parameters of the standard curves follow SEC 2 v2 (sect233k1, sect163k1,
//! sect163r2), known in FIPS 186 as K-233, K-163 and B-163. `Toy5` is a
//! 44-point curve over GF(2^5), small enough to enumerate in tests.

use crate::field::{Gf2m, Modulus, FIELD_LIMBS};
use crate::params::{CurveConfig, CurveParams};
use crate::Scalar;

/// z^233 + z^74 + 1
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect233Modulus;

impl Modulus for Sect233Modulus {
    const DEGREE: usize = 233;
    const REDUCTION: [u64; FIELD_LIMBS] = [0x0000_0000_0000_0001, 0x0000_0000_0000_0400, 0, 0];
}

/// z^163 + z^7 + z^6 + z^3 + 1
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect163Modulus;

impl Modulus for Sect163Modulus {
    const DEGREE: usize = 163;
    const REDUCTION: [u64; FIELD_LIMBS] = [0xc9, 0, 0, 0];
}

/// z^5 + z^2 + 1
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Toy5Modulus;

impl Modulus for Toy5Modulus {
    const DEGREE: usize = 5;
    const REDUCTION: [u64; FIELD_LIMBS] = [0b101, 0, 0, 0];
}

pub type Fe233 = Gf2m<Sect233Modulus>;
pub type Fe163 = Gf2m<Sect163Modulus>;
pub type Fe5 = Gf2m<Toy5Modulus>;

/// NIST K-233: y^2 + xy = x^3 + 1 over GF(2^233).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect233k1;

impl CurveConfig for Sect233k1 {
    type Field = Fe233;

    const PARAMS: CurveParams<Fe233> = CurveParams {
        name: "sect233k1",
        a2: Fe233::ZERO,
        b: Fe233::ONE,
        gx: Fe233::from_limbs_unchecked([
            0x0a4c9d6eefad6126,
            0x149563a419c26bf5,
            0x7e731af129f22ff4,
            0x0000017232ba853a,
        ]),
        gy: Fe233::from_limbs_unchecked([
            0x56e0c11056fae6a3,
            0x27a8cd9bf18aeb9b,
            0x19b7f70f555a67c4,
            0x000001db537dece8,
        ]),
        order: Scalar::from_limbs([
            0x6efb1ad5f173abdf,
            0x00069d5bb915bcd4,
            0x0000000000000000,
            0x0000008000000000,
        ]),
        cofactor: 4,
    };
}

/// NIST K-163: y^2 + xy = x^3 + x^2 + 1 over GF(2^163).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect163k1;

impl CurveConfig for Sect163k1 {
    type Field = Fe163;

    const PARAMS: CurveParams<Fe163> = CurveParams {
        name: "sect163k1",
        a2: Fe163::ONE,
        b: Fe163::ONE,
        gx: Fe163::from_limbs_unchecked([
            0xde4e6d5e5c94eee8,
            0x7bbc11acaa07d793,
            0x00000002fe13c053,
            0,
        ]),
        gy: Fe163::from_limbs_unchecked([
            0x0536d538ccdaa3d9,
            0x5d38ff58321f2e80,
            0x0000000289070fb0,
            0,
        ]),
        order: Scalar::from_limbs([
            0xa2e0cc0d99f8a5ef,
            0x0000000000020108,
            0x0000000400000000,
            0,
        ]),
        cofactor: 2,
    };
}

/// NIST B-163: y^2 + xy = x^3 + x^2 + b over GF(2^163).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sect163r2;

impl CurveConfig for Sect163r2 {
    type Field = Fe163;

    const PARAMS: CurveParams<Fe163> = CurveParams {
        name: "sect163r2",
        a2: Fe163::ONE,
        b: Fe163::from_limbs_unchecked([
            0x512f78744a3205fd,
            0xb8c953ca1481eb10,
            0x000000020a601907,
            0,
        ]),
        gx: Fe163::from_limbs_unchecked([
            0xd4994637e8343e36,
            0x86a2d57ea0991168,
            0x00000003f0eba162,
            0,
        ]),
        gy: Fe163::from_limbs_unchecked([
            0xb11c5c0c797324f1,
            0x71a0094fa2cdd545,
            0x00000000d51fbc6c,
            0,
        ]),
        order: Scalar::from_limbs([
            0x77e70c12a4234c33,
            0x00000000000292fe,
            0x0000000400000000,
            0,
        ]),
        cofactor: 2,
    };
}

/// y^2 + xy = x^3 + 1 over GF(2^5). The base point (2, 29) has order 11.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Toy5;

impl CurveConfig for Toy5 {
    type Field = Fe5;

    const PARAMS: CurveParams<Fe5> = CurveParams {
        name: "toy5",
        a2: Fe5::ZERO,
        b: Fe5::ONE,
        gx: Fe5::from_limbs_unchecked([2, 0, 0, 0]),
        gy: Fe5::from_limbs_unchecked([29, 0, 0, 0]),
        order: Scalar::from_u64(11),
        cofactor: 4,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_curves_validate() {
        assert_eq!(Sect233k1::PARAMS.validate(), Ok(()));
        assert_eq!(Sect163k1::PARAMS.validate(), Ok(()));
        assert_eq!(Sect163r2::PARAMS.validate(), Ok(()));
        assert_eq!(Toy5::PARAMS.validate(), Ok(()));
    }

    #[test]
    fn test_zero_b_rejected() {
        let mut params = Toy5::PARAMS;
        params.b = Fe5::ZERO;
        assert!(matches!(
            params.validate(),
            Err(crate::Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_bad_generator_rejected() {
        let mut params = Sect163r2::PARAMS;
        params.gy = params.gy + Fe163::ONE;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_group_order() {
        assert_eq!(Toy5::PARAMS.group_order(), Some(Scalar::from_u64(44)));
        let n = Sect233k1::PARAMS.order.to_biguint();
        let h = Sect233k1::PARAMS.group_order().unwrap().to_biguint();
        assert_eq!(h, n * 4u32);
    }
}
