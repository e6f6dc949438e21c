//! NIST P-256 base field, used as this crate's reference field.
//!
//! `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`, which admits both reduction
//! back-ends: Montgomery (the default) and the sparse split-and-fold form.

use crate::limbs::{from_be_hex, monty_u, pow2_mod, sub_limb};
use crate::params::{FieldParams, SparseForm};
use crate::reduce::{MontgomeryReduction, SparseReduction};
use mpint::limb::{Limb, LIMB_BITS};

/// Number of limbs in a P-256 field element.
pub const LIMBS: usize = 256 / LIMB_BITS;

/// P-256 field modulus, big-endian hex.
pub const MODULUS_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// P-256 field parameters with the Montgomery back-end.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct P256Params;

impl FieldParams<LIMBS> for P256Params {
    const MODULUS: [Limb; LIMBS] = from_be_hex(MODULUS_HEX);
    const MODULUS_HEX: &'static str = MODULUS_HEX;
    const MONTY_U: Limb = monty_u(&Self::MODULUS);
    const R: [Limb; LIMBS] = pow2_mod(&Self::MODULUS, (LIMBS * LIMB_BITS) as u32);
    const R2: [Limb; LIMBS] = pow2_mod(&Self::MODULUS, (2 * LIMBS * LIMB_BITS) as u32);
    const MODULUS_MINUS_2: [Limb; LIMBS] = sub_limb(&Self::MODULUS, 2);
    const GENERATOR: u64 = 6;

    type Reduction = MontgomeryReduction;
}

/// P-256 field element (Montgomery back-end).
pub type FieldElement = crate::FieldElement<P256Params, LIMBS>;

/// P-256 field parameters with the sparse-modulus back-end.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct P256SparseParams;

impl FieldParams<LIMBS> for P256SparseParams {
    const MODULUS: [Limb; LIMBS] = from_be_hex(MODULUS_HEX);
    const MODULUS_HEX: &'static str = MODULUS_HEX;
    const MONTY_U: Limb = monty_u(&Self::MODULUS);
    const R: [Limb; LIMBS] = pow2_mod(&Self::MODULUS, (LIMBS * LIMB_BITS) as u32);
    const R2: [Limb; LIMBS] = pow2_mod(&Self::MODULUS, (2 * LIMBS * LIMB_BITS) as u32);
    const MODULUS_MINUS_2: [Limb; LIMBS] = sub_limb(&Self::MODULUS, 2);
    const SPARSE: Option<SparseForm> = Some(SparseForm {
        t: 256,
        terms: &[(224, -1), (192, 1), (96, 1), (0, -1)],
    });
    const GENERATOR: u64 = 6;

    type Reduction = SparseReduction;
}

/// P-256 field element (sparse back-end).
pub type SparseFieldElement = crate::FieldElement<P256SparseParams, LIMBS>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use num_bigint::BigUint;
    use rand_core::SeedableRng;
    use std::format;
    use std::vec::Vec;

    fn to_num(limbs: &[Limb]) -> BigUint {
        let mut bytes = Vec::new();
        for limb in limbs {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    fn modulus() -> BigUint {
        BigUint::parse_bytes(MODULUS_HEX.as_bytes(), 16).unwrap()
    }

    #[test]
    fn identities() {
        let one = FieldElement::ONE;
        assert_eq!(one.add(&FieldElement::ZERO), one);
        assert_eq!(one.multiply(&one), one);
        assert_eq!(FieldElement::ZERO.neg(), FieldElement::ZERO);
    }

    #[test]
    fn montgomery_round_trip_small_product() {
        // back(conv(2) * conv(3)) = 6
        let two = FieldElement::from_u64(2);
        let three = FieldElement::from_u64(3);
        let six = two.multiply(&three);
        let mut expected = [0; LIMBS];
        expected[0] = 6;
        assert_eq!(six.to_canonical(), expected);
    }

    #[test]
    fn back_conv_is_identity() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        for _ in 0..16 {
            let a = FieldElement::random(&mut rng);
            let raw = a.to_canonical();
            let b = FieldElement::from_uint(&raw).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn invert_matches_model() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(8);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            if bool::from(a.is_zero()) {
                continue;
            }
            let inv = a.invert().unwrap();
            assert_eq!(a.multiply(&inv), FieldElement::ONE);
        }
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));
    }

    #[test]
    fn half_doubles_back() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(9);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            assert_eq!(a.half().double(), a);
        }
    }

    #[test]
    fn sqrt_of_squares() {
        for n in [1u64, 4, 9, 16, 25, 36, 49, 64] {
            let fe = FieldElement::from_u64(n);
            let sqrt = fe.sqrt().unwrap();
            assert_eq!(sqrt.square(), fe);
        }
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(10);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            let sq = a.square();
            let root = sq.sqrt().unwrap();
            assert!(root == a || root == a.neg());
        }
    }

    #[test]
    fn exponentiation_strategies_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
        for _ in 0..6 {
            let a = FieldElement::random(&mut rng);
            let e = FieldElement::random(&mut rng).to_canonical();
            let basic = a.pow_vartime(&e);
            let slide = a.pow_slide(&e);
            let monty = a.pow_monty(&e);
            assert_eq!(basic, slide);
            assert_eq!(basic, monty);
        }
    }

    #[test]
    fn sparse_backend_agrees_with_montgomery() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(12);
        for _ in 0..16 {
            let a = FieldElement::random(&mut rng);
            let b = FieldElement::random(&mut rng);
            let sa = SparseFieldElement::from_uint(&a.to_canonical()).unwrap();
            let sb = SparseFieldElement::from_uint(&b.to_canonical()).unwrap();

            assert_eq!(a.multiply(&b).to_canonical(), sa.multiply(&sb).to_canonical());
            assert_eq!(a.add(&b).to_canonical(), sa.add(&sb).to_canonical());
            assert_eq!(a.square().to_canonical(), sa.square().to_canonical());
        }
    }

    #[test]
    fn arithmetic_matches_model() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(13);
        let p = modulus();
        for _ in 0..16 {
            let a = FieldElement::random(&mut rng);
            let b = FieldElement::random(&mut rng);
            let (na, nb) = (to_num(&a.to_canonical()), to_num(&b.to_canonical()));

            assert_eq!(to_num(&a.multiply(&b).to_canonical()), (&na * &nb) % &p);
            assert_eq!(to_num(&a.add(&b).to_canonical()), (&na + &nb) % &p);
            assert_eq!(
                to_num(&a.sub(&b).to_canonical()),
                ((&p + &na) - &nb) % &p,
                "a={} b={}",
                format!("{a:?}"),
                format!("{b:?}")
            );
        }
    }

    proptest::proptest! {
        #[test]
        fn small_value_laws(a: u64, b: u64) {
            let (x, y) = (FieldElement::from_u64(a), FieldElement::from_u64(b));
            proptest::prop_assert_eq!(x * y, y * x);
            proptest::prop_assert_eq!(x + y, y + x);
            proptest::prop_assert_eq!((x + y).square(), x.square() + (x * y).double() + y.square());
        }
    }

    #[test]
    fn commutativity_and_associativity() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(14);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            let b = FieldElement::random(&mut rng);
            let c = FieldElement::random(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
        }
    }
}
