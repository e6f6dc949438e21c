//! GF(2^283) with the NIST pentanomial, the base field of the B-283 and
//! K-283 curves.
//!
//! `f(z) = z^283 + z^12 + z^7 + z^5 + 1`.

use crate::params::{compute_sqrt_z, field_poly, BinFieldParams};
use mpint::limb::{Limb, LIMB_BITS};

/// Degree of the field.
pub const M: u32 = 283;

/// Number of limbs in a GF(2^283) element.
pub const DIGS: usize = (M as usize).div_ceil(LIMB_BITS);

/// GF(2^283) field parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct B283Params;

impl BinFieldParams<DIGS> for B283Params {
    const M: u32 = M;
    const POLY: &'static [u32] = &[12, 7, 5, 0];
    const FIELD_POLY: [Limb; DIGS] = field_poly(Self::M, Self::POLY);
    const SQRT_Z: [Limb; DIGS] = compute_sqrt_z(Self::M, Self::POLY);
    const TRACE_BITS: &'static [u32] = &[0, 271];
    // 282 = 2 · (128 + 8 + 4 + 1); u = [1, 2, 4, 8, 16, 17, 34, 35, 70,
    // 140, 141, 282].
    const CHAIN: &'static [(u8, u8)] = &[
        (1, 1),
        (2, 2),
        (3, 3),
        (4, 0),
        (5, 5),
        (6, 0),
        (7, 7),
        (8, 8),
        (9, 0),
        (10, 10),
    ];
}

/// GF(2^283) field element.
pub type FieldElement = crate::FieldElement<B283Params, DIGS>;

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    #[test]
    fn chain_reaches_m_minus_1() {
        let mut u = [0usize; 16];
        u[0] = 1;
        u[1] = 2;
        for (i, &(x, y)) in B283Params::CHAIN.iter().enumerate() {
            u[i + 2] = u[x as usize] + u[y as usize];
        }
        assert_eq!(u[B283Params::CHAIN.len() + 1], (M - 1) as usize);
    }

    #[test]
    fn sqrt_z_squares_to_z() {
        let sz = FieldElement::from_limbs_unchecked(B283Params::SQRT_Z);
        assert_eq!(sz.square(), FieldElement::Z);
    }

    #[test]
    fn trace_bits_match_definition() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(20);
        for _ in 0..4 {
            let a = FieldElement::random(&mut rng);
            // Tr(a) = Σ a^(2^i), i < m
            let mut sum = a;
            let mut t = a;
            for _ in 1..M {
                t = t.square();
                sum += t;
            }
            assert!(sum == FieldElement::ZERO || sum == FieldElement::ONE);
            let expected = u8::from(sum == FieldElement::ONE);
            assert_eq!(a.trace(), expected);
        }
    }

    #[test]
    fn sqrt_round_trip() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(21);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            assert_eq!(a.square().sqrt(), a);
            assert_eq!(a.sqrt().square(), a);
        }
    }

    #[test]
    fn half_trace_solves_quadratic() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(22);
        let mut found = 0;
        while found < 8 {
            let a = FieldElement::random(&mut rng);
            if a.trace() != 0 {
                continue;
            }
            found += 1;
            let h = a.half_trace();
            assert_eq!(h.square() + h, a);
        }
    }

    #[test]
    fn all_inversion_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(23);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            if bool::from(a.is_zero()) {
                continue;
            }
            let basic = a.invert_basic().unwrap();
            assert_eq!(a * basic, FieldElement::ONE);
            assert_eq!(basic, a.invert_binary().unwrap());
            assert_eq!(basic, a.invert_almost().unwrap());
            assert_eq!(basic, a.invert_exgcd().unwrap());
            assert_eq!(basic, a.invert_itoht().unwrap());
        }
    }

    #[test]
    fn inversion_of_z_plus_one_agrees() {
        let a = FieldElement::Z + FieldElement::ONE;
        let inv = a.invert_basic().unwrap();
        assert_eq!(a * inv, FieldElement::ONE);
        assert_eq!(inv, a.invert_binary().unwrap());
        assert_eq!(inv, a.invert_almost().unwrap());
        assert_eq!(inv, a.invert_exgcd().unwrap());
        assert_eq!(inv, a.invert_itoht().unwrap());
    }

    #[test]
    fn inverting_zero_fails() {
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));
        assert!(bool::from(FieldElement::ZERO.invert_basic().is_none()));
        assert!(bool::from(FieldElement::ZERO.invert_exgcd().is_none()));
    }

    #[test]
    fn simultaneous_inversion() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(24);
        let mut elems = [FieldElement::ZERO; 5];
        for e in elems.iter_mut() {
            loop {
                *e = FieldElement::random(&mut rng);
                if !bool::from(e.is_zero()) {
                    break;
                }
            }
        }
        let originals = elems;
        FieldElement::invert_sim(&mut elems).unwrap();
        for (orig, inv) in originals.iter().zip(elems.iter()) {
            assert_eq!(*orig * *inv, FieldElement::ONE);
        }

        let mut with_zero = [FieldElement::ONE, FieldElement::ZERO];
        assert!(FieldElement::invert_sim(&mut with_zero).is_err());
    }

    #[test]
    fn field_laws() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(25);
        for _ in 0..8 {
            let a = FieldElement::random(&mut rng);
            let b = FieldElement::random(&mut rng);
            let c = FieldElement::random(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a + a, FieldElement::ZERO);
            assert_eq!(a.square(), a * a);
        }
    }
}
