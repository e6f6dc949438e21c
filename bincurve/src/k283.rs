//! NIST K-283 (sect283k1), the degree-283 Koblitz curve:
//! `y² + xy = x³ + 1` over GF(2^283).

use crate::params::{BinCurveParams, CoeffKind};
use binfield::b283::{B283Params, DIGS};
use binfield::params::from_be_hex;
use mpint::limb::Limb;

/// NIST K-283.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistK283;

/// K-283 base field element.
pub type FieldElement = binfield::b283::FieldElement;

/// K-283 affine point.
pub type AffinePoint = crate::AffinePoint<NistK283, DIGS>;

/// K-283 projective point.
pub type ProjectivePoint = crate::ProjectivePoint<NistK283, DIGS>;

const fn fe(hex: &str) -> FieldElement {
    FieldElement::from_limbs_unchecked(from_be_hex::<DIGS>(hex))
}

impl BinCurveParams<DIGS> for NistK283 {
    type Field = B283Params;

    const EQUATION_A: FieldElement = FieldElement::ZERO;
    const EQUATION_B: FieldElement = FieldElement::ONE;
    const A_KIND: CoeffKind = CoeffKind::Zero;
    const KOBLITZ: bool = true;
    const GENERATOR: (FieldElement, FieldElement) = (
        fe("0503213f78ca44883f1a3b8162f188e553cd265f23c1567a16876913b0c2ac2458492836"),
        fe("01ccda380f1c9e318d90f95d07e5426fe87e45c0e8184698e45962364e34116177dd2259"),
    );
    const ORDER: [Limb; DIGS] =
        from_be_hex("01ffffffffffffffffffffffffffffffffffe9ae2ed07577265dff7f94451e061e163c61");
    const COFACTOR: u32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tau::TauContext;
    use mpint::{Error, Int};
    use rand_core::SeedableRng;

    fn random_scalar(rng: &mut impl rand_core::RngCore) -> Int {
        Int::random(rng, 283).modulo(&NistK283::order()).unwrap()
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(AffinePoint::GENERATOR.is_on_curve()));
    }

    #[test]
    fn tau_context_norm_is_group_order() {
        let ctx = TauContext::new::<NistK283, DIGS>();
        assert_eq!(ctx.norm(), NistK283::order());

        // n = (2^m + 1 - V_m) / (3 - μ)
        let h = Int::from_i64(3 - ctx.mu as i64);
        let numer = &(&Int::one().shl(283) + &Int::one()) - &ctx.vm;
        let (n, rem) = numer.div_rem(&h).unwrap();
        assert!(rem.is_zero());
        assert_eq!(n, NistK283::order());
    }

    #[test]
    fn boundary_scalars() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g.mul_basic(&Int::zero()), AffinePoint::IDENTITY);
        assert_eq!(g.mul_basic(&Int::one()), AffinePoint::GENERATOR);
        assert_eq!(g.mul_lwnaf(&NistK283::order()), AffinePoint::IDENTITY);

        // (n - 1)·G = -G
        let n_minus_1 = &NistK283::order() - &Int::one();
        assert_eq!(g.mul_lwnaf(&n_minus_1), -AffinePoint::GENERATOR);
        assert_eq!(g.mul_basic(&n_minus_1), -AffinePoint::GENERATOR);
    }

    #[test]
    fn frobenius_satisfies_characteristic_equation() {
        // τ²(P) + 2P = μτ(P), with μ = -1 here
        let g = ProjectivePoint::GENERATOR;
        let tau2 = g.frobenius().frobenius();
        let two_g = g.double();
        let lhs = tau2.add(&two_g).to_affine();
        let rhs = g.frobenius().neg().to_affine();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn tnaf_mul_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(40);
        let g = ProjectivePoint::GENERATOR;
        for _ in 0..2 {
            let k = random_scalar(&mut rng);
            let basic = g.mul_basic(&k);
            assert_eq!(basic, g.mul_lwnaf(&k), "left-to-right τ-NAF");
            assert_eq!(basic, g.mul_rwnaf(&k), "right-to-left τ-NAF");
            assert_eq!(basic, g.mul_lodah(&k).unwrap(), "ladder");
        }
    }

    #[test]
    fn halving_needs_cofactor_two() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(
            g.mul_halve(&Int::from_u64(5)).unwrap_err(),
            Error::NoValidConfig
        );
    }

    #[test]
    fn sim_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(41);
        let g = ProjectivePoint::GENERATOR;
        let q = ProjectivePoint::from(g.mul_lwnaf(&Int::from_u64(0xabcd)));
        let k = random_scalar(&mut rng);
        let l = random_scalar(&mut rng);
        let basic = g.mul_sim_basic(&k, &q, &l);
        assert_eq!(basic, g.mul_sim_inter(&k, &q, &l));
        assert_eq!(basic, g.mul_sim_joint(&k, &q, &l));
    }

    #[test]
    fn distributive_law() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        let g = ProjectivePoint::GENERATOR;
        let n = NistK283::order();
        let k = random_scalar(&mut rng);
        let l = random_scalar(&mut rng);

        let sum = (&k + &l).modulo(&n).unwrap();
        let lhs = g.mul_lwnaf(&sum);
        let rhs = ProjectivePoint::from(g.mul_lwnaf(&k))
            .add(&ProjectivePoint::from(g.mul_lwnaf(&l)))
            .to_affine();
        assert_eq!(lhs, rhs);
    }
}
