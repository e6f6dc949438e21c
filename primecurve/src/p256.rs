//! NIST P-256 curve parameters.

use crate::params::PrimeCurveParams;
use mpint::limb::Limb;
use primefield::limbs::{from_be_hex, montgomery_convert};
use primefield::p256::{P256Params, LIMBS};
use primefield::FieldParams;

/// NIST P-256 (secp256r1).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistP256;

/// P-256 base field element.
pub type FieldElement = primefield::p256::FieldElement;

/// P-256 affine point.
pub type AffinePoint = crate::AffinePoint<NistP256, LIMBS>;

/// P-256 projective point.
pub type ProjectivePoint = crate::ProjectivePoint<NistP256, LIMBS>;

/// Field element constant from canonical big-endian hex.
const fn fe(hex: &str) -> FieldElement {
    let raw = from_be_hex::<LIMBS>(hex);
    FieldElement::from_internal(montgomery_convert(
        &raw,
        &P256Params::R2,
        &P256Params::MODULUS,
        P256Params::MONTY_U,
    ))
}

impl PrimeCurveParams<LIMBS> for NistP256 {
    type Field = P256Params;

    const EQUATION_A: FieldElement =
        fe("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
    const EQUATION_B: FieldElement =
        fe("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    const GENERATOR: (FieldElement, FieldElement) = (
        fe("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        fe("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );
    const ORDER: [Limb; LIMBS] =
        from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedBaseTable;
    use mpint::Int;
    use rand_core::SeedableRng;

    fn random_scalar(rng: &mut impl rand_core::RngCore) -> Int {
        Int::random(rng, 256).modulo(&NistP256::order()).unwrap()
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(AffinePoint::GENERATOR.is_on_curve()));
    }

    #[test]
    fn double_generator_matches_vector() {
        let two_g = ProjectivePoint::GENERATOR.double().to_affine();
        let expected = AffinePoint::from_xy_unchecked(
            FieldElement::from_hex_vartime(
                "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
            ),
            FieldElement::from_hex_vartime(
                "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
            ),
        );
        assert_eq!(two_g, expected);
        assert_eq!(ProjectivePoint::GENERATOR.mul_basic(&Int::from_u64(2)), expected);
    }

    #[test]
    fn boundary_scalars() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g.mul_basic(&Int::zero()), AffinePoint::IDENTITY);
        assert_eq!(g.mul_basic(&Int::one()), AffinePoint::GENERATOR);
        assert_eq!(g.mul_lwnaf(&NistP256::order()), AffinePoint::IDENTITY);

        let n_minus_1 = &NistP256::order() - &Int::one();
        assert_eq!(g.mul_lwnaf(&n_minus_1), -AffinePoint::GENERATOR);

        // k·O = O
        let k = Int::from_u64(12345);
        assert_eq!(ProjectivePoint::IDENTITY.mul_lwnaf(&k), AffinePoint::IDENTITY);
    }

    #[test]
    fn add_inverse_and_double_identity() {
        let g = ProjectivePoint::GENERATOR;
        assert!(bool::from(g.add(&g.neg()).is_identity()));
        assert!(bool::from(ProjectivePoint::IDENTITY.double().is_identity()));
    }

    #[test]
    fn mul_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(30);
        let g = ProjectivePoint::GENERATOR;
        for _ in 0..4 {
            let k = random_scalar(&mut rng);
            let basic = g.mul_basic(&k);
            assert_eq!(basic, g.mul_lwnaf(&k));
            assert_eq!(basic, g.mul_regular(&k));
            assert_eq!(basic, FixedBaseTable::generator().mul(&k));
        }
    }

    #[test]
    fn sim_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(31);
        let g = ProjectivePoint::GENERATOR;
        let q = ProjectivePoint::from(g.mul_lwnaf(&Int::from_u64(0xfeed)));
        for _ in 0..3 {
            let k = random_scalar(&mut rng);
            let l = random_scalar(&mut rng);
            let basic = g.mul_sim_basic(&k, &q, &l);
            assert_eq!(basic, g.mul_sim_trick(&k, &q, &l));
            assert_eq!(basic, g.mul_sim_inter(&k, &q, &l));
            assert_eq!(basic, g.mul_sim_joint(&k, &q, &l));
        }
    }

    #[test]
    fn shamir_identity_on_fixed_vector() {
        // 3·G + 5·(2G) = 13·G
        let g = ProjectivePoint::GENERATOR;
        let q = g.double();
        let k = Int::from_u64(3);
        let l = Int::from_u64(5);
        let expected = g.mul_basic(&Int::from_u64(13));
        assert_eq!(g.mul_sim_trick(&k, &q, &l), expected);
        assert_eq!(g.mul_sim_joint(&k, &q, &l), expected);
    }

    #[test]
    fn distributive_laws() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(32);
        let g = ProjectivePoint::GENERATOR;
        let n = NistP256::order();
        for _ in 0..3 {
            let k = random_scalar(&mut rng);
            let l = random_scalar(&mut rng);

            // (k + l)·G = k·G + l·G
            let sum = (&k + &l).modulo(&n).unwrap();
            let lhs = g.mul_lwnaf(&sum);
            let rhs = ProjectivePoint::from(g.mul_lwnaf(&k))
                .add(&ProjectivePoint::from(g.mul_lwnaf(&l)))
                .to_affine();
            assert_eq!(lhs, rhs);

            // k·(l·G) = (k·l mod n)·G
            let kl = (&k * &l).modulo(&n).unwrap();
            let lg = ProjectivePoint::from(g.mul_lwnaf(&l));
            assert_eq!(lg.mul_lwnaf(&k), g.mul_lwnaf(&kl));
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let g = ProjectivePoint::GENERATOR;
        let p = g.double().add(&g);
        let affine = p.to_affine();
        let back = ProjectivePoint::from(affine);
        assert_eq!(back.to_affine(), affine);
        assert!(bool::from(affine.is_on_curve()));
    }
}
