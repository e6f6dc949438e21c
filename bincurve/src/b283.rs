//! NIST B-283 (sect283r1), the degree-283 pseudo-random binary curve:
//! `y² + xy = x³ + x² + b` over GF(2^283).

use crate::params::{BinCurveParams, CoeffKind};
use binfield::b283::{B283Params, DIGS};
use binfield::params::from_be_hex;
use mpint::limb::Limb;

/// NIST B-283.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NistB283;

/// B-283 base field element.
pub type FieldElement = binfield::b283::FieldElement;

/// B-283 affine point.
pub type AffinePoint = crate::AffinePoint<NistB283, DIGS>;

/// B-283 projective point.
pub type ProjectivePoint = crate::ProjectivePoint<NistB283, DIGS>;

const fn fe(hex: &str) -> FieldElement {
    FieldElement::from_limbs_unchecked(from_be_hex::<DIGS>(hex))
}

impl BinCurveParams<DIGS> for NistB283 {
    type Field = B283Params;

    const EQUATION_A: FieldElement = FieldElement::ONE;
    const EQUATION_B: FieldElement =
        fe("027b680ac8b8596da5a4af8a19a0303fca97fd7645309fa2a581485af6263e313b79a2f5");
    const A_KIND: CoeffKind = CoeffKind::One;
    const KOBLITZ: bool = false;
    const GENERATOR: (FieldElement, FieldElement) = (
        fe("05f939258db7dd90e1934f8c70b0dfec2eed25b8557eac9c80e2e198f8cdbecd86b12053"),
        fe("03676854fe24141cb98fe6d4b20d02b4516ff702350eddb0826779c813f0df45be8112f4"),
    );
    const ORDER: [Limb; DIGS] =
        from_be_hex("03ffffffffffffffffffffffffffffffffffef90399660fc938a90165b042a7cefadb307");
    const COFACTOR: u32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpint::Int;
    use rand_core::SeedableRng;

    fn random_scalar(rng: &mut impl rand_core::RngCore) -> Int {
        Int::random(rng, 283).modulo(&NistB283::order()).unwrap()
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(AffinePoint::GENERATOR.is_on_curve()));
    }

    #[test]
    fn point_construction_from_x() {
        // Solve y² + xy = x³ + ax² + b for a fresh x via half-trace, then
        // verify the point; exercises trace, half-trace and sqrt together.
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(50);
        let mut found = 0;
        while found < 4 {
            let x = FieldElement::random(&mut rng);
            if bool::from(x.is_zero()) {
                continue;
            }
            // λ² + λ = x + a + b/x² has a solution iff the trace vanishes.
            let rhs = x + NistB283::EQUATION_A
                + NistB283::EQUATION_B * x.square().invert().unwrap();
            if rhs.trace() != 0 {
                continue;
            }
            found += 1;
            let lambda = rhs.half_trace();
            // y = x·λ satisfies y² + xy = x²·(λ² + λ) = x³ + ax² + b
            let p = AffinePoint::from_xy_unchecked(x, x * lambda);
            assert!(bool::from(p.is_on_curve()));
        }
    }

    #[test]
    fn boundary_scalars() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g.mul_basic(&Int::zero()), AffinePoint::IDENTITY);
        assert_eq!(g.mul_basic(&Int::one()), AffinePoint::GENERATOR);
        assert_eq!(g.mul_lwnaf(&NistB283::order()), AffinePoint::IDENTITY);
        let n_minus_1 = &NistB283::order() - &Int::one();
        assert_eq!(g.mul_lwnaf(&n_minus_1), -AffinePoint::GENERATOR);
    }

    #[test]
    fn add_inverse_and_double_identity() {
        let g = ProjectivePoint::GENERATOR;
        assert!(bool::from(g.add(&g.neg()).is_identity()));
        assert!(bool::from(ProjectivePoint::IDENTITY.double().is_identity()));
    }

    #[test]
    fn halve_inverts_double() {
        let g = ProjectivePoint::GENERATOR;
        let p = g.double().to_affine();
        let half = p.halve();
        let back = ProjectivePoint::from(half).double().to_affine();
        assert_eq!(back, p);

        let half_g = AffinePoint::GENERATOR.halve();
        assert_eq!(
            ProjectivePoint::from(half_g).double().to_affine(),
            AffinePoint::GENERATOR
        );
    }

    #[test]
    fn mul_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(51);
        let g = ProjectivePoint::GENERATOR;
        for _ in 0..2 {
            let k = random_scalar(&mut rng);
            let basic = g.mul_basic(&k);
            assert_eq!(basic, g.mul_lwnaf(&k), "left-to-right wNAF");
            assert_eq!(basic, g.mul_rwnaf(&k), "right-to-left wNAF");
            assert_eq!(basic, g.mul_lodah(&k).unwrap(), "ladder");
            assert_eq!(basic, g.mul_halve(&k).unwrap(), "halving");
        }
    }

    #[test]
    fn sim_variants_agree() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(52);
        let g = ProjectivePoint::GENERATOR;
        let q = ProjectivePoint::from(g.mul_lwnaf(&Int::from_u64(0x1234)));
        let k = random_scalar(&mut rng);
        let l = random_scalar(&mut rng);
        let basic = g.mul_sim_basic(&k, &q, &l);
        assert_eq!(basic, g.mul_sim_inter(&k, &q, &l));
        assert_eq!(basic, g.mul_sim_joint(&k, &q, &l));
    }

    #[test]
    fn compatibility_law() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(53);
        let g = ProjectivePoint::GENERATOR;
        let n = NistB283::order();
        let k = random_scalar(&mut rng);
        let l = random_scalar(&mut rng);
        let kl = (&k * &l).modulo(&n).unwrap();
        let lg = ProjectivePoint::from(g.mul_lwnaf(&l));
        assert_eq!(lg.mul_lwnaf(&k), g.mul_lwnaf(&kl));
    }
}
