//! Modular square roots.

use crate::element::FieldElement;
use crate::limbs;
use crate::params::FieldParams;
use mpint::limb::{Limb, LIMB_BITS};
use subtle::{ConstantTimeEq, CtOption};

impl<P, const LIMBS: usize> FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Square root, if one exists.
    ///
    /// Fields with `p ≡ 3 (mod 4)` use the single-exponentiation shortcut
    /// `a^((p+1)/4)`; other fields fall back to Tonelli–Shanks driven by
    /// the configured nonresidue [`FieldParams::GENERATOR`]. The fallback
    /// is variable-time.
    pub fn sqrt(&self) -> CtOption<Self> {
        let candidate = if P::MODULUS[0] & 3 == 3 {
            let exp = limbs::add_limb_shr2(&P::MODULUS, 1);
            self.pow_vartime(&exp)
        } else {
            self.sqrt_tonelli_shanks()
        };
        CtOption::new(candidate, candidate.square().ct_eq(self))
    }

    fn sqrt_tonelli_shanks(&self) -> Self {
        // p - 1 = 2^s · t with t odd
        let mut t = limbs::sub_limb(&P::MODULUS, 1);
        let s = trailing_zeros(&t);
        mpint::uint::shr_assign(&mut t, s);

        // r = a^((t+1)/2), tt = a^t, c = g^t
        let mut t_plus_1 = t;
        let carry = add_one(&mut t_plus_1);
        debug_assert_eq!(carry, 0);
        mpint::uint::shr_assign(&mut t_plus_1, 1);

        let mut r = self.pow_vartime(&t_plus_1);
        let mut tt = self.pow_vartime(&t);
        let mut c = Self::from_u64(P::GENERATOR).pow_vartime(&t);
        let mut m = s;

        while tt != Self::ONE {
            // Least i with tt^(2^i) = 1.
            let mut i = 0;
            let mut probe = tt;
            while probe != Self::ONE && i < m {
                probe = probe.square();
                i += 1;
            }
            if i == m {
                // Nonresidue; the caller's verification rejects the result.
                return Self::ZERO;
            }
            let b = c.sqn(m - i - 1);
            m = i;
            c = b.square();
            tt = tt.multiply(&c);
            r = r.multiply(&b);
        }
        r
    }
}

fn trailing_zeros(x: &[Limb]) -> usize {
    let mut count = 0;
    for limb in x {
        if *limb == 0 {
            count += LIMB_BITS;
        } else {
            return count + limb.trailing_zeros() as usize;
        }
    }
    count
}

fn add_one(x: &mut [Limb]) -> Limb {
    let mut carry = 1;
    for limb in x.iter_mut() {
        let (w, c) = mpint::limb::adc(*limb, 0, carry);
        *limb = w;
        carry = c;
        if carry == 0 {
            break;
        }
    }
    carry
}
