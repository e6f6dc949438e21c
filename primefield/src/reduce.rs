//! Reduction back-ends.
//!
//! Multiplication produces a double-width value; a reduction back-end maps
//! it back to a canonical residue. The back-end is chosen per field at
//! build time through [`FieldParams::Reduction`], with zero-sized
//! dispatch types so the hot path monomorphizes to direct calls.

use crate::limbs;
use crate::params::FieldParams;
use mpint::limb::{Limb, LIMB_BITS};
use mpint::uint;
use core::cmp::Ordering;

/// Double-width value produced by a full multiplication, as low and high
/// halves of `LIMBS` limbs each.
#[derive(Clone, Copy, Debug)]
pub struct Wide<const LIMBS: usize> {
    /// Least significant half.
    pub lo: [Limb; LIMBS],
    /// Most significant half.
    pub hi: [Limb; LIMBS],
}

/// A reduction back-end for one field.
///
/// `to_internal`/`from_internal` bracket the internal representation the
/// back-end computes in: the Montgomery back-end carries the implicit
/// factor `R`, the sparse back-end works on plain residues.
pub trait Reduce<P: FieldParams<LIMBS>, const LIMBS: usize> {
    /// Internal representation of the multiplicative identity.
    const ONE: [Limb; LIMBS];

    /// Maps a double-width value to a canonical internal residue.
    fn reduce(wide: &Wide<LIMBS>) -> [Limb; LIMBS];

    /// Enters the internal representation from a canonical value.
    fn to_internal(raw: &[Limb; LIMBS]) -> [Limb; LIMBS];

    /// Leaves the internal representation, returning a canonical value.
    fn from_internal(x: &[Limb; LIMBS]) -> [Limb; LIMBS];
}

/// Montgomery reduction with the Comba triple-register accumulator.
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryReduction;

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Reduce<P, LIMBS> for MontgomeryReduction {
    const ONE: [Limb; LIMBS] = P::R;

    #[inline]
    fn reduce(wide: &Wide<LIMBS>) -> [Limb; LIMBS] {
        limbs::montgomery_reduce(&wide.lo, &wide.hi, &P::MODULUS, P::MONTY_U)
    }

    #[inline]
    fn to_internal(raw: &[Limb; LIMBS]) -> [Limb; LIMBS] {
        limbs::montgomery_convert(raw, &P::R2, &P::MODULUS, P::MONTY_U)
    }

    #[inline]
    fn from_internal(x: &[Limb; LIMBS]) -> [Limb; LIMBS] {
        limbs::montgomery_retrieve(x, &P::MODULUS, P::MONTY_U)
    }
}

/// Largest supported field size, in limbs, for the sparse back-end's
/// scratch buffers.
const SPARSE_MAX_LIMBS: usize = 1024 / LIMB_BITS;

const SPARSE_SCRATCH: usize = 2 * SPARSE_MAX_LIMBS + 2;

/// Split-and-fold reduction for moduli of the form `2^t + Σ ε·2^s` with
/// few terms.
///
/// Variable-time; operates on plain residues (no Montgomery factor).
#[derive(Clone, Copy, Debug)]
pub struct SparseReduction;

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Reduce<P, LIMBS> for SparseReduction {
    const ONE: [Limb; LIMBS] = {
        let mut one = [0; LIMBS];
        one[0] = 1;
        one
    };

    fn reduce(wide: &Wide<LIMBS>) -> [Limb; LIMBS] {
        let form = match P::SPARSE {
            Some(form) => form,
            None => panic!("sparse reduction selected for a field without a sparse form"),
        };
        let t = form.t as usize;
        debug_assert!(t <= LIMBS * LIMB_BITS);
        assert!(2 * LIMBS + 2 <= SPARSE_SCRATCH, "field too large for sparse back-end");

        let mut a = [0; SPARSE_SCRATCH];
        a[..LIMBS].copy_from_slice(&wide.lo);
        a[LIMBS..2 * LIMBS].copy_from_slice(&wide.hi);
        let mut negative = false;

        // a = q·2^t + r ≡ r - q·(p - 2^t) (mod p); iterate until q = 0.
        while uint::bits(&a) > t {
            let mut q = a;
            uint::shr_assign(&mut q, t);
            mask_high(&mut a, t);

            let mut pos = a;
            let mut neg = [0; SPARSE_SCRATCH];
            for &(s, eps) in form.terms {
                let mut term = q;
                uint::shl_assign(&mut term, s as usize);
                if eps < 0 {
                    uint::add_assign(&mut pos, &term);
                } else {
                    uint::add_assign(&mut neg, &term);
                }
            }
            if uint::cmp(&pos, &neg) == Ordering::Less {
                uint::sub(&mut a, &neg, &pos);
                negative = !negative;
            } else {
                uint::sub(&mut a, &pos, &neg);
            }
        }

        let mut out = [0; LIMBS];
        out.copy_from_slice(&a[..LIMBS]);

        // Corrective steps, each bounded by a handful of iterations.
        while !limbs::lt(&out, &P::MODULUS) {
            let mut diff = [0; LIMBS];
            uint::sub(&mut diff, &out, &P::MODULUS);
            out = diff;
        }
        if negative && out != [0; LIMBS] {
            let mut diff = [0; LIMBS];
            uint::sub(&mut diff, &P::MODULUS, &out);
            out = diff;
        }
        out
    }

    #[inline]
    fn to_internal(raw: &[Limb; LIMBS]) -> [Limb; LIMBS] {
        *raw
    }

    #[inline]
    fn from_internal(x: &[Limb; LIMBS]) -> [Limb; LIMBS] {
        *x
    }
}

/// Clears all bits at positions `>= t`.
fn mask_high(x: &mut [Limb], t: usize) {
    let (d, b) = (t / LIMB_BITS, t % LIMB_BITS);
    if d < x.len() && b != 0 {
        x[d] &= (1 << b) - 1;
    }
    let start = if b == 0 { d } else { d + 1 };
    let start = start.min(x.len());
    for limb in &mut x[start..] {
        *limb = 0;
    }
}
