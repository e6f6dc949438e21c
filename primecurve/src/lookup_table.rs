//! Precomputed tables of odd point multiples.

use crate::affine::AffinePoint;
use crate::params::PrimeCurveParams;
use crate::projective::ProjectivePoint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Largest supported window width for odd-multiple tables.
pub(crate) const MAX_WIDTH: u32 = 6;

/// Largest table size: `2^(MAX_WIDTH - 2)` entries.
pub(crate) const MAX_TABLE: usize = 1 << (MAX_WIDTH - 2);

/// Table of odd multiples `[P, 3P, 5P, ...]` with `2^(w-2)` entries,
/// normalized for mixed addition.
pub struct LookupTable<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    points: [AffinePoint<C, LIMBS>; MAX_TABLE],
    len: usize,
}

impl<C, const LIMBS: usize> LookupTable<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Computes the odd multiples of `p` for window width `w` and
    /// normalizes them with one shared inversion.
    pub fn new(p: &ProjectivePoint<C, LIMBS>, w: u32) -> Self {
        debug_assert!((2..=MAX_WIDTH).contains(&w));
        let len = 1usize << (w - 2);

        let mut raw = [ProjectivePoint::IDENTITY; MAX_TABLE];
        raw[0] = *p;
        let double = p.double();
        for i in 1..len {
            raw[i] = raw[i - 1].add(&double);
        }

        let mut points = [AffinePoint::IDENTITY; MAX_TABLE];
        ProjectivePoint::normalize_batch(&raw[..len], &mut points[..len]);
        Self { points, len }
    }

    /// Entry `i`, holding `(2i + 1)·P`. Variable-time.
    pub fn entry_vartime(&self, i: usize) -> &AffinePoint<C, LIMBS> {
        &self.points[i]
    }

    /// Returns `d·P` for an odd signed digit `d`, reading every slot and
    /// masking so the access pattern is independent of `d`.
    pub fn select(&self, d: i8) -> AffinePoint<C, LIMBS> {
        debug_assert!(d % 2 != 0);
        let mask = d >> 7;
        let abs = ((d + mask) ^ mask) as u8;
        let idx = abs / 2;

        let mut t = AffinePoint::IDENTITY;
        for (j, point) in self.points[..self.len].iter().enumerate() {
            t.conditional_assign(point, (j as u8).ct_eq(&idx));
        }
        let neg = Choice::from((mask & 1) as u8);
        t.conditional_assign(&-t, neg);
        t
    }
}
