//! Scalar multiplication.
//!
//! Every strategy is a named entry point returning the result in
//! normalized (affine) form; the `Mul` operator binds the build default
//! (left-to-right windowed NAF). Scalars are expected to be non-negative
//! and reduced modulo the group order by the caller.

use crate::affine::AffinePoint;
use crate::lookup_table::LookupTable;
use crate::params::PrimeCurveParams;
use crate::projective::ProjectivePoint;
use core::ops::Mul;
use mpint::rec;
use mpint::Int;

/// Digit buffer large enough for any supported scalar recoding.
const REC_DIGITS: usize = mpint::MAX_BITS + 1;

impl<C, const LIMBS: usize> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Basic left-to-right double-and-add multiplication.
    pub fn mul_basic(&self, k: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative());
        let mut t = Self::IDENTITY;
        for i in (0..k.bits()).rev() {
            t = t.double();
            if k.bit(i) == 1 {
                t = t.add(self);
            }
        }
        t.to_affine()
    }

    /// Left-to-right windowed-NAF multiplication over a table of odd
    /// multiples.
    pub fn mul_lwnaf(&self, k: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative());
        let mut naf = [0i8; REC_DIGITS];
        let len = rec::naf(k, C::MUL_WIDTH, &mut naf).expect("scalar is non-negative");
        let table = LookupTable::new(self, C::MUL_WIDTH);

        let mut r = Self::IDENTITY;
        for i in (0..len).rev() {
            r = r.double();
            let n = naf[i];
            if n > 0 {
                r = r.add_mixed(table.entry_vartime(n as usize / 2));
            } else if n < 0 {
                r = r.sub_mixed(table.entry_vartime(-n as usize / 2));
            }
        }
        r.to_affine()
    }

    /// Fixed-base multiplication of the curve generator.
    pub fn mul_gen(k: &Int) -> AffinePoint<C, LIMBS> {
        Self::GENERATOR.mul_lwnaf(k)
    }

    /// Multiplication over the regular (fixed-pattern) recoding, with
    /// masked table reads.
    ///
    /// The sequence of doublings, additions, and table accesses depends
    /// only on the group order, not on the scalar value. The scalar is
    /// made odd by adding the (odd) group order when necessary, which
    /// leaves the result unchanged.
    pub fn mul_regular(&self, k: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative());
        debug_assert!(C::MUL_WIDTH >= 3, "regular recoding needs width >= 3");
        let n = C::order();
        let k = if k.is_odd() { k.clone() } else { k + &n };
        let bits = n.bits() + 1;

        let mut code = [0i8; REC_DIGITS];
        let len =
            rec::regular(&k, bits, C::MUL_WIDTH, &mut code).expect("scalar is odd and in range");
        let table = LookupTable::new(self, C::MUL_WIDTH);

        let mut r = Self::IDENTITY;
        for i in (0..len).rev() {
            for _ in 0..C::MUL_WIDTH - 1 {
                r = r.double();
            }
            r = r.add_mixed(&table.select(code[i]));
        }
        r.to_affine()
    }

    /// Simultaneous multiplication `k·self + l·q` by two independent
    /// multiplications and a final addition.
    pub fn mul_sim_basic(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, LIMBS> {
        let t = ProjectivePoint::from(q.mul_lwnaf(l));
        let r = ProjectivePoint::from(self.mul_lwnaf(k));
        r.add(&t).to_affine()
    }

    /// Simultaneous multiplication by Shamir's trick: a joint
    /// `2^w × 2^w` table indexed by unsigned windowed digits of both
    /// scalars.
    pub fn mul_sim_trick(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative() && !l.is_negative());
        let w = C::SIM_WIDTH;
        let side = 1usize << w;

        let mut t0 = [Self::IDENTITY; 1 << MAX_SIM_WIDTH];
        let mut t1 = [Self::IDENTITY; 1 << MAX_SIM_WIDTH];
        for i in 1..side {
            t0[i] = t0[i - 1].add(self);
            t1[i] = t1[i - 1].add(q);
        }

        let mut joint = [Self::IDENTITY; 1 << (2 * MAX_SIM_WIDTH)];
        for i in 0..side {
            for j in 0..side {
                joint[(i << w) + j] = t0[i].add(&t1[j]);
            }
        }
        let mut table = [AffinePoint::IDENTITY; 1 << (2 * MAX_SIM_WIDTH)];
        ProjectivePoint::normalize_batch(&joint[..side * side], &mut table[..side * side]);

        let mut w0 = [0u8; REC_DIGITS];
        let mut w1 = [0u8; REC_DIGITS];
        let l0 = rec::windowed(k, w, &mut w0).expect("scalar is non-negative");
        let l1 = rec::windowed(l, w, &mut w1).expect("scalar is non-negative");

        let mut r = Self::IDENTITY;
        for i in (0..l0.max(l1)).rev() {
            for _ in 0..w {
                r = r.double();
            }
            let idx = ((w0[i] as usize) << w) + w1[i] as usize;
            if idx != 0 {
                r = r.add_mixed(&table[idx]);
            }
        }
        r.to_affine()
    }

    /// Simultaneous multiplication by interleaving two windowed-NAF
    /// expansions over separate tables.
    pub fn mul_sim_inter(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative() && !l.is_negative());
        let mut naf0 = [0i8; REC_DIGITS];
        let mut naf1 = [0i8; REC_DIGITS];
        let l0 = rec::naf(k, C::MUL_WIDTH, &mut naf0).expect("scalar is non-negative");
        let l1 = rec::naf(l, C::MUL_WIDTH, &mut naf1).expect("scalar is non-negative");
        let table0 = LookupTable::new(self, C::MUL_WIDTH);
        let table1 = LookupTable::new(q, C::MUL_WIDTH);

        let mut r = Self::IDENTITY;
        for i in (0..l0.max(l1)).rev() {
            r = r.double();
            for (naf, table) in [(&naf0[..], &table0), (&naf1[..], &table1)] {
                let n = naf[i];
                if n > 0 {
                    r = r.add_mixed(table.entry_vartime(n as usize / 2));
                } else if n < 0 {
                    r = r.sub_mixed(table.entry_vartime(-n as usize / 2));
                }
            }
        }
        r.to_affine()
    }

    /// Simultaneous multiplication over the Joint Sparse Form and the
    /// five-point table `{O, Q, P, P+Q, P-Q}`.
    pub fn mul_sim_joint(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative() && !l.is_negative());
        let mut t = [Self::IDENTITY; 5];
        t[1] = *q;
        t[2] = *self;
        t[3] = self.add(q);
        t[4] = self.add(&q.neg());
        let mut table = [AffinePoint::IDENTITY; 5];
        ProjectivePoint::normalize_batch(&t, &mut table);

        let mut jsf = [(0i8, 0i8); REC_DIGITS];
        let len = rec::jsf(k, l, &mut jsf).expect("scalars are non-negative");

        let mut r = Self::IDENTITY;
        for i in (0..len).rev() {
            r = r.double();
            let (u, v) = jsf[i];
            if u == 0 && v == 0 {
                continue;
            }
            if u != 0 && u == -v {
                // u·P - u·Q = ±(P - Q)
                if u > 0 {
                    r = r.add_mixed(&table[4]);
                } else {
                    r = r.sub_mixed(&table[4]);
                }
            } else {
                let idx = 2 * u + v;
                if idx > 0 {
                    r = r.add_mixed(&table[idx as usize]);
                } else {
                    r = r.sub_mixed(&table[(-idx) as usize]);
                }
            }
        }
        r.to_affine()
    }
}

/// Largest supported per-scalar width for the Shamir trick.
const MAX_SIM_WIDTH: u32 = 3;

/// Precomputed fixed-base table for repeated multiplications of one base
/// point, immutable and freely shareable between workers once built.
pub struct FixedBaseTable<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    table: LookupTable<C, LIMBS>,
}

impl<C, const LIMBS: usize> FixedBaseTable<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Builds the table for the curve generator.
    pub fn generator() -> Self {
        Self::new(&ProjectivePoint::GENERATOR)
    }

    /// Builds the table for an arbitrary base point.
    pub fn new(base: &ProjectivePoint<C, LIMBS>) -> Self {
        Self {
            table: LookupTable::new(base, C::MUL_WIDTH),
        }
    }

    /// Multiplies the bound base point by `k`.
    pub fn mul(&self, k: &Int) -> AffinePoint<C, LIMBS> {
        debug_assert!(!k.is_negative());
        let mut naf = [0i8; REC_DIGITS];
        let len = rec::naf(k, C::MUL_WIDTH, &mut naf).expect("scalar is non-negative");

        let mut r = ProjectivePoint::<C, LIMBS>::IDENTITY;
        for i in (0..len).rev() {
            r = r.double();
            let n = naf[i];
            if n > 0 {
                r = r.add_mixed(self.table.entry_vartime(n as usize / 2));
            } else if n < 0 {
                r = r.sub_mixed(self.table.entry_vartime(-n as usize / 2));
            }
        }
        r.to_affine()
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Mul<&Int> for &ProjectivePoint<C, LIMBS> {
    type Output = ProjectivePoint<C, LIMBS>;

    fn mul(self, k: &Int) -> ProjectivePoint<C, LIMBS> {
        self.mul_lwnaf(k).into()
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Mul<&Int> for ProjectivePoint<C, LIMBS> {
    type Output = ProjectivePoint<C, LIMBS>;

    fn mul(self, k: &Int) -> ProjectivePoint<C, LIMBS> {
        self.mul_lwnaf(k).into()
    }
}
