//! Scalar multiplication on binary curves.
//!
//! Every strategy is a named entry point returning the result in
//! normalized (affine) form. Koblitz curves replace doublings by cheap
//! Frobenius applications through the τ-adic expansions; the ladder
//! multiplication is the constant-time path. Scalars are expected to be
//! non-negative and reduced modulo the group order by the caller.

use crate::affine::AffinePoint;
use crate::params::BinCurveParams;
use crate::projective::ProjectivePoint;
use crate::tau::TauContext;
use binfield::FieldElement;
use core::ops::Mul;
use mpint::rec;
use mpint::{Error, Int};
use subtle::Choice;

/// Digit buffer large enough for any supported scalar recoding.
const REC_DIGITS: usize = mpint::MAX_BITS + 1;

/// Largest odd-multiple table: `2^(MAX_WIDTH - 2)` entries.
const MAX_TABLE: usize = 16;

impl<C, const DIGS: usize> ProjectivePoint<C, DIGS>
where
    C: BinCurveParams<DIGS>,
{
    /// Basic left-to-right double-and-add multiplication.
    pub fn mul_basic(&self, k: &Int) -> AffinePoint<C, DIGS> {
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

    /// Left-to-right windowed multiplication: width-w NAF on ordinary
    /// curves, width-w τ-adic NAF on Koblitz curves.
    pub fn mul_lwnaf(&self, k: &Int) -> AffinePoint<C, DIGS> {
        if C::KOBLITZ {
            self.mul_ltnaf(k)
        } else {
            self.mul_lnaf(k)
        }
    }

    /// Right-to-left windowed multiplication: accumulates into per-digit
    /// slots, then folds each slot by its odd multiple (ordinary) or its
    /// α-representative under τ (Koblitz).
    pub fn mul_rwnaf(&self, k: &Int) -> AffinePoint<C, DIGS> {
        if C::KOBLITZ {
            self.mul_rtnaf(k)
        } else {
            self.mul_rnaf(k)
        }
    }

    fn mul_lnaf(&self, k: &Int) -> AffinePoint<C, DIGS> {
        debug_assert!(!k.is_negative());
        let mut naf = [0i8; REC_DIGITS];
        let len = rec::naf(k, C::MUL_WIDTH, &mut naf).expect("scalar is non-negative");
        let table = odd_multiples(self, C::MUL_WIDTH);

        let mut r = Self::IDENTITY;
        for i in (0..len).rev() {
            r = r.double();
            let n = naf[i];
            if n > 0 {
                r = r.add_mixed(&table[n as usize / 2]);
            } else if n < 0 {
                r = r.sub_mixed(&table[-n as usize / 2]);
            }
        }
        r.to_affine()
    }

    fn mul_ltnaf(&self, k: &Int) -> AffinePoint<C, DIGS> {
        debug_assert!(!k.is_negative());
        let ctx = TauContext::new::<C, DIGS>();
        let mut code = [0i8; REC_DIGITS];
        let len = ctx
            .tnaf(k, C::MUL_WIDTH, &mut code)
            .expect("scalar is non-negative");
        let table = koblitz_table(self, C::MUL_WIDTH);

        let mut r = Self::IDENTITY;
        for i in (0..len).rev() {
            r = r.frobenius();
            let n = code[i];
            if n > 0 {
                r = r.add_mixed(&table[n as usize / 2]);
            } else if n < 0 {
                r = r.sub_mixed(&table[-n as usize / 2]);
            }
        }
        r.to_affine()
    }

    fn mul_rnaf(&self, k: &Int) -> AffinePoint<C, DIGS> {
        debug_assert!(!k.is_negative());
        let mut naf = [0i8; REC_DIGITS];
        let len = rec::naf(k, C::MUL_WIDTH, &mut naf).expect("scalar is non-negative");
        let size = 1usize << (C::MUL_WIDTH - 2);

        let mut slots = [Self::IDENTITY; MAX_TABLE];
        let mut q = self.to_affine();
        for i in 0..len {
            let n = naf[i];
            if n > 0 {
                slots[n as usize / 2] = slots[n as usize / 2].add_mixed(&q);
            } else if n < 0 {
                slots[-n as usize / 2] = slots[-n as usize / 2].sub_mixed(&q);
            }
            q = ProjectivePoint::from(q).double().to_affine();
        }

        // Fold each slot by its odd multiple and accumulate.
        let mut r = slots[0];
        for (i, slot) in slots.iter().enumerate().take(size).skip(1) {
            r = r.add(&mul_small((2 * i + 1) as i64, slot));
        }
        r.to_affine()
    }

    fn mul_rtnaf(&self, k: &Int) -> AffinePoint<C, DIGS> {
        debug_assert!(!k.is_negative());
        let ctx = TauContext::new::<C, DIGS>();
        let mut code = [0i8; REC_DIGITS];
        let len = ctx
            .tnaf(k, C::MUL_WIDTH, &mut code)
            .expect("scalar is non-negative");
        let size = 1usize << (C::MUL_WIDTH - 2);

        let mut slots = [Self::IDENTITY; MAX_TABLE];
        let mut q = self.to_affine();
        for i in 0..len {
            let n = code[i];
            if n > 0 {
                slots[n as usize / 2] = slots[n as usize / 2].add_mixed(&q);
            } else if n < 0 {
                slots[-n as usize / 2] = slots[-n as usize / 2].sub_mixed(&q);
            }
            q = q.frobenius();
        }

        // Fold each slot by α_(2i+1) = β + γτ and accumulate.
        let mut r = slots[0];
        for (i, slot) in slots.iter().enumerate().take(size).skip(1) {
            let (beta, gamma) = rec::tnaf_alpha((2 * i + 1) as i64, C::MUL_WIDTH, C::MU);
            let folded = mul_small(beta, slot).add(&mul_small(gamma, &slot.frobenius()));
            r = r.add(&folded);
        }
        r.to_affine()
    }

    /// Montgomery-ladder (López-Dahab) multiplication on x-coordinates
    /// only, with a masked swap per scalar bit; the constant-time
    /// multiplication path.
    ///
    /// Fails with [`Error::NoValidConfig`] on supersingular curves.
    pub fn mul_lodah(&self, k: &Int) -> Result<AffinePoint<C, DIGS>, Error> {
        if C::SUPERSINGULAR {
            return Err(Error::NoValidConfig);
        }
        debug_assert!(!k.is_negative());
        if k.is_zero() || bool::from(self.is_identity()) {
            return Ok(AffinePoint::IDENTITY);
        }

        let p = self.to_affine();
        let (px, py) = match p.coordinates() {
            Some(xy) => xy,
            None => return Ok(AffinePoint::IDENTITY),
        };

        let mut x1 = px;
        let mut z1 = FieldElement::ONE;
        let mut z2 = px.square();
        let mut x2 = z2.square() + C::EQUATION_B;

        for i in (0..k.bits() - 1).rev() {
            let bit = Choice::from(k.bit(i));
            FieldElement::conditional_swap(&mut x1, &mut x2, bit);
            FieldElement::conditional_swap(&mut z1, &mut z2, bit);

            let r1 = x1 * z2;
            let r2 = x2 * z1;
            let r3 = r1 + r2;
            let r4 = r1 * r2;

            // Differential addition into the second arm, doubling of the
            // first; the arms keep difference P throughout.
            z2 = r3.square();
            x2 = px * z2 + r4;
            let s1 = z1.square();
            let s2 = x1.square();
            z1 = s1 * s2;
            x1 = s2.square() + C::EQUATION_B * s1.square();

            FieldElement::conditional_swap(&mut x1, &mut x2, bit);
            FieldElement::conditional_swap(&mut z1, &mut z2, bit);
        }

        if bool::from(z1.is_zero()) {
            return Ok(AffinePoint::IDENTITY);
        }
        if bool::from(z2.is_zero()) {
            return Ok(AffinePoint::from_xy_unchecked(px, px + py));
        }

        // y-recovery from the two ladder arms.
        let r3 = z1 * z2;
        let z1r = z1 * px + x1;
        let z2r = z2 * px;
        let x1r = x1 * z2r;
        let z2s = (z2r + x2) * z1r;
        let r4 = (px.square() + py) * r3 + z2s;
        let inv = match Option::<FieldElement<C::Field, DIGS>>::from((r3 * px).invert()) {
            Some(inv) => inv,
            None => return Err(Error::Internal),
        };
        let r4 = r4 * inv;
        let xr = x1r * inv;
        let yr = (xr + px) * r4 + py;

        Ok(AffinePoint::from_xy_unchecked(xr, yr))
    }

    /// Halving-based multiplication: converts `k` to
    /// `k' = 2^(t-1)·k mod n`, recodes it, and walks the expansion with
    /// point halvings instead of doublings.
    ///
    /// Fails with [`Error::NoValidConfig`] on curves whose cofactor is
    /// not 2.
    pub fn mul_halve(&self, k: &Int) -> Result<AffinePoint<C, DIGS>, Error> {
        if C::COFACTOR != 2 {
            return Err(Error::NoValidConfig);
        }
        debug_assert!(!k.is_negative());

        let n = C::order();
        let t = n.bits();
        let k2 = k.shl(t - 1).modulo(&n)?;

        let mut naf = [0i8; REC_DIGITS];
        let len = rec::naf(&k2, C::MUL_WIDTH, &mut naf)?;
        let size = 1usize << (C::MUL_WIDTH - 2);

        let mut slots = [Self::IDENTITY; MAX_TABLE];
        // A digit at position t corresponds to 2P.
        if len > t {
            debug_assert!(len == t + 1 && naf[t] == 1);
            slots[0] = ProjectivePoint::from(self.to_affine()).double();
        }

        let mut q = self.to_affine();
        for i in (0..t).rev() {
            let j = naf[i];
            if j > 0 {
                slots[j as usize / 2] = slots[j as usize / 2].add_mixed(&q);
            } else if j < 0 {
                slots[-j as usize / 2] = slots[-j as usize / 2].sub_mixed(&q);
            }
            q = q.halve();
        }

        // r = Σ (2i+1)·slot[i] via suffix sums.
        let r = if size == 1 {
            slots[0]
        } else {
            for j in (0..size - 1).rev() {
                slots[j] = slots[j].add(&slots[j + 1]);
            }
            let mut r = slots[1];
            for slot in slots.iter().take(size).skip(2) {
                r = r.add(slot);
            }
            r = r.double();
            r.add(&slots[0])
        };
        Ok(r.to_affine())
    }

    /// Simultaneous multiplication `k·self + l·q` by two independent
    /// multiplications and a final addition.
    pub fn mul_sim_basic(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, DIGS> {
        let t = ProjectivePoint::from(q.mul_lwnaf(l));
        let r = ProjectivePoint::from(self.mul_lwnaf(k));
        r.add(&t).to_affine()
    }

    /// Simultaneous multiplication by interleaving two windowed-NAF
    /// expansions over separate tables.
    pub fn mul_sim_inter(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, DIGS> {
        debug_assert!(!k.is_negative() && !l.is_negative());
        let mut naf0 = [0i8; REC_DIGITS];
        let mut naf1 = [0i8; REC_DIGITS];
        let l0 = rec::naf(k, C::MUL_WIDTH, &mut naf0).expect("scalar is non-negative");
        let l1 = rec::naf(l, C::MUL_WIDTH, &mut naf1).expect("scalar is non-negative");
        let table0 = odd_multiples(self, C::MUL_WIDTH);
        let table1 = odd_multiples(q, C::MUL_WIDTH);

        let mut r = Self::IDENTITY;
        for i in (0..l0.max(l1)).rev() {
            r = r.double();
            for (naf, table) in [(&naf0[..], &table0), (&naf1[..], &table1)] {
                let n = naf[i];
                if n > 0 {
                    r = r.add_mixed(&table[n as usize / 2]);
                } else if n < 0 {
                    r = r.sub_mixed(&table[-n as usize / 2]);
                }
            }
        }
        r.to_affine()
    }

    /// Simultaneous multiplication over the Joint Sparse Form and the
    /// five-point table `{O, Q, P, P+Q, P-Q}`.
    pub fn mul_sim_joint(&self, k: &Int, q: &Self, l: &Int) -> AffinePoint<C, DIGS> {
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

/// Normalized table of odd multiples `[P, 3P, ..., (2^(w-1) - 1)P]`.
fn odd_multiples<C, const DIGS: usize>(
    p: &ProjectivePoint<C, DIGS>,
    w: u32,
) -> [AffinePoint<C, DIGS>; MAX_TABLE]
where
    C: BinCurveParams<DIGS>,
{
    debug_assert!((2..=6).contains(&w));
    let len = 1usize << (w - 2);
    let mut raw = [ProjectivePoint::IDENTITY; MAX_TABLE];
    raw[0] = *p;
    let double = p.double();
    for i in 1..len {
        raw[i] = raw[i - 1].add(&double);
    }
    let mut out = [AffinePoint::IDENTITY; MAX_TABLE];
    ProjectivePoint::normalize_batch(&raw[..len], &mut out[..len]);
    out
}

/// Normalized Koblitz table `[α_1·P, α_3·P, ...]` with
/// `α_u = β + γτ ≡ u (mod τ^w)`.
fn koblitz_table<C, const DIGS: usize>(
    p: &ProjectivePoint<C, DIGS>,
    w: u32,
) -> [AffinePoint<C, DIGS>; MAX_TABLE]
where
    C: BinCurveParams<DIGS>,
{
    debug_assert!((2..=6).contains(&w));
    let len = 1usize << (w - 2);
    let base = p.to_affine();
    let phi = base.frobenius();

    let mut raw = [ProjectivePoint::IDENTITY; MAX_TABLE];
    raw[0] = *p;
    for (i, slot) in raw.iter_mut().enumerate().take(len).skip(1) {
        let (beta, gamma) = rec::tnaf_alpha((2 * i + 1) as i64, w, C::MU);
        *slot = mul_small_mixed(beta, &base).add(&mul_small_mixed(gamma, &phi));
    }
    let mut out = [AffinePoint::IDENTITY; MAX_TABLE];
    ProjectivePoint::normalize_batch(&raw[..len], &mut out[..len]);
    out
}

/// `c·P` for a small signed integer, with an affine base.
fn mul_small_mixed<C, const DIGS: usize>(
    c: i64,
    p: &AffinePoint<C, DIGS>,
) -> ProjectivePoint<C, DIGS>
where
    C: BinCurveParams<DIGS>,
{
    let abs = c.unsigned_abs();
    let mut r = ProjectivePoint::IDENTITY;
    for i in (0..(64 - abs.leading_zeros())).rev() {
        r = r.double();
        if (abs >> i) & 1 == 1 {
            r = r.add_mixed(p);
        }
    }
    if c < 0 {
        r.neg()
    } else {
        r
    }
}

/// `c·P` for a small signed integer, with a projective base.
fn mul_small<C, const DIGS: usize>(
    c: i64,
    p: &ProjectivePoint<C, DIGS>,
) -> ProjectivePoint<C, DIGS>
where
    C: BinCurveParams<DIGS>,
{
    mul_small_mixed(c, &p.to_affine())
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Mul<&Int> for &ProjectivePoint<C, DIGS> {
    type Output = ProjectivePoint<C, DIGS>;

    fn mul(self, k: &Int) -> ProjectivePoint<C, DIGS> {
        self.mul_lwnaf(k).into()
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Mul<&Int> for ProjectivePoint<C, DIGS> {
    type Output = ProjectivePoint<C, DIGS>;

    fn mul(self, k: &Int) -> ProjectivePoint<C, DIGS> {
        self.mul_lwnaf(k).into()
    }
}
