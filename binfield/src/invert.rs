//! Binary field inversion.
//!
//! Five interchangeable algorithms, each producing the identical inverse;
//! the equivalence is part of the test suite. The default [`invert`]
//! dispatches to Itoh–Tsujii.
//!
//! [`invert`]: FieldElement::invert

use crate::element::FieldElement;
use crate::params::BinFieldParams;
use mpint::limb::{Limb, LIMB_BITS};
use mpint::uint;
use mpint::Error;
use subtle::CtOption;

impl<P, const DIGS: usize> FieldElement<P, DIGS>
where
    P: BinFieldParams<DIGS>,
{
    /// Multiplicative inverse, default algorithm.
    pub fn invert(&self) -> CtOption<Self> {
        self.invert_itoht()
    }

    /// Inversion by Fermat's little theorem: `a^(2^m - 2)` computed with
    /// the square-and-multiply chain on `x = (m - 1)/2`.
    pub fn invert_basic(&self) -> CtOption<Self> {
        let mut u = self.square();
        let mut v = Self::ONE;
        let mut x = (P::M as usize - 1) >> 1;
        while x != 0 {
            u = u.multiply(&u.sqn(x));
            if x & 1 == 0 {
                x >>= 1;
            } else {
                v = v.multiply(&u);
                u = u.square();
                x = (x - 1) >> 1;
            }
        }
        CtOption::new(v, !self.is_zero())
    }

    /// Inversion by the binary extended Euclidean algorithm.
    ///
    /// Maintains `u·a ≡ g1` and `v·a ≡ g2 (mod f)`, halving out factors
    /// of `z` and combining by degree until one side reaches 1.
    pub fn invert_binary(&self) -> CtOption<Self> {
        let mut u = *self.as_limbs();
        let mut v = P::FIELD_POLY;
        let mut g1 = *Self::ONE.as_limbs();
        let mut g2 = [0; DIGS];

        let ok = !self.is_zero();
        if bool::from(ok) {
            loop {
                while u[0] & 1 == 0 {
                    shr1(&mut u);
                    halve_aux::<P, DIGS>(&mut g1);
                }
                if is_one(&u) {
                    break;
                }
                while v[0] & 1 == 0 {
                    shr1(&mut v);
                    halve_aux::<P, DIGS>(&mut g2);
                }
                if is_one(&v) {
                    break;
                }
                if uint::bits(&u) > uint::bits(&v) {
                    xor_into(&mut u, &v);
                    xor_into(&mut g1, &g2);
                } else {
                    xor_into(&mut v, &u);
                    xor_into(&mut g2, &g1);
                }
            }
        }
        let out = if is_one(&u) { g1 } else { g2 };
        CtOption::new(Self::from_limbs_unchecked(out), ok)
    }

    /// Inversion by the almost-inverse algorithm, with the division of the
    /// auxiliary register folded into the halving loop.
    pub fn invert_almost(&self) -> CtOption<Self> {
        let mut b = *Self::ONE.as_limbs();
        let mut d = [0; DIGS];
        let mut u = *self.as_limbs();
        let mut v = P::FIELD_POLY;

        let ok = !self.is_zero();
        if bool::from(ok) {
            loop {
                while u[0] & 1 == 0 {
                    shr1(&mut u);
                    halve_aux::<P, DIGS>(&mut b);
                }
                if is_one(&u) {
                    break;
                }
                if uint::bits(&u) < uint::bits(&v) {
                    core::mem::swap(&mut u, &mut v);
                    core::mem::swap(&mut b, &mut d);
                }
                xor_into(&mut u, &v);
                xor_into(&mut b, &d);
            }
        }
        CtOption::new(Self::from_limbs_unchecked(b), ok)
    }

    /// Inversion by the degree-driven extended Euclidean algorithm:
    /// `u ← u + v·z^j` with `j = deg u - deg v`, swapping when `j < 0`.
    pub fn invert_exgcd(&self) -> CtOption<Self> {
        let mut u = *self.as_limbs();
        let mut v = P::FIELD_POLY;
        let mut g1 = *Self::ONE.as_limbs();
        let mut g2 = [0; DIGS];

        let ok = !self.is_zero();
        if bool::from(ok) {
            let mut j = uint::bits(&u) as isize - uint::bits(&v) as isize;
            loop {
                if j < 0 {
                    core::mem::swap(&mut u, &mut v);
                    core::mem::swap(&mut g1, &mut g2);
                    j = -j;
                }
                lsh_xor(&mut u, &v, j as usize);
                lsh_xor(&mut g1, &g2, j as usize);
                if is_one(&u) {
                    break;
                }
                j = uint::bits(&u) as isize - uint::bits(&v) as isize;
            }
            // g1 can end one degree over m when the input is a unit of
            // degree zero; one fold restores canonical form.
            if uint::bits(&g1) > P::M as usize {
                xor_into(&mut g1, &P::FIELD_POLY);
            }
        }
        CtOption::new(Self::from_limbs_unchecked(g1), ok)
    }

    /// Itoh–Tsujii inversion over the precomputed addition chain for
    /// `m - 1`: a table of `a^(2^u[i] - 1)` values followed by a final
    /// squaring.
    pub fn invert_itoht(&self) -> CtOption<Self> {
        // u[0] = 1, u[1] = 2, then u[i] = u[x] + u[y] per chain entry.
        let mut exps = [0usize; MAX_CHAIN];
        let mut table = [Self::ZERO; MAX_CHAIN];
        let len = P::CHAIN.len() + 2;
        debug_assert!(len <= MAX_CHAIN);

        exps[0] = 1;
        exps[1] = 2;
        table[0] = *self;
        table[1] = self.square().multiply(self);
        for (i, &(x, y)) in P::CHAIN.iter().enumerate() {
            let (x, y) = (x as usize, y as usize);
            exps[i + 2] = exps[x] + exps[y];
            table[i + 2] = table[x].sqn(exps[y]).multiply(&table[y]);
        }
        debug_assert_eq!(exps[len - 1], P::M as usize - 1);
        CtOption::new(table[len - 1].square(), !self.is_zero())
    }

    /// Simultaneous inversion of a slice by Montgomery's trick: one
    /// inversion plus three multiplications per extra element.
    ///
    /// Fails with [`Error::InvalidInput`] when any input is zero, leaving
    /// the slice unchanged.
    pub fn invert_sim(elems: &mut [Self]) -> Result<(), Error> {
        let n = elems.len();
        if n == 0 {
            return Ok(());
        }
        if elems.iter().any(|e| bool::from(e.is_zero())) {
            return Err(Error::InvalidInput);
        }

        let mut partial = [Self::ZERO; MAX_SIM];
        if n > MAX_SIM {
            return Err(Error::PrecisionExceeded);
        }
        partial[0] = elems[0];
        for i in 1..n {
            partial[i] = partial[i - 1].multiply(&elems[i]);
        }

        let mut u = match Option::<Self>::from(partial[n - 1].invert()) {
            Some(inv) => inv,
            None => return Err(Error::Internal),
        };

        for i in (1..n).rev() {
            let inv_i = u.multiply(&partial[i - 1]);
            u = u.multiply(&elems[i]);
            elems[i] = inv_i;
        }
        elems[0] = u;
        Ok(())
    }
}

/// Largest Itoh–Tsujii chain (including the implicit two entries).
const MAX_CHAIN: usize = 16;

/// Largest batch accepted by [`FieldElement::invert_sim`].
const MAX_SIM: usize = 64;

fn is_one(x: &[Limb]) -> bool {
    uint::bits(x) == 1
}

fn xor_into<const DIGS: usize>(r: &mut [Limb; DIGS], a: &[Limb; DIGS]) {
    for i in 0..DIGS {
        r[i] ^= a[i];
    }
}

fn shr1(x: &mut [Limb]) {
    uint::shr_assign(x, 1);
}

/// One halving step of an auxiliary register: divide by `z`, adding `f`
/// first when the register is odd.
fn halve_aux<P: BinFieldParams<DIGS>, const DIGS: usize>(g: &mut [Limb; DIGS]) {
    if g[0] & 1 == 1 {
        xor_into(g, &P::FIELD_POLY);
    }
    shr1(g);
}

/// `r ^= a << j`, entirely within the `DIGS`-limb window.
fn lsh_xor<const DIGS: usize>(r: &mut [Limb; DIGS], a: &[Limb; DIGS], j: usize) {
    let (d, b) = (j / LIMB_BITS, j % LIMB_BITS);
    if b == 0 {
        for i in (d..DIGS).rev() {
            r[i] ^= a[i - d];
        }
    } else {
        for i in (d..DIGS).rev() {
            let mut limb = a[i - d] << b;
            if i > d {
                limb |= a[i - d - 1] >> (LIMB_BITS - b);
            }
            r[i] ^= limb;
        }
    }
}
