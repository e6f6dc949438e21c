//! Binary field elements.

use crate::arith;
use crate::params::BinFieldParams;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use mpint::limb::{Limb, LIMB_BITS};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Element of GF(2^m), a polynomial over GF(2) reduced modulo the field
/// polynomial of `P`.
///
/// Canonical form keeps every bit at position `m` and above clear;
/// constructors and operations maintain this.
pub struct FieldElement<P, const DIGS: usize>
where
    P: BinFieldParams<DIGS>,
{
    limbs: [Limb; DIGS],
    _params: PhantomData<P>,
}

impl<P, const DIGS: usize> FieldElement<P, DIGS>
where
    P: BinFieldParams<DIGS>,
{
    /// Additive identity.
    pub const ZERO: Self = Self::from_limbs_unchecked([0; DIGS]);

    /// Multiplicative identity.
    pub const ONE: Self = {
        let mut one = [0; DIGS];
        one[0] = 1;
        Self::from_limbs_unchecked(one)
    };

    /// The polynomial `z`.
    pub const Z: Self = {
        let mut z = [0; DIGS];
        z[0] = 2;
        Self::from_limbs_unchecked(z)
    };

    /// Wraps limbs assumed canonical (degree below `m`).
    pub const fn from_limbs_unchecked(limbs: [Limb; DIGS]) -> Self {
        Self {
            limbs,
            _params: PhantomData,
        }
    }

    /// Converts limbs, checking that the degree is below `m`.
    pub fn from_limbs(limbs: [Limb; DIGS]) -> CtOption<Self> {
        let canonical = mpint::uint::bits(&limbs) <= P::M as usize;
        CtOption::new(Self::from_limbs_unchecked(limbs), Choice::from(canonical as u8))
    }

    /// Parses a canonical big-endian hex string.
    ///
    /// # Panics
    ///
    /// On malformed hex or a polynomial of degree `m` or higher.
    pub fn from_hex_vartime(hex: &str) -> Self {
        let limbs = crate::params::from_be_hex::<DIGS>(hex);
        assert!(
            mpint::uint::bits(&limbs) <= P::M as usize,
            "polynomial degree overflows the field"
        );
        Self::from_limbs_unchecked(limbs)
    }

    /// Borrows the limb representation.
    pub const fn as_limbs(&self) -> &[Limb; DIGS] {
        &self.limbs
    }

    /// Uniformly random field element.
    pub fn random(rng: &mut impl RngCore) -> Self {
        let mut limbs = [0; DIGS];
        for limb in limbs.iter_mut() {
            let mut buf = [0u8; LIMB_BITS / 8];
            rng.fill_bytes(&mut buf);
            *limb = Limb::from_le_bytes(buf);
        }
        // Clear everything at and above bit m.
        let top = P::M as usize / LIMB_BITS;
        let mbits = P::M as usize % LIMB_BITS;
        if mbits != 0 {
            limbs[top] &= (1 << mbits) - 1;
        }
        for limb in limbs.iter_mut().skip(top + usize::from(mbits != 0)) {
            *limb = 0;
        }
        Self::from_limbs_unchecked(limbs)
    }

    /// Whether the element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Degree of the polynomial plus one (0 for the zero element).
    pub fn bits(&self) -> usize {
        mpint::uint::bits(&self.limbs)
    }

    /// Reads coefficient `i`.
    pub fn bit(&self, i: usize) -> u8 {
        mpint::uint::bit(&self.limbs, i)
    }

    /// Adds elements (coefficient-wise XOR). Subtraction is identical.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut limbs = [0; DIGS];
        for i in 0..DIGS {
            limbs[i] = self.limbs[i] ^ rhs.limbs[i];
        }
        Self::from_limbs_unchecked(limbs)
    }

    /// Multiplies elements: comb product then polynomial reduction.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let wide = arith::mul_wide(&self.limbs, &rhs.limbs);
        Self::from_limbs_unchecked(arith::reduce(wide, P::M, P::POLY))
    }

    /// Squares the element via the interleaving table.
    #[must_use]
    pub fn square(&self) -> Self {
        let wide = arith::sqr_wide(&self.limbs);
        Self::from_limbs_unchecked(arith::reduce(wide, P::M, P::POLY))
    }

    /// `self^(2^n)` by repeated squaring.
    #[must_use]
    pub fn sqn(&self, n: usize) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Square root: the unique `r` with `r² = self`.
    ///
    /// Splits the coefficients by parity and multiplies the odd part by
    /// the precomputed `√z`.
    pub fn sqrt(&self) -> Self {
        let mut even = [0; DIGS];
        let mut odd = [0; DIGS];
        for i in 0..P::M as usize {
            let bit = self.bit(i) as Limb;
            let dst = if i % 2 == 0 { &mut even } else { &mut odd };
            let j = i / 2;
            dst[j / LIMB_BITS] |= bit << (j % LIMB_BITS);
        }
        let even = Self::from_limbs_unchecked(even);
        let odd = Self::from_limbs_unchecked(odd);
        even.add(&odd.multiply(&Self::from_limbs_unchecked(P::SQRT_Z)))
    }

    /// Trace `Tr(a) = Σ a^(2^i)`, which is 0 or 1.
    pub fn trace(&self) -> u8 {
        let mut t = 0;
        for &i in P::TRACE_BITS {
            t ^= self.bit(i as usize);
        }
        t
    }

    /// Half-trace `H(a) = Σ a^(2^(2i))` for odd `m`: solves
    /// `λ² + λ = self` when `Tr(self) = 0`.
    pub fn half_trace(&self) -> Self {
        let mut acc = *self;
        let mut t = *self;
        for _ in 0..(P::M as usize - 1) / 2 {
            t = t.square().square();
            acc = acc.add(&t);
        }
        acc
    }

    /// Masked swap of two elements.
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        let mask = (choice.unwrap_u8() as Limb).wrapping_neg();
        for i in 0..DIGS {
            let t = mask & (a.limbs[i] ^ b.limbs[i]);
            a.limbs[i] ^= t;
            b.limbs[i] ^= t;
        }
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> Clone for FieldElement<P, DIGS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> Copy for FieldElement<P, DIGS> {}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> Default for FieldElement<P, DIGS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> ConditionallySelectable for FieldElement<P, DIGS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0; DIGS];
        for i in 0..DIGS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self::from_limbs_unchecked(limbs)
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> ConstantTimeEq for FieldElement<P, DIGS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1);
        for i in 0..DIGS {
            acc &= self.limbs[i].ct_eq(&other.limbs[i]);
        }
        acc
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> Eq for FieldElement<P, DIGS> {}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> PartialEq for FieldElement<P, DIGS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

//
// Arithmetic operator impls. In characteristic two, addition, subtraction
// and negation coincide.
//

macro_rules! binfield_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<P: BinFieldParams<DIGS>, const DIGS: usize> $op for FieldElement<P, DIGS> {
            type Output = FieldElement<P, DIGS>;

            #[inline]
            fn $func(self, rhs: FieldElement<P, DIGS>) -> FieldElement<P, DIGS> {
                <FieldElement<P, DIGS>>::$inner_func(&self, &rhs)
            }
        }

        impl<P: BinFieldParams<DIGS>, const DIGS: usize> $op<&Self> for FieldElement<P, DIGS> {
            type Output = FieldElement<P, DIGS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<P, DIGS>) -> FieldElement<P, DIGS> {
                <FieldElement<P, DIGS>>::$inner_func(&self, rhs)
            }
        }

        impl<P: BinFieldParams<DIGS>, const DIGS: usize> $op<&FieldElement<P, DIGS>>
            for &FieldElement<P, DIGS>
        {
            type Output = FieldElement<P, DIGS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<P, DIGS>) -> FieldElement<P, DIGS> {
                <FieldElement<P, DIGS>>::$inner_func(self, rhs)
            }
        }
    };
}

binfield_op!(Add, add, add);
binfield_op!(Sub, sub, add);
binfield_op!(Mul, mul, multiply);

impl<P: BinFieldParams<DIGS>, const DIGS: usize> AddAssign for FieldElement<P, DIGS> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = Self::add(self, &other);
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> SubAssign for FieldElement<P, DIGS> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = Self::add(self, &other);
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> MulAssign for FieldElement<P, DIGS> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = Self::multiply(self, &other);
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> Neg for FieldElement<P, DIGS> {
    type Output = FieldElement<P, DIGS>;

    #[inline]
    fn neg(self) -> FieldElement<P, DIGS> {
        self
    }
}

//
// Formatting
//

impl<P: BinFieldParams<DIGS>, const DIGS: usize> fmt::Debug for FieldElement<P, DIGS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:0width$x}", limb, width = LIMB_BITS / 4)?;
        }
        f.write_str(")")
    }
}

impl<P: BinFieldParams<DIGS>, const DIGS: usize> fmt::Display for FieldElement<P, DIGS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "zeroize")]
impl<P: BinFieldParams<DIGS>, const DIGS: usize> zeroize::DefaultIsZeroes
    for FieldElement<P, DIGS>
{
}
