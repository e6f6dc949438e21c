//! Prime field elements.

use crate::limbs;
use crate::params::FieldParams;
use crate::reduce::{Reduce, Wide};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use mpint::limb::{adc, Limb, LIMB_BITS};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Element of the prime field described by `P`, held as `LIMBS` limbs in
/// the internal representation of the field's reduction back-end.
///
/// Elements are always canonically reduced; every constructor enforces the
/// range and every operation preserves it.
pub struct FieldElement<P, const LIMBS: usize>
where
    P: FieldParams<LIMBS>,
{
    limbs: [Limb; LIMBS],
    _params: PhantomData<P>,
}

impl<P, const LIMBS: usize> FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Additive identity.
    pub const ZERO: Self = Self::from_internal([0; LIMBS]);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_internal(<P::Reduction as Reduce<P, LIMBS>>::ONE);

    /// Number of limbs in an element.
    pub const LIMBS: usize = LIMBS;

    /// Wraps limbs already in the back-end's internal representation.
    ///
    /// # ⚠️ Warning
    ///
    /// The value must be reduced and already in internal form (Montgomery
    /// domain for the Montgomery back-end). Violating this miscomputes
    /// silently.
    pub const fn from_internal(limbs: [Limb; LIMBS]) -> Self {
        Self {
            limbs,
            _params: PhantomData,
        }
    }

    /// Borrows the internal-representation limbs.
    pub const fn as_internal(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Converts a canonical integer below the modulus into a field
    /// element, entering the internal representation.
    ///
    /// Returns the `CtOption` equivalent of `None` when the input is not
    /// below the modulus.
    pub fn from_uint(uint: &[Limb; LIMBS]) -> CtOption<Self> {
        let in_range = Choice::from(limbs::lt(uint, &P::MODULUS) as u8);
        CtOption::new(Self::from_uint_reduced(uint), in_range)
    }

    /// Converts a canonical integer assumed to be below the modulus.
    pub(crate) fn from_uint_reduced(uint: &[Limb; LIMBS]) -> Self {
        Self::from_internal(P::Reduction::to_internal(uint))
    }

    /// Converts a small integer.
    pub fn from_u64(w: u64) -> Self {
        let mut raw = [0; LIMBS];
        #[cfg(target_pointer_width = "64")]
        {
            raw[0] = w;
        }
        #[cfg(target_pointer_width = "32")]
        {
            raw[0] = w as Limb;
            raw[1] = (w >> 32) as Limb;
        }
        Self::from_uint_reduced(&raw)
    }

    /// Parses a canonical big-endian hex string.
    ///
    /// # Panics
    ///
    /// On malformed hex, wrong length, or a value not below the modulus.
    pub fn from_hex_vartime(hex: &str) -> Self {
        let raw = limbs::from_be_hex::<LIMBS>(hex);
        assert!(limbs::lt(&raw, &P::MODULUS), "hex value overflows modulus");
        Self::from_uint_reduced(&raw)
    }

    /// Leaves the internal representation, returning the canonical value.
    pub fn to_canonical(&self) -> [Limb; LIMBS] {
        P::Reduction::from_internal(&self.limbs)
    }

    /// Uniformly random field element.
    pub fn random(rng: &mut impl RngCore) -> Self {
        loop {
            let mut raw = [0; LIMBS];
            for limb in raw.iter_mut() {
                let mut buf = [0u8; LIMB_BITS / 8];
                rng.fill_bytes(&mut buf);
                *limb = Limb::from_le_bytes(buf);
            }
            if limbs::lt(&raw, &P::MODULUS) {
                return Self::from_uint_reduced(&raw);
            }
        }
    }

    /// Whether the element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Whether the canonical value is odd.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Adds elements.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::from_internal(limbs::add_mod(&self.limbs, &rhs.limbs, &P::MODULUS))
    }

    /// Doubles the element.
    #[must_use]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtracts elements.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::from_internal(limbs::sub_mod(&self.limbs, &rhs.limbs, &P::MODULUS))
    }

    /// Negates the element.
    pub fn neg(&self) -> Self {
        Self::from_internal(limbs::sub_mod(&[0; LIMBS], &self.limbs, &P::MODULUS))
    }

    /// Halves the element: the unique `r` with `r + r = self`.
    pub fn half(&self) -> Self {
        let odd = (self.limbs[0] & 1).wrapping_neg();
        let mut sum = [0; LIMBS];
        let mut carry = 0;
        for i in 0..LIMBS {
            let (w, c) = adc(self.limbs[i], P::MODULUS[i] & odd, carry);
            sum[i] = w;
            carry = c;
        }
        for i in 0..LIMBS {
            let hi = if i + 1 < LIMBS { sum[i + 1] } else { carry };
            sum[i] = (sum[i] >> 1) | (hi << (LIMB_BITS - 1));
        }
        Self::from_internal(sum)
    }

    /// Multiplies elements through the field's reduction back-end.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let (lo, hi) = limbs::mul_wide(&self.limbs, &rhs.limbs);
        Self::from_internal(P::Reduction::reduce(&Wide { lo, hi }))
    }

    /// Squares the element.
    #[must_use]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// `self^(2^n)` by repeated squaring.
    ///
    /// Variable time in `n`; constant time once `n` is fixed.
    #[must_use]
    pub fn sqn(&self, n: usize) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// `self^exp` for a little-endian limb exponent, by left-to-right
    /// binary exponentiation.
    ///
    /// **Variable time with respect to the exponent**, which must not be a
    /// secret.
    pub fn pow_vartime(&self, exp: &[Limb]) -> Self {
        let mut i = exp.len();
        while i > 1 && exp[i - 1] == 0 {
            i -= 1;
        }
        let mut res = Self::ONE;
        loop {
            i -= 1;
            let mut j = LIMB_BITS;
            while j > 0 {
                j -= 1;
                res = res.square();
                if (exp[i] >> j) & 1 == 1 {
                    res = res.multiply(self);
                }
            }
            if i == 0 {
                return res;
            }
        }
    }

    /// `self^exp` by the sliding-window method with a small table of odd
    /// powers.
    ///
    /// **Variable time with respect to the exponent.**
    pub fn pow_slide(&self, exp: &[Limb]) -> Self {
        const WINDOW: usize = 4;
        let mut table = [Self::ONE; 1 << (WINDOW - 1)];
        table[0] = *self;
        let sq = self.square();
        for i in 1..table.len() {
            table[i] = table[i - 1].multiply(&sq);
        }

        let bits = mpint::uint::bits(exp);
        let mut res = Self::ONE;
        let mut i = bits;
        while i > 0 {
            if mpint::uint::bit(exp, i - 1) == 0 {
                res = res.square();
                i -= 1;
                continue;
            }
            // Take the longest window ending in a set bit.
            let width = WINDOW.min(i);
            let mut w = width;
            while mpint::uint::bit(exp, i - w) == 0 {
                w -= 1;
            }
            let mut val = 0usize;
            for j in 0..w {
                val = (val << 1) | mpint::uint::bit(exp, i - 1 - j) as usize;
            }
            for _ in 0..w {
                res = res.square();
            }
            res = res.multiply(&table[val >> 1]);
            i -= w;
        }
        res
    }

    /// `self^exp` by the Montgomery powering ladder.
    ///
    /// Performs the same operation sequence for every exponent of the same
    /// limb length, with masked swaps only.
    pub fn pow_monty(&self, exp: &[Limb]) -> Self {
        let mut x0 = Self::ONE;
        let mut x1 = *self;
        for i in (0..exp.len() * LIMB_BITS).rev() {
            let bit = Choice::from(((exp[i / LIMB_BITS] >> (i % LIMB_BITS)) & 1) as u8);
            Self::conditional_swap(&mut x0, &mut x1, bit);
            x1 = x0.multiply(&x1);
            x0 = x0.square();
            Self::conditional_swap(&mut x0, &mut x1, bit);
        }
        x0
    }

    /// Multiplicative inverse: `1 / self`, via Fermat's little theorem.
    ///
    /// Returns the `CtOption` equivalent of `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let inv = self.pow_vartime(&P::MODULUS_MINUS_2);
        CtOption::new(inv, !self.is_zero())
    }

    /// Simultaneous inversion of a slice by Montgomery's trick: one
    /// inversion plus three multiplications per extra element.
    ///
    /// Fails with [`mpint::Error::InvalidInput`] when any input is zero,
    /// leaving the slice unchanged.
    pub fn invert_sim(elems: &mut [Self]) -> Result<(), mpint::Error> {
        /// Largest accepted batch.
        const MAX_SIM: usize = 64;

        let n = elems.len();
        if n == 0 {
            return Ok(());
        }
        if n > MAX_SIM {
            return Err(mpint::Error::PrecisionExceeded);
        }
        if elems.iter().any(|e| bool::from(e.is_zero())) {
            return Err(mpint::Error::InvalidInput);
        }

        let mut partial = [Self::ZERO; MAX_SIM];
        partial[0] = elems[0];
        for i in 1..n {
            partial[i] = partial[i - 1].multiply(&elems[i]);
        }

        let mut u = match Option::<Self>::from(partial[n - 1].invert()) {
            Some(inv) => inv,
            None => return Err(mpint::Error::Internal),
        };

        for i in (1..n).rev() {
            let inv_i = u.multiply(&partial[i - 1]);
            u = u.multiply(&elems[i]);
            elems[i] = inv_i;
        }
        elems[0] = u;
        Ok(())
    }

    /// Masked swap of two elements.
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        let mask = (choice.unwrap_u8() as Limb).wrapping_neg();
        for i in 0..LIMBS {
            let t = mask & (a.limbs[i] ^ b.limbs[i]);
            a.limbs[i] ^= t;
            b.limbs[i] ^= t;
        }
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Clone for FieldElement<P, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Copy for FieldElement<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Default for FieldElement<P, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConditionallySelectable for FieldElement<P, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0; LIMBS];
        for i in 0..LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self::from_internal(limbs)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for FieldElement<P, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1);
        for i in 0..LIMBS {
            acc &= self.limbs[i].ct_eq(&other.limbs[i]);
        }
        acc
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Eq for FieldElement<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for FieldElement<P, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Ord for FieldElement<P, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.to_canonical(), other.to_canonical());
        for i in (0..LIMBS).rev() {
            match a[i].cmp(&b[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialOrd for FieldElement<P, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//
// Arithmetic operator impls
//

/// Emit `core::ops` wrappers for an inherent method.
macro_rules! field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op for FieldElement<P, LIMBS> {
            type Output = FieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                <FieldElement<P, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op<&Self> for FieldElement<P, LIMBS> {
            type Output = FieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                <FieldElement<P, LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op<&FieldElement<P, LIMBS>>
            for &FieldElement<P, LIMBS>
        {
            type Output = FieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                <FieldElement<P, LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

field_op!(Add, add, add);
field_op!(Sub, sub, sub);
field_op!(Mul, mul, multiply);

impl<P: FieldParams<LIMBS>, const LIMBS: usize> AddAssign for FieldElement<P, LIMBS> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = Self::add(self, &other);
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> SubAssign for FieldElement<P, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = Self::sub(self, &other);
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> MulAssign for FieldElement<P, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = Self::multiply(self, &other);
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for FieldElement<P, LIMBS> {
    type Output = FieldElement<P, LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<P, LIMBS> {
        <FieldElement<P, LIMBS>>::neg(&self)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for &FieldElement<P, LIMBS> {
    type Output = FieldElement<P, LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<P, LIMBS> {
        <FieldElement<P, LIMBS>>::neg(self)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> From<u64> for FieldElement<P, LIMBS> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

//
// Formatting
//

impl<P: FieldParams<LIMBS>, const LIMBS: usize> fmt::Debug for FieldElement<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for limb in self.to_canonical().iter().rev() {
            write!(f, "{:0width$x}", limb, width = LIMB_BITS / 4)?;
        }
        f.write_str(")")
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> fmt::Display for FieldElement<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "zeroize")]
impl<P: FieldParams<LIMBS>, const LIMBS: usize> zeroize::DefaultIsZeroes
    for FieldElement<P, LIMBS>
{
}
