//! Sign-magnitude multi-precision integers.

use crate::digits::Digits;
use crate::error::{Error, Result};
use crate::limb::{adc, sbb, Limb, WideLimb, LIMB_BITS};
use crate::uint;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign};
use rand_core::RngCore;

/// Karatsuba recursion depth for magnitude multiplication; zero falls back
/// to the schoolbook product everywhere.
const KARATSUBA_DEPTH: usize = 1;

/// Operand size, in limbs, below which Karatsuba splitting is not applied.
const KARATSUBA_CUTOFF: usize = 24;

/// Sign of an [`Int`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign {
    /// Non-negative. Zero is always positive.
    Positive,
    /// Strictly negative.
    Negative,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Arbitrary-precision signed integer in sign-magnitude representation.
///
/// The magnitude is a little-endian digit vector with no high zero limbs;
/// zero has an empty magnitude and positive sign. Sign-magnitude (rather
/// than two's complement) is load-bearing: the recoding operations in
/// [`crate::rec`] are defined over magnitudes.
#[derive(Clone, Eq, PartialEq)]
pub struct Int {
    sign: Sign,
    mag: Digits,
}

impl Int {
    /// The value 0.
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            mag: Digits::new(),
        }
    }

    /// The value 1.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Converts from an unsigned 64-bit value.
    pub fn from_u64(v: u64) -> Self {
        let mut mag = Digits::zeroed(8 / (LIMB_BITS / 8));
        for (i, limb) in mag.as_mut_slice().iter_mut().enumerate() {
            *limb = (v >> (i * LIMB_BITS)) as Limb;
        }
        let mut ret = Self {
            sign: Sign::Positive,
            mag,
        };
        ret.normalize();
        ret
    }

    /// Converts from a signed 64-bit value.
    pub fn from_i64(v: i64) -> Self {
        let mut ret = Self::from_u64(v.unsigned_abs());
        if v < 0 {
            ret.sign = Sign::Negative;
        }
        ret
    }

    /// Parses a big-endian hex string, with an optional `-` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if digits.is_empty() {
            return Err(Error::InvalidInput);
        }
        let nibbles = digits.len();
        let mut mag = Digits::zeroed(nibbles.div_ceil(LIMB_BITS / 4));
        for (i, c) in digits.bytes().rev().enumerate() {
            let v = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => return Err(Error::InvalidInput),
            } as Limb;
            mag.as_mut_slice()[i / (LIMB_BITS / 4)] |= v << (4 * (i % (LIMB_BITS / 4)));
        }
        let mut ret = Self { sign, mag };
        ret.normalize();
        Ok(ret)
    }

    /// Converts from little-endian limbs as a non-negative integer.
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        Self::from_parts(Sign::Positive, Digits::from_slice(limbs))
    }

    /// Parses a big-endian byte string as a non-negative integer.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut mag = Digits::zeroed(bytes.len().div_ceil(LIMB_BITS / 8));
        for (i, b) in bytes.iter().rev().enumerate() {
            mag.as_mut_slice()[i / (LIMB_BITS / 8)] |= (*b as Limb) << (8 * (i % (LIMB_BITS / 8)));
        }
        let mut ret = Self {
            sign: Sign::Positive,
            mag,
        };
        ret.normalize();
        ret
    }

    /// Uniformly random non-negative integer with at most `bits` bits.
    pub fn random(rng: &mut impl RngCore, bits: usize) -> Self {
        let limbs = bits.div_ceil(LIMB_BITS);
        let mut mag = Digits::zeroed(limbs);
        for limb in mag.as_mut_slice().iter_mut() {
            let mut buf = [0u8; LIMB_BITS / 8];
            rng.fill_bytes(&mut buf);
            *limb = Limb::from_le_bytes(buf);
        }
        let top = bits % LIMB_BITS;
        if top != 0 {
            let slice = mag.as_mut_slice();
            slice[limbs - 1] &= ((1 as Limb) << top) - 1;
        }
        let mut ret = Self {
            sign: Sign::Positive,
            mag,
        };
        ret.normalize();
        ret
    }

    fn from_parts(sign: Sign, mag: Digits) -> Self {
        let mut ret = Self { sign, mag };
        ret.normalize();
        ret
    }

    fn normalize(&mut self) {
        self.mag.normalize();
        if self.mag.len() == 0 {
            self.sign = Sign::Positive;
        }
    }

    /// Magnitude limbs, little-endian, without high zeros.
    pub fn limbs(&self) -> &[Limb] {
        self.mag.as_slice()
    }

    /// The sign of the value; zero is positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 0
    }

    /// Whether the value is odd.
    pub fn is_odd(&self) -> bool {
        self.limbs().first().map_or(false, |l| l & 1 == 1)
    }

    /// Whether the value is even (zero is even).
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Bit length of the magnitude (0 for zero).
    pub fn bits(&self) -> usize {
        uint::bits(self.limbs())
    }

    /// Reads magnitude bit `i` (0 or 1).
    pub fn bit(&self, i: usize) -> u8 {
        uint::bit(self.limbs(), i)
    }

    /// The low `w` magnitude bits as a word. Requires `w` strictly less
    /// than the limb width.
    pub(crate) fn low_bits(&self, w: u32) -> Limb {
        debug_assert!((w as usize) < LIMB_BITS);
        self.limbs().first().copied().unwrap_or(0) & ((1 << w) - 1)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            mag: self.mag.clone(),
        }
    }

    /// Magnitude comparison, ignoring signs.
    pub fn cmp_mag(&self, other: &Self) -> Ordering {
        uint::cmp(self.limbs(), other.limbs())
    }

    fn add_mag(a: &Self, b: &Self, sign: Sign) -> Self {
        let len = a.mag.len().max(b.mag.len()) + 1;
        let mut mag = Digits::zeroed(len);
        uint::add(mag.as_mut_slice(), a.limbs(), b.limbs());
        Self::from_parts(sign, mag)
    }

    /// `|a| - |b|` with `|a| >= |b|`.
    fn sub_mag(a: &Self, b: &Self, sign: Sign) -> Self {
        let mut mag = Digits::zeroed(a.mag.len());
        let borrow = uint::sub(mag.as_mut_slice(), a.limbs(), b.limbs());
        debug_assert_eq!(borrow, 0);
        Self::from_parts(sign, mag)
    }

    fn add_signed(a: &Self, b: &Self) -> Self {
        if a.sign == b.sign {
            Self::add_mag(a, b, a.sign)
        } else {
            match a.cmp_mag(b) {
                Ordering::Less => Self::sub_mag(b, a, b.sign),
                Ordering::Equal => Self::zero(),
                Ordering::Greater => Self::sub_mag(a, b, a.sign),
            }
        }
    }

    /// Product of magnitudes with Karatsuba splitting above the configured
    /// cutoff.
    fn mul_mag(a: &[Limb], b: &[Limb], out: &mut Digits) {
        out.resize(a.len() + b.len());
        mul_rec(out.as_mut_slice(), a, b, KARATSUBA_DEPTH);
    }

    /// The square of the value.
    pub fn sqr(&self) -> Self {
        self * self
    }

    /// Left shift of the magnitude; the sign is preserved.
    pub fn shl(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut mag = Digits::zeroed(self.mag.len() + n.div_ceil(LIMB_BITS));
        mag.as_mut_slice()[..self.mag.len()].copy_from_slice(self.limbs());
        uint::shl_assign(mag.as_mut_slice(), n);
        Self::from_parts(self.sign, mag)
    }

    /// Right shift of the magnitude (truncating toward zero); the sign is
    /// preserved.
    pub fn shr(&self, n: usize) -> Self {
        let mut mag = self.mag.clone();
        uint::shr_assign(mag.as_mut_slice(), n);
        Self::from_parts(self.sign, mag)
    }

    /// Halves an even value exactly.
    pub(crate) fn half_exact(&self) -> Self {
        debug_assert!(self.is_even());
        self.shr(1)
    }

    /// Truncated division: returns `(q, r)` with `self = q * d + r`,
    /// `|r| < |d|`, `r` carrying the sign of `self`.
    ///
    /// Fails with [`Error::InvalidInput`] when `d` is zero.
    pub fn div_rem(&self, d: &Self) -> Result<(Self, Self)> {
        if d.is_zero() {
            return Err(Error::InvalidInput);
        }
        let (q_mag, r_mag) = div_rem_mag(self.limbs(), d.limbs());
        let q_sign = if self.sign == d.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Ok((
            Self::from_parts(q_sign, q_mag),
            Self::from_parts(self.sign, r_mag),
        ))
    }

    /// Non-negative remainder in `[0, |m|)`.
    pub fn modulo(&self, m: &Self) -> Result<Self> {
        let (_, r) = self.div_rem(m)?;
        if r.is_negative() {
            Ok(Self::sub_mag(&m.abs(), &r.abs(), Sign::Positive))
        } else {
            Ok(r)
        }
    }

    /// Floored division quotient (rounds toward negative infinity).
    pub fn div_floor(&self, d: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(d)?;
        if !r.is_zero() && (self.sign != d.sign) {
            Ok(&q - &Int::one())
        } else {
            Ok(q)
        }
    }

    /// Greatest common divisor of the magnitudes (binary method).
    pub fn gcd(&self, other: &Self) -> Self {
        let mut u = self.abs();
        let mut v = other.abs();
        if u.is_zero() {
            return v;
        }
        if v.is_zero() {
            return u;
        }
        let mut shift = 0;
        while u.is_even() && v.is_even() {
            u = u.shr(1);
            v = v.shr(1);
            shift += 1;
        }
        while u.is_even() {
            u = u.shr(1);
        }
        loop {
            while v.is_even() {
                v = v.shr(1);
            }
            if u.cmp_mag(&v) == Ordering::Greater {
                core::mem::swap(&mut u, &mut v);
            }
            v = Self::sub_mag(&v, &u, Sign::Positive);
            if v.is_zero() {
                break;
            }
        }
        u.shl(shift)
    }
}

/// Recursive magnitude product; splits while depth remains and the operands
/// are large enough, otherwise falls through to the schoolbook method.
fn mul_rec(r: &mut [Limb], a: &[Limb], b: &[Limb], depth: usize) {
    let h = a.len().max(b.len()).div_ceil(2);
    if depth == 0
        || a.len().min(b.len()) <= h
        || a.len().max(b.len()) < KARATSUBA_CUTOFF
        || h > crate::digits::MAX_DIGITS / 2
    {
        uint::mul_schoolbook(r, a, b);
        return;
    }

    let (a0, a1) = a.split_at(h);
    let (b0, b1) = b.split_at(h);

    // r = a0*b0 + a1*b1 * B^2h
    for limb in r.iter_mut() {
        *limb = 0;
    }
    mul_rec(&mut r[..2 * h], a0, b0, depth - 1);
    mul_rec(&mut r[2 * h..], a1, b1, depth - 1);

    // Middle term (a0+a1)(b0+b1) - a0*b0 - a1*b1, accumulated at offset h.
    let mut s1 = [0 as Limb; crate::digits::MAX_DIGITS / 2 + 1];
    let mut s2 = [0 as Limb; crate::digits::MAX_DIGITS / 2 + 1];
    let s1 = &mut s1[..h + 1];
    let s2 = &mut s2[..h + 1];
    uint::add(s1, a0, a1);
    uint::add(s2, b0, b1);

    let mut z1 = [0 as Limb; crate::digits::MAX_DIGITS + 2];
    let z1 = &mut z1[..2 * (h + 1)];
    mul_rec(z1, s1, s2, depth - 1);
    let borrow = uint::sub_assign(z1, &r[..2 * h]);
    debug_assert_eq!(borrow, 0);
    let borrow = uint::sub_assign(z1, &r[2 * h..]);
    debug_assert_eq!(borrow, 0);

    let carry = uint::add_assign(&mut r[h..], &z1[..uint::used(z1)]);
    debug_assert_eq!(carry, 0);
}

/// Magnitude division via Knuth's Algorithm D (with a short-division path
/// for single-limb divisors). Returns `(quotient, remainder)`.
fn div_rem_mag(a: &[Limb], b: &[Limb]) -> (Digits, Digits) {
    let m = uint::used(a);
    let n = uint::used(b);
    debug_assert!(n > 0);

    if uint::cmp(a, b) == Ordering::Less {
        return (Digits::new(), Digits::from_slice(&a[..m]));
    }

    if n == 1 {
        let mut q = Digits::from_slice(&a[..m]);
        let rem = uint::div_rem_limb(q.as_mut_slice(), b[0]);
        let mut r = Digits::zeroed(1);
        r.as_mut_slice()[0] = rem;
        return (q, r);
    }

    // Normalize so the divisor's top bit is set.
    let shift = b[n - 1].leading_zeros() as usize;
    let mut un = Digits::zeroed(m + 1);
    un.as_mut_slice()[..m].copy_from_slice(&a[..m]);
    uint::shl_assign(un.as_mut_slice(), shift);
    let mut vn = Digits::from_slice(&b[..n]);
    uint::shl_assign(vn.as_mut_slice(), shift);

    let un = un.as_mut_slice();
    let vn = vn.as_slice();
    let v1 = vn[n - 1];
    let v2 = vn[n - 2];
    let base = (1 as WideLimb) << LIMB_BITS;

    let mut q = Digits::zeroed(m - n + 1);
    for j in (0..=m - n).rev() {
        let numerator = ((un[j + n] as WideLimb) << LIMB_BITS) | (un[j + n - 1] as WideLimb);
        let mut qhat = numerator / (v1 as WideLimb);
        let mut rhat = numerator % (v1 as WideLimb);

        while qhat >= base
            || qhat * (v2 as WideLimb) > ((rhat << LIMB_BITS) | (un[j + n - 2] as WideLimb))
        {
            qhat -= 1;
            rhat += v1 as WideLimb;
            if rhat >= base {
                break;
            }
        }

        // Multiply and subtract qhat * vn from un[j..=j+n].
        let mut qhat = qhat as Limb;
        let mut carry: Limb = 0;
        let mut borrow: Limb = 0;
        for i in 0..n {
            let t = (qhat as WideLimb) * (vn[i] as WideLimb) + (carry as WideLimb);
            carry = (t >> LIMB_BITS) as Limb;
            let (w, br) = sbb(un[j + i], t as Limb, borrow);
            un[j + i] = w;
            borrow = br;
        }
        let (w, br) = sbb(un[j + n], carry, borrow);
        un[j + n] = w;

        // Rare over-estimate: add the divisor back.
        if br != 0 {
            qhat -= 1;
            let mut c: Limb = 0;
            for i in 0..n {
                let (w, cc) = adc(un[j + i], vn[i], c);
                un[j + i] = w;
                c = cc;
            }
            un[j + n] = un[j + n].wrapping_add(c);
        }
        q.as_mut_slice()[j] = qhat;
    }

    let mut r = Digits::from_slice(&un[..n]);
    uint::shr_assign(r.as_mut_slice(), shift);
    (q, r)
}

//
// Comparison and ordering
//

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_mag(other),
            (Sign::Negative, Sign::Negative) => other.cmp_mag(self),
        }
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//
// Arithmetic operators
//

impl Add for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        Int::add_signed(self, rhs)
    }
}

impl Sub for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        let mut flipped = rhs.clone();
        if !flipped.is_zero() {
            flipped.sign = flipped.sign.flip();
        }
        Int::add_signed(self, &flipped)
    }
}

impl Mul for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        if self.is_zero() || rhs.is_zero() {
            return Int::zero();
        }
        let mut mag = Digits::new();
        Int::mul_mag(self.limbs(), rhs.limbs(), &mut mag);
        let sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Int::from_parts(sign, mag)
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        let mut ret = self.clone();
        if !ret.is_zero() {
            ret.sign = ret.sign.flip();
        }
        ret
    }
}

macro_rules! forward_value_ops {
    ($($op:ident :: $func:ident),+) => {$(
        impl $op for Int {
            type Output = Int;

            fn $func(self, rhs: Int) -> Int {
                $op::$func(&self, &rhs)
            }
        }

        impl $op<&Int> for Int {
            type Output = Int;

            fn $func(self, rhs: &Int) -> Int {
                $op::$func(&self, rhs)
            }
        }
    )+};
}

forward_value_ops!(Add::add, Sub::sub, Mul::mul);

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Int {
        -&self
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, rhs: &Int) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Int> for Int {
    fn mul_assign(&mut self, rhs: &Int) {
        *self = &*self * rhs;
    }
}

impl Shl<usize> for &Int {
    type Output = Int;

    fn shl(self, n: usize) -> Int {
        Int::shl(self, n)
    }
}

impl Shr<usize> for &Int {
    type Output = Int;

    fn shr(self, n: usize) -> Int {
        Int::shr(self, n)
    }
}

//
// Formatting
//

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int({self:x})")
    }
}

impl fmt::LowerHex for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        let limbs = self.limbs();
        if limbs.is_empty() {
            return f.write_str("0");
        }
        write!(f, "{:x}", limbs[limbs.len() - 1])?;
        for limb in limbs[..limbs.len() - 1].iter().rev() {
            write!(f, "{:0width$x}", limb, width = LIMB_BITS / 4)?;
        }
        Ok(())
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl From<u64> for Int {
    fn from(v: u64) -> Int {
        Int::from_u64(v)
    }
}

impl From<i64> for Int {
    fn from(v: i64) -> Int {
        Int::from_i64(v)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use num_bigint::BigInt;
    use rand_core::SeedableRng;
    use std::format;
    use std::string::String;

    fn to_num(x: &Int) -> BigInt {
        BigInt::parse_bytes(hex_string(x).as_bytes(), 16).unwrap()
    }

    fn hex_string(x: &Int) -> String {
        format!("{x:x}")
    }

    #[test]
    fn hex_round_trip() {
        let x = Int::from_hex("deadbeef0123456789abcdef").unwrap();
        assert_eq!(hex_string(&x), "deadbeef0123456789abcdef");
        let y = Int::from_hex("-ff").unwrap();
        assert_eq!(hex_string(&y), "-ff");
    }

    #[test]
    fn signed_addition_rules() {
        let a = Int::from_i64(100);
        let b = Int::from_i64(-250);
        assert_eq!(&a + &b, Int::from_i64(-150));
        assert_eq!(&b + &a, Int::from_i64(-150));
        assert_eq!(&a - &b, Int::from_i64(350));
        assert_eq!(&b - &a, Int::from_i64(-350));
        assert_eq!(&a + &(-&a), Int::zero());
        assert!(!(&a + &(-&a)).is_negative());
    }

    #[test]
    fn mul_matches_model() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        for bits in [5usize, 64, 65, 192, 700, 2000] {
            let a = Int::random(&mut rng, bits);
            let b = Int::random(&mut rng, bits / 2 + 1);
            assert_eq!(to_num(&(&a * &b)), to_num(&a) * to_num(&b));
        }
    }

    #[test]
    fn div_rem_matches_model() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(2);
        for bits in [64usize, 100, 256, 511, 1024] {
            let a = Int::random(&mut rng, bits);
            let b = Int::random(&mut rng, bits / 3 + 2);
            if b.is_zero() {
                continue;
            }
            let (q, r) = a.div_rem(&b).unwrap();
            let (nq, nr) = (to_num(&a) / to_num(&b), to_num(&a) % to_num(&b));
            assert_eq!(to_num(&q), nq);
            assert_eq!(to_num(&r), nr);
            assert_eq!(&(&q * &b) + &r, a);
        }
    }

    #[test]
    fn div_rem_signs() {
        let a = Int::from_i64(-7);
        let b = Int::from_i64(2);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, Int::from_i64(-3));
        assert_eq!(r, Int::from_i64(-1));
        assert_eq!(a.modulo(&b).unwrap(), Int::from_i64(1));
        assert_eq!(a.div_floor(&b).unwrap(), Int::from_i64(-4));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(
            Int::from_u64(5).div_rem(&Int::zero()).unwrap_err(),
            Error::InvalidInput
        );
    }

    #[test]
    fn gcd_matches_model() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
        for _ in 0..8 {
            let a = Int::random(&mut rng, 200);
            let b = Int::random(&mut rng, 150);
            let g = a.gcd(&b);
            // Euclid on the num-bigint model
            let (mut x, mut y) = (to_num(&a), to_num(&b));
            while y != BigInt::from(0) {
                let r = &x % &y;
                x = y;
                y = r;
            }
            assert_eq!(to_num(&g), x);
        }
    }

    #[test]
    fn shifts() {
        let x = Int::from_hex("123456789abcdef0").unwrap();
        assert_eq!(x.shl(68).shr(68), x);
        assert_eq!(Int::from_u64(1).shl(200).bits(), 201);
    }

    #[test]
    fn byte_parsing() {
        let x = Int::from_be_bytes(&hex_literal::hex!("00deadbeef"));
        assert_eq!(x, Int::from_u64(0xdead_beef));
        assert_eq!(Int::from_be_bytes(&[]), Int::zero());
    }

    proptest::proptest! {
        #[test]
        fn ring_laws(a: u64, b: u64, c: u64) {
            let (x, y, z) = (Int::from_u64(a), Int::from_u64(b), Int::from_u64(c));
            proptest::prop_assert_eq!(&x + &y, &y + &x);
            proptest::prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
            proptest::prop_assert_eq!(&x * &y, &y * &x);
            proptest::prop_assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
        }
    }
}
