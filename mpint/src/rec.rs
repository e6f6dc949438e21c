//! Scalar recoding for elliptic-curve point multiplication.
//!
//! All routines write signed (or unsigned, for [`windowed`]) digit
//! sequences into caller-provided buffers, least significant digit first,
//! and return the number of digits produced. Buffers sized
//! `k.bits() + 1` (plus a small slack for the τ-adic forms) are always
//! sufficient; an undersized buffer is a caller bug.

use crate::error::{Error, Result};
use crate::int::Int;
use crate::limb::Limb;

/// Maps `v` in `[0, 2^w)` into the symmetric residue range
/// `(-2^(w-1), 2^(w-1)]`.
fn mods(v: Limb, w: u32) -> i64 {
    if v > (1 << (w - 1)) {
        v as i64 - (1i64 << w)
    } else {
        v as i64
    }
}

/// Signed value of `x mod 2^w` in `[0, 2^w)`.
fn low_mod_pow2(x: &Int, w: u32) -> Limb {
    let low = x.low_bits(w);
    if x.is_negative() {
        low.wrapping_neg() & ((1 << w) - 1)
    } else {
        low
    }
}

/// Width-`w` non-adjacent form of a non-negative integer.
///
/// Each digit is zero or odd with magnitude below `2^(w-1)`, and any window
/// of `w` consecutive digits holds at most one nonzero entry. Returns the
/// digit count, at most `k.bits() + 1`.
pub fn naf(k: &Int, width: u32, code: &mut [i8]) -> Result<usize> {
    if k.is_negative() || !(2..=8).contains(&width) {
        return Err(Error::InvalidInput);
    }
    let mut k = k.clone();
    let mut len = 0;
    while !k.is_zero() {
        let digit = if k.is_odd() {
            let d = mods(k.low_bits(width), width);
            k -= &Int::from_i64(d);
            d
        } else {
            0
        };
        code[len] = digit as i8;
        len += 1;
        k = k.shr(1);
    }
    Ok(len)
}

/// Regular (fixed-pattern) width-`w` signed recoding of an odd positive
/// integer, suitable for constant-time multiplication.
///
/// Emits exactly `⌈bits/(w-1)⌉ + 1` odd digits `d` with `|d| < 2^(w-1)`,
/// one every `w-1` positions, regardless of the value of `k`; only the
/// digit *values* depend on the scalar.
pub fn regular(k: &Int, bits: usize, width: u32, code: &mut [i8]) -> Result<usize> {
    if k.is_negative() || !k.is_odd() || !(2..=8).contains(&width) || k.bits() > bits {
        return Err(Error::InvalidInput);
    }
    let digits = bits.div_ceil(width as usize - 1);
    let mut t = k.clone();
    for slot in code.iter_mut().take(digits) {
        let d = t.low_bits(width) as i64 - (1i64 << (width - 1));
        *slot = d as i8;
        t -= &Int::from_i64(d);
        t = t.shr(width as usize - 1);
    }
    if t.bits() >= width as usize {
        return Err(Error::Internal);
    }
    code[digits] = t.low_bits(width) as i8;
    Ok(digits + 1)
}

/// Unsigned fixed-radix decomposition of a non-negative integer into
/// base-`2^w` digits.
pub fn windowed(k: &Int, width: u32, code: &mut [u8]) -> Result<usize> {
    if k.is_negative() || !(1..=8).contains(&width) {
        return Err(Error::InvalidInput);
    }
    let mut k = k.clone();
    let mut len = 0;
    while !k.is_zero() {
        code[len] = k.low_bits(width) as u8;
        len += 1;
        k = k.shr(width as usize);
    }
    Ok(len)
}

/// Joint Sparse Form of two non-negative integers.
///
/// Produces pairs `(u_i, v_i)` with entries in `{-1, 0, 1}` such that
/// `k = Σ u_i 2^i` and `l = Σ v_i 2^i`, with the Solinas minimal joint
/// weight. Returns the column count, at most `max(bits) + 1`.
pub fn jsf(k: &Int, l: &Int, code: &mut [(i8, i8)]) -> Result<usize> {
    if k.is_negative() || l.is_negative() {
        return Err(Error::InvalidInput);
    }
    let mut l0 = k.clone();
    let mut l1 = l.clone();
    let mut len = 0;
    while !l0.is_zero() || !l1.is_zero() {
        let u = jsf_digit(&l0, &l1);
        let v = jsf_digit(&l1, &l0);
        code[len] = (u as i8, v as i8);
        len += 1;
        l0 = (&l0 - &Int::from_i64(u)).half_exact();
        l1 = (&l1 - &Int::from_i64(v)).half_exact();
    }
    Ok(len)
}

/// One JSF digit for `a`, steered by the companion scalar `b`.
fn jsf_digit(a: &Int, b: &Int) -> i64 {
    if a.is_even() {
        return 0;
    }
    let mut u = 2 - (a.low_bits(2) as i64);
    let m8 = a.low_bits(3);
    if (m8 == 3 || m8 == 5) && b.low_bits(2) == 2 {
        u = -u;
    }
    u
}

/// Element of `Z[τ]` with small coefficients, as `(a, b)` for `a + b·τ`.
type Ztau = (i64, i64);

/// `τ^w` in `Z[τ]`, from `τ² = μτ - 2`.
fn tau_pow(width: u32, mu: i64) -> Ztau {
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 1..width {
        let (na, nb) = (-2 * b, a + mu * b);
        a = na;
        b = nb;
    }
    (a, b)
}

/// Rounded division by `2^w`, ties toward positive infinity.
fn round_div_pow2(num: i64, width: u32) -> i64 {
    (num + (1i64 << (width - 1))).div_euclid(1i64 << width)
}

/// Minimal-norm representative `α_u ≡ u (mod τ^w)` for odd `u`, obtained
/// by rounded division in `Z[τ]`.
fn alpha(u: i64, width: u32, mu: i64) -> Ztau {
    let (aw, bw) = tau_pow(width, mu);
    let q0 = round_div_pow2(u * (aw + mu * bw), width);
    let q1 = round_div_pow2(-u * bw, width);
    let tq0 = aw * q0 - 2 * bw * q1;
    let tq1 = aw * q1 + bw * q0 + mu * bw * q1;
    (u - tq0, -tq1)
}

/// `τ mod 2^w` as an integer: `t_w = 2 U_{w-1} U_w^{-1} mod 2^w`, with `U`
/// the Lucas sequence `U_0 = 0, U_1 = 1, U_{i+1} = μU_i - 2U_{i-1}`.
fn tau_mod_pow2(width: u32, mu: i64) -> Limb {
    let modulus = 1i64 << width;
    let (mut u_prev, mut u_cur) = (0i64, 1i64);
    for _ in 1..width {
        let next = mu * u_cur - 2 * u_prev;
        u_prev = u_cur;
        u_cur = next;
    }
    // U_w is odd, hence invertible mod 2^w.
    let u_w = u_cur.rem_euclid(modulus);
    let mut inv = 0i64;
    for cand in (1..modulus).step_by(2) {
        if (cand * u_w) % modulus == 1 {
            inv = cand;
            break;
        }
    }
    debug_assert!(inv != 0);
    ((2 * u_prev * inv).rem_euclid(modulus)) as Limb
}

/// Width-`w` τ-adic non-adjacent form of `k` for a Koblitz curve with
/// parameter `μ = ±1` over GF(2^m).
///
/// `k` is first partially reduced modulo `δ = (τ^m - 1)/(τ - 1)` using the
/// precomputed constants: `vm` is the Lucas number `V_m` and `(s0, s1)` are
/// the coefficients of `δ`. Digits are zero or odd with magnitude below
/// `2^(w-1)`; the expansion length is at most `m` plus a small constant, so
/// buffers of `m + 16` digits always suffice.
#[allow(clippy::too_many_arguments)]
pub fn tnaf(
    k: &Int,
    vm: &Int,
    s0: &Int,
    s1: &Int,
    mu: i8,
    m: u32,
    width: u32,
    code: &mut [i8],
) -> Result<usize> {
    if k.is_negative() || !(mu == 1 || mu == -1) || !(2..=8).contains(&width) {
        return Err(Error::InvalidInput);
    }
    let mu_i = mu as i64;

    // Group order n = (2^m + 1 - V_m) / (3 - μ).
    let h = Int::from_i64(3 - mu_i);
    let numer = &(&Int::one().shl(m as usize) + &Int::one()) - vm;
    let (n, rem) = numer.div_rem(&h)?;
    if !rem.is_zero() {
        return Err(Error::InvalidInput);
    }

    // ρ = k - δ·round(k·conj(δ)/n): exact partial reduction modulo δ.
    let sbar = s0 + &(s1 * &Int::from_i64(mu_i));
    let q0 = div_round(&(k * &sbar), &n)?;
    let q1 = div_round(&-(k * s1), &n)?;
    let d0 = &(s0 * &q0) - &(&(s1 * &q1) * &Int::from_u64(2));
    let mut d1 = &(s0 * &q1) + &(s1 * &q0);
    if mu_i == 1 {
        d1 += &(s1 * &q1);
    } else {
        d1 -= &(s1 * &q1);
    }
    let mut r0 = k - &d0;
    let mut r1 = -d1;

    // Precompute α_u = β + γτ for the odd digit values.
    let tw = tau_mod_pow2(width, mu_i);
    let mut alphas = [(0i64, 0i64); 64];
    let table = &mut alphas[..1 << (width - 2)];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = alpha((2 * i + 1) as i64, width, mu_i);
    }

    let mut len = 0;
    while !r0.is_zero() || !r1.is_zero() {
        let digit = if r0.is_odd() {
            let v = low_mod_pow2(&r0, width)
                .wrapping_add(low_mod_pow2(&r1, width).wrapping_mul(tw))
                & ((1 << width) - 1);
            let u = mods(v, width);
            let (beta, gamma) = table[(u.unsigned_abs() as usize) / 2];
            let (beta, gamma) = if u < 0 { (-beta, -gamma) } else { (beta, gamma) };
            r0 -= &Int::from_i64(beta);
            r1 -= &Int::from_i64(gamma);
            u
        } else {
            0
        };
        if len >= code.len() {
            return Err(Error::Internal);
        }
        code[len] = digit as i8;
        len += 1;

        // (r0 + r1·τ)/τ = (r1 + μ·r0/2) - (r0/2)·τ
        let half = r0.half_exact();
        r0 = if mu_i == 1 { &r1 + &half } else { &r1 - &half };
        r1 = -half;
    }
    Ok(len)
}

/// Rounded division `round(a / n)` for positive `n`, ties toward positive
/// infinity.
fn div_round(a: &Int, n: &Int) -> Result<Int> {
    (&a.shl(1) + n).div_floor(&n.shl(1))
}

/// The α-representative used for digit `u` at the given width, exposed for
/// the Koblitz table construction and slot fix-up in the curve layer.
pub fn tnaf_alpha(u: i64, width: u32, mu: i8) -> (i64, i64) {
    alpha(u, width, mu as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(code: &[i8]) -> Int {
        let mut acc = Int::zero();
        for &d in code.iter().rev() {
            acc = acc.shl(1);
            acc += &Int::from_i64(d as i64);
        }
        acc
    }

    #[test]
    fn naf_reconstructs_and_is_sparse() {
        for w in 2..=6u32 {
            let k = Int::from_hex("1f3a95c27d48e6b1205f").unwrap();
            let mut code = [0i8; 90];
            let len = naf(&k, w, &mut code).unwrap();
            assert!(len <= k.bits() + 1);
            assert_eq!(reconstruct(&code[..len]), k);
            for window in code[..len].windows(w as usize) {
                let nonzero = window.iter().filter(|&&d| d != 0).count();
                assert!(nonzero <= 1, "w={w}: {window:?}");
            }
            for &d in &code[..len] {
                assert!(d == 0 || (d % 2 != 0 && (d as i64).abs() < (1 << (w - 1))));
            }
        }
    }

    #[test]
    fn regular_recoding_has_fixed_pattern() {
        let k = Int::from_hex("3fb5").unwrap(); // odd
        let mut code = [0i8; 32];
        let len = regular(&k, 14, 4, &mut code).unwrap();
        assert_eq!(len, 14usize.div_ceil(3) + 1);
        // Every digit odd, reconstruction in radix 2^(w-1).
        let mut acc = Int::zero();
        for &d in code[..len].iter().rev() {
            acc = acc.shl(3);
            acc += &Int::from_i64(d as i64);
        }
        assert_eq!(acc, k);
        for &d in &code[..len] {
            assert!(d % 2 != 0);
        }
    }

    #[test]
    fn windowed_reconstructs() {
        let k = Int::from_hex("deadbeef").unwrap();
        let mut code = [0u8; 20];
        let len = windowed(&k, 4, &mut code).unwrap();
        let mut acc = Int::zero();
        for &d in code[..len].iter().rev() {
            acc = acc.shl(4);
            acc += &Int::from_u64(d as u64);
        }
        assert_eq!(acc, k);
    }

    #[test]
    fn jsf_reference_sequence() {
        // JSF(0xD5, 0x87) = JSF(213, 135).
        let k = Int::from_u64(0xd5);
        let l = Int::from_u64(0x87);
        let mut code = [(0i8, 0i8); 16];
        let len = jsf(&k, &l, &mut code).unwrap();
        let expected: &[(i8, i8)] = &[
            (1, -1),
            (0, 0),
            (-1, 0),
            (-1, 1),
            (0, 0),
            (-1, 0),
            (0, 0),
            (0, 1),
            (1, 0),
        ];
        assert_eq!(&code[..len], expected);
    }

    #[test]
    fn jsf_reconstructs_both_scalars() {
        let k = Int::from_hex("4c7a9ff3").unwrap();
        let l = Int::from_hex("1b2e0d55").unwrap();
        let mut code = [(0i8, 0i8); 40];
        let len = jsf(&k, &l, &mut code).unwrap();
        let mut ak = Int::zero();
        let mut al = Int::zero();
        for &(u, v) in code[..len].iter().rev() {
            ak = ak.shl(1);
            al = al.shl(1);
            ak += &Int::from_i64(u as i64);
            al += &Int::from_i64(v as i64);
        }
        assert_eq!(ak, k);
        assert_eq!(al, l);
        // No three consecutive columns are all nonzero (JSF property).
        for window in code[..len].windows(3) {
            assert!(window.iter().any(|&(u, v)| u == 0 && v == 0) || window.len() < 3);
        }
    }

    #[test]
    fn tau_constants() {
        // t_w must satisfy t² - μt + 2 ≡ 0 (mod 2^w).
        for mu in [-1i64, 1] {
            for w in 2..=6u32 {
                let t = tau_mod_pow2(w, mu) as i64;
                assert_eq!((t * t - mu * t + 2).rem_euclid(1 << w), 0, "w={w} mu={mu}");
            }
        }
    }

    #[test]
    fn alpha_is_congruent() {
        // α_u ≡ u (mod τ^w): the difference must be divisible by τ^w,
        // i.e. its norm divisible by 2^w with an integral quotient.
        for mu in [-1i64, 1] {
            for w in 2..=6u32 {
                for i in 0..(1usize << (w - 2)) {
                    let u = (2 * i + 1) as i64;
                    let (beta, gamma) = alpha(u, w, mu);
                    // norm(a + bτ) = a² + μab + 2b²
                    let (da, db) = (beta - u, gamma);
                    let norm = da * da + mu * da * db + 2 * db * db;
                    assert_eq!(norm.rem_euclid(1 << w), 0, "u={u} w={w} mu={mu}");
                }
            }
        }
    }
}
