//! Frobenius (τ-adic) machinery for Koblitz curves.
//!
//! On a Koblitz curve the Frobenius endomorphism τ satisfies
//! `τ² + 2 = μτ` with `μ = ±1`. Scalars are partially reduced modulo
//! `δ = (τ^m - 1)/(τ - 1)` before τ-adic recoding; this module computes
//! the reduction constants once per curve.

use crate::params::BinCurveParams;
use mpint::{Int, Result};

/// Partial-reduction constants for one Koblitz curve: the Lucas number
/// `V_m` and the coefficients of `δ = s0 + s1·τ`.
///
/// Immutable after construction and freely shareable between workers.
#[derive(Clone, Debug)]
pub struct TauContext {
    /// Lucas number `V_m` (`V_0 = 2`, `V_1 = μ`, `V_i = μV_{i-1} - 2V_{i-2}`).
    pub vm: Int,
    /// Rational part of `δ`.
    pub s0: Int,
    /// τ-part of `δ`.
    pub s1: Int,
    /// Curve μ.
    pub mu: i8,
    /// Field degree m.
    pub m: u32,
}

impl TauContext {
    /// Computes the constants for the given Koblitz curve.
    pub fn new<C: BinCurveParams<DIGS>, const DIGS: usize>() -> Self {
        let mu = C::MU;
        let m = <C::Field as binfield::BinFieldParams<DIGS>>::M;

        // V_m by the Lucas recurrence.
        let mut v_prev = Int::from_i64(2);
        let mut v_cur = Int::from_i64(mu as i64);
        for _ in 1..m {
            let next = &(&v_cur * &Int::from_i64(mu as i64)) - &v_prev.shl(1);
            v_prev = v_cur;
            v_cur = next;
        }

        // δ = Σ τ^i for i < m, accumulated through τ^(i+1) = -2b + (a + μb)τ.
        let mut a = Int::one();
        let mut b = Int::zero();
        let mut s0 = Int::zero();
        let mut s1 = Int::zero();
        for _ in 0..m {
            s0 += &a;
            s1 += &b;
            let na = -b.shl(1);
            let nb = if mu == 1 { &a + &b } else { &a - &b };
            a = na;
            b = nb;
        }

        Self {
            vm: v_cur,
            s0,
            s1,
            mu,
            m,
        }
    }

    /// The norm of `δ`, which equals the order of the base-point
    /// subgroup.
    pub fn norm(&self) -> Int {
        // N(s0 + s1·τ) = s0² + μ·s0·s1 + 2·s1²
        let cross = &self.s0 * &self.s1;
        let cross = if self.mu == 1 { cross } else { -cross };
        &(&self.s0.sqr() + &cross) + &self.s1.sqr().shl(1)
    }

    /// Width-`w` τ-adic NAF of `k`, written into `code`; returns the
    /// digit count.
    pub fn tnaf(&self, k: &Int, width: u32, code: &mut [i8]) -> Result<usize> {
        mpint::rec::tnaf(
            k, &self.vm, &self.s0, &self.s1, self.mu, self.m, width, code,
        )
    }
}
