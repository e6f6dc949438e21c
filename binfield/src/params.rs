//! Binary field parameter traits and `const fn` derivation helpers.

use crate::arith;
use mpint::limb::{Limb, LIMB_BITS};

/// Compile-time parameters of a binary field GF(2^m) with a fixed
/// trinomial or pentanomial reduction polynomial.
///
/// Implementations are zero-sized marker types; everything beyond the
/// degree and the polynomial exponents is derivable:
///
/// ```ignore
/// impl BinFieldParams<DIGS> for MyField {
///     const M: u32 = 283;
///     const POLY: &'static [u32] = &[12, 7, 5, 0];
///     const FIELD_POLY: [Limb; DIGS] = field_poly(Self::M, Self::POLY);
///     const SQRT_Z: [Limb; DIGS] = compute_sqrt_z(Self::M, Self::POLY);
///     const TRACE_BITS: &'static [u32] = &[0, 271];
///     const CHAIN: &'static [(u8, u8)] = &[...];
/// }
/// ```
pub trait BinFieldParams<const DIGS: usize>:
    Copy + Clone + core::fmt::Debug + Default + Eq + Send + Sync + 'static
{
    /// Degree of the reduction polynomial.
    const M: u32;

    /// Exponents of f(z) below `M`, descending, ending in 0: for
    /// `f = z^m + z^a + z^b + z^c + 1` this is `[a, b, c, 0]`.
    const POLY: &'static [u32];

    /// The full reduction polynomial f(z), including the `z^m` term.
    const FIELD_POLY: [Limb; DIGS];

    /// `√z = z^(2^(m-1)) mod f`, used by the element square root.
    const SQRT_Z: [Limb; DIGS];

    /// Positions `i` with `Tr(z^i) = 1`; the trace of an element is the
    /// XOR of its bits at these positions.
    const TRACE_BITS: &'static [u32];

    /// Addition chain for `m - 1` as `(x, y)` index pairs extending the
    /// implicit prefix `u = [1, 2]` by `u[i] = u[x] + u[y]`, used by
    /// Itoh–Tsujii inversion. The final entry must reach `m - 1`.
    const CHAIN: &'static [(u8, u8)];
}

/// Parses a big-endian hex string into little-endian limbs. Strings
/// shorter than the limb capacity are implicitly zero-extended on the
/// left.
///
/// # Panics
///
/// When the value does not fit `DIGS` limbs or a character is not hex.
pub const fn from_be_hex<const DIGS: usize>(hex: &str) -> [Limb; DIGS] {
    let bytes = hex.as_bytes();
    assert!(
        bytes.len() <= DIGS * LIMB_BITS / 4,
        "hex string is too long for this field"
    );
    let mut out = [0; DIGS];
    let mut i = 0;
    while i < bytes.len() {
        let v = match bytes[bytes.len() - 1 - i] {
            b @ b'0'..=b'9' => (b - b'0') as Limb,
            b @ b'a'..=b'f' => (b - b'a' + 10) as Limb,
            b @ b'A'..=b'F' => (b - b'A' + 10) as Limb,
            _ => panic!("invalid hex character"),
        };
        out[i / (LIMB_BITS / 4)] |= v << (4 * (i % (LIMB_BITS / 4)));
        i += 1;
    }
    out
}

/// Builds the limb representation of `f(z) = z^m + Σ z^e`.
pub const fn field_poly<const DIGS: usize>(m: u32, poly: &[u32]) -> [Limb; DIGS] {
    assert!((m as usize) < DIGS * LIMB_BITS, "degree does not fit");
    let mut out = [0; DIGS];
    out[m as usize / LIMB_BITS] |= 1 << (m as usize % LIMB_BITS);
    let mut i = 0;
    while i < poly.len() {
        let e = poly[i] as usize;
        out[e / LIMB_BITS] |= 1 << (e % LIMB_BITS);
        i += 1;
    }
    out
}

/// `√z = z^(2^(m-1)) mod f`, by repeated squaring at compile time.
pub const fn compute_sqrt_z<const DIGS: usize>(m: u32, poly: &[u32]) -> [Limb; DIGS] {
    let mut x = [0; DIGS];
    x[0] = 2; // z
    let mut i = 0;
    while i < m - 1 {
        x = arith::reduce(arith::sqr_wide(&x), m, poly);
        i += 1;
    }
    x
}
