//! Field parameter traits.

use crate::reduce::Reduce;
use mpint::limb::Limb;

/// Sparse (Mersenne-like) form of a modulus: `p = 2^t + Σ ε·2^s` with
/// `ε = ±1` and few terms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SparseForm {
    /// Exponent of the leading power of two.
    pub t: u32,
    /// Remaining terms as `(s, ε)` pairs with `s < t`, descending.
    pub terms: &'static [(u32, i8)],
}

/// Compile-time parameters of a prime field GF(p).
///
/// Implementations are zero-sized marker types. Everything except the
/// modulus itself can be derived with the `const fn` helpers in
/// [`crate::limbs`]:
///
/// ```ignore
/// impl FieldParams<LIMBS> for MyField {
///     const MODULUS_HEX: &'static str = "ffff...";
///     const MODULUS: [Limb; LIMBS] = from_be_hex(Self::MODULUS_HEX);
///     const MONTY_U: Limb = monty_u(&Self::MODULUS);
///     const R: [Limb; LIMBS] = pow2_mod(&Self::MODULUS, (LIMBS * LIMB_BITS) as u32);
///     const R2: [Limb; LIMBS] = pow2_mod(&Self::MODULUS, (2 * LIMBS * LIMB_BITS) as u32);
///     const MODULUS_MINUS_2: [Limb; LIMBS] = sub_limb(&Self::MODULUS, 2);
///     const GENERATOR: u64 = 6;
///     type Reduction = MontgomeryReduction;
/// }
/// ```
pub trait FieldParams<const LIMBS: usize>:
    Copy + Clone + core::fmt::Debug + Default + Eq + Send + Sync + 'static
{
    /// Field modulus, little-endian.
    const MODULUS: [Limb; LIMBS];

    /// Field modulus as a big-endian hex string.
    const MODULUS_HEX: &'static str;

    /// `-p^(-1) mod 2^W`, the Montgomery quotient constant.
    const MONTY_U: Limb;

    /// `R mod p` where `R = 2^(LIMBS·W)`.
    const R: [Limb; LIMBS];

    /// `R² mod p`.
    const R2: [Limb; LIMBS];

    /// `p - 2`, the Fermat inversion exponent.
    const MODULUS_MINUS_2: [Limb; LIMBS];

    /// Sparse form of the modulus, when one exists.
    const SPARSE: Option<SparseForm> = None;

    /// A small multiplicative generator of the field which is also a
    /// quadratic nonresidue, for the general square-root path.
    const GENERATOR: u64;

    /// Reduction back-end selected for this field.
    type Reduction: Reduce<Self, LIMBS>;
}
