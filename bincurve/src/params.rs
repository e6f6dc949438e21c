//! Curve parameter traits.

use binfield::{BinFieldParams, FieldElement};
use mpint::limb::Limb;
use mpint::Int;

/// Shape of a curve coefficient, allowing the formulas that simplify for
/// the common values to skip work.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoeffKind {
    /// The coefficient is zero.
    Zero,
    /// The coefficient is one.
    One,
    /// No special form.
    Arbitrary,
}

/// Compile-time parameters of a non-supersingular binary curve
/// `y² + xy = x³ + ax² + b` over GF(2^m).
pub trait BinCurveParams<const DIGS: usize>:
    Copy + Clone + core::fmt::Debug + Default + Eq + Send + Sync + 'static
{
    /// Base field parameters.
    type Field: BinFieldParams<DIGS>;

    /// Coefficient `a` of the curve equation.
    const EQUATION_A: FieldElement<Self::Field, DIGS>;

    /// Coefficient `b` of the curve equation.
    const EQUATION_B: FieldElement<Self::Field, DIGS>;

    /// Shape of `a`.
    const A_KIND: CoeffKind;

    /// Whether this is a Koblitz (anomalous binary) curve: `a ∈ {0, 1}`
    /// and `b = 1`, carrying the Frobenius endomorphism τ with
    /// `τ² + 2 = μτ`, `μ = (-1)^(1-a)`.
    const KOBLITZ: bool;

    /// Affine coordinates of the base point.
    const GENERATOR: (
        FieldElement<Self::Field, DIGS>,
        FieldElement<Self::Field, DIGS>,
    );

    /// Order of the base-point subgroup, little-endian.
    const ORDER: [Limb; DIGS];

    /// Curve cofactor.
    const COFACTOR: u32;

    /// Whether the curve is supersingular. The ladder multiplication is
    /// undefined on supersingular curves and refuses to run.
    const SUPERSINGULAR: bool = false;

    /// Window width for windowed-NAF and τ-adic NAF multiplication.
    const MUL_WIDTH: u32 = 4;

    /// `μ` from the Frobenius relation, meaningful on Koblitz curves.
    const MU: i8 = {
        match Self::A_KIND {
            CoeffKind::Zero => -1,
            _ => 1,
        }
    };

    /// The subgroup order as an integer.
    fn order() -> Int {
        Int::from_limbs(&Self::ORDER)
    }
}
