//! Curve parameter traits.

use mpint::limb::Limb;
use mpint::Int;
use primefield::{FieldElement, FieldParams};

/// Compile-time parameters of a short Weierstrass curve
/// `y² = x³ + ax + b` over a prime field.
pub trait PrimeCurveParams<const LIMBS: usize>:
    Copy + Clone + core::fmt::Debug + Default + Eq + Send + Sync + 'static
{
    /// Base field parameters.
    type Field: FieldParams<LIMBS>;

    /// Coefficient `a` of the curve equation.
    const EQUATION_A: FieldElement<Self::Field, LIMBS>;

    /// Coefficient `b` of the curve equation.
    const EQUATION_B: FieldElement<Self::Field, LIMBS>;

    /// Affine coordinates of the base point.
    const GENERATOR: (
        FieldElement<Self::Field, LIMBS>,
        FieldElement<Self::Field, LIMBS>,
    );

    /// Order of the base-point subgroup, little-endian.
    const ORDER: [Limb; LIMBS];

    /// Window width for windowed-NAF multiplication.
    const MUL_WIDTH: u32 = 4;

    /// Per-scalar window width for the Shamir-trick joint table.
    const SIM_WIDTH: u32 = 2;

    /// The subgroup order as an integer.
    fn order() -> Int {
        Int::from_limbs(&Self::ORDER)
    }
}
