//! Affine curve points.

use crate::params::PrimeCurveParams;
use crate::projective::ProjectivePoint;
use core::fmt;
use core::ops::Neg;
use primefield::FieldElement;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a short Weierstrass curve in affine coordinates, the
/// normalized representation.
pub struct AffinePoint<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// x-coordinate.
    pub(crate) x: FieldElement<C::Field, LIMBS>,
    /// y-coordinate.
    pub(crate) y: FieldElement<C::Field, LIMBS>,
    /// 1 for the point at infinity, 0 otherwise.
    pub(crate) infinity: u8,
}

impl<C, const LIMBS: usize> AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Creates a point from coordinates without an on-curve check.
    pub const fn from_xy_unchecked(
        x: FieldElement<C::Field, LIMBS>,
        y: FieldElement<C::Field, LIMBS>,
    ) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// The affine coordinates, or `None` at infinity.
    pub fn coordinates(
        &self,
    ) -> Option<(FieldElement<C::Field, LIMBS>, FieldElement<C::Field, LIMBS>)> {
        (self.infinity == 0).then_some((self.x, self.y))
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Whether the point satisfies the curve equation (the identity
    /// counts as on-curve).
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = (self.x.square() + C::EQUATION_A) * self.x + C::EQUATION_B;
        lhs.ct_eq(&rhs) | self.is_identity()
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Clone for AffinePoint<C, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Copy for AffinePoint<C, LIMBS> {}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Default for AffinePoint<C, LIMBS> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> ConditionallySelectable
    for AffinePoint<C, LIMBS>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for AffinePoint<C, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_infinity = self.is_identity() & other.is_identity();
        let coords_eq = self.x.ct_eq(&other.x)
            & self.y.ct_eq(&other.y)
            & !self.is_identity()
            & !other.is_identity();
        both_infinity | coords_eq
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Eq for AffinePoint<C, LIMBS> {}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> PartialEq for AffinePoint<C, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Neg for AffinePoint<C, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Neg for &AffinePoint<C, LIMBS> {
    type Output = AffinePoint<C, LIMBS>;

    fn neg(self) -> AffinePoint<C, LIMBS> {
        -*self
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> From<ProjectivePoint<C, LIMBS>>
    for AffinePoint<C, LIMBS>
{
    fn from(p: ProjectivePoint<C, LIMBS>) -> Self {
        p.to_affine()
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> fmt::Debug for AffinePoint<C, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity != 0 {
            f.write_str("AffinePoint(infinity)")
        } else {
            write!(f, "AffinePoint({:?}, {:?})", self.x, self.y)
        }
    }
}
