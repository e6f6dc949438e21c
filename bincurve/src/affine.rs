//! Affine binary-curve points.

use crate::params::BinCurveParams;
use crate::projective::ProjectivePoint;
use binfield::FieldElement;
use core::fmt;
use core::ops::Neg;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a binary curve in affine coordinates, the normalized
/// representation.
pub struct AffinePoint<C, const DIGS: usize>
where
    C: BinCurveParams<DIGS>,
{
    pub(crate) x: FieldElement<C::Field, DIGS>,
    pub(crate) y: FieldElement<C::Field, DIGS>,
    pub(crate) infinity: u8,
}

impl<C, const DIGS: usize> AffinePoint<C, DIGS>
where
    C: BinCurveParams<DIGS>,
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
        x: FieldElement<C::Field, DIGS>,
        y: FieldElement<C::Field, DIGS>,
    ) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// The affine coordinates, or `None` at infinity.
    pub fn coordinates(
        &self,
    ) -> Option<(FieldElement<C::Field, DIGS>, FieldElement<C::Field, DIGS>)> {
        (self.infinity == 0).then_some((self.x, self.y))
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Whether the point satisfies `y² + xy = x³ + ax² + b` (the identity
    /// counts as on-curve).
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square() + self.x * self.y;
        let rhs = (self.x + C::EQUATION_A) * self.x.square() + C::EQUATION_B;
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// The Frobenius endomorphism `φ(x, y) = (x², y²)`.
    #[must_use]
    pub fn frobenius(&self) -> Self {
        Self {
            x: self.x.square(),
            y: self.y.square(),
            infinity: self.infinity,
        }
    }

    /// Point halving: the unique subgroup point `Q` with `2Q = self`.
    ///
    /// Supported on curves of cofactor 2; solves a quadratic by
    /// half-trace, picks the subgroup root by a trace test, and recovers
    /// the coordinates with one square root.
    pub fn halve(&self) -> Self {
        debug_assert_eq!(C::COFACTOR, 2);
        if self.infinity != 0 {
            return *self;
        }

        // Both roots of λ² + λ = a + x are halving slopes; the one whose
        // recovered x-coordinate has Tr(x) = Tr(a) yields the subgroup
        // half.
        let mut lambda = (C::EQUATION_A + self.x).half_trace();
        let t = self.y + self.x * lambda;
        let u = if t.trace() == 1 {
            // λ_Q = λ̂ + 1, for which u² = y + x·λ̂
            lambda += FieldElement::ONE;
            t.sqrt()
        } else {
            // λ_Q = λ̂, for which u² = y + x·(λ̂ + 1)
            (t + self.x).sqrt()
        };
        // λ_Q = u + y_Q/u  =>  y_Q = u·(λ_Q + u)
        let v = u * (lambda + u);
        Self::from_xy_unchecked(u, v)
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Clone for AffinePoint<C, DIGS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Copy for AffinePoint<C, DIGS> {}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Default for AffinePoint<C, DIGS> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> ConditionallySelectable for AffinePoint<C, DIGS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> ConstantTimeEq for AffinePoint<C, DIGS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_infinity = self.is_identity() & other.is_identity();
        let coords_eq = self.x.ct_eq(&other.x)
            & self.y.ct_eq(&other.y)
            & !self.is_identity()
            & !other.is_identity();
        both_infinity | coords_eq
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Eq for AffinePoint<C, DIGS> {}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> PartialEq for AffinePoint<C, DIGS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Neg for AffinePoint<C, DIGS> {
    type Output = Self;

    /// On a binary curve, `-(x, y) = (x, x + y)`.
    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: self.x + self.y,
            infinity: self.infinity,
        }
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Neg for &AffinePoint<C, DIGS> {
    type Output = AffinePoint<C, DIGS>;

    fn neg(self) -> AffinePoint<C, DIGS> {
        -*self
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> From<ProjectivePoint<C, DIGS>>
    for AffinePoint<C, DIGS>
{
    fn from(p: ProjectivePoint<C, DIGS>) -> Self {
        p.to_affine()
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> fmt::Debug for AffinePoint<C, DIGS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity != 0 {
            f.write_str("AffinePoint(infinity)")
        } else {
            write!(f, "AffinePoint({:?}, {:?})", self.x, self.y)
        }
    }
}
