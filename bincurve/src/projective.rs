//! Projective binary-curve points in López-Dahab coordinates.
//!
//! A point `(X, Y, Z)` represents the affine point `(X/Z, Y/Z²)`; the
//! point at infinity has `Z = 0`.

use crate::affine::AffinePoint;
use crate::params::BinCurveParams;
use binfield::FieldElement;
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a binary curve in López-Dahab coordinates.
pub struct ProjectivePoint<C, const DIGS: usize>
where
    C: BinCurveParams<DIGS>,
{
    pub(crate) x: FieldElement<C::Field, DIGS>,
    pub(crate) y: FieldElement<C::Field, DIGS>,
    pub(crate) z: FieldElement<C::Field, DIGS>,
}

impl<C, const DIGS: usize> ProjectivePoint<C, DIGS>
where
    C: BinCurveParams<DIGS>,
{
    /// Additive identity: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ZERO,
        z: FieldElement::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: FieldElement::ONE,
    };

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Normalizes to affine coordinates.
    pub fn to_affine(&self) -> AffinePoint<C, DIGS> {
        match Option::<FieldElement<C::Field, DIGS>>::from(self.z.invert()) {
            Some(zinv) => AffinePoint::from_xy_unchecked(self.x * zinv, self.y * zinv.square()),
            None => AffinePoint::IDENTITY,
        }
    }

    /// Normalizes a slice of points with a single shared inversion.
    pub fn normalize_batch(points: &[Self], out: &mut [AffinePoint<C, DIGS>]) {
        assert_eq!(points.len(), out.len());
        let mut zs = [FieldElement::<C::Field, DIGS>::ONE; 64];
        let zs = &mut zs[..points.len()];
        for (z, p) in zs.iter_mut().zip(points.iter()) {
            z.conditional_assign(&p.z, !p.z.is_zero());
        }
        FieldElement::invert_sim(zs).expect("batch contains no zero after substitution");
        for ((p, zinv), slot) in points.iter().zip(zs.iter()).zip(out.iter_mut()) {
            let affine = AffinePoint::from_xy_unchecked(p.x * *zinv, p.y * zinv.square());
            *slot = AffinePoint::conditional_select(&affine, &AffinePoint::IDENTITY, p.z.is_zero());
        }
    }

    /// Point negation: `-(X, Y, Z) = (X, XZ + Y, Z)`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.x * self.z + self.y,
            z: self.z,
        }
    }

    /// The Frobenius endomorphism applied coordinate-wise.
    #[must_use]
    pub fn frobenius(&self) -> Self {
        Self {
            x: self.x.square(),
            y: self.y.square(),
            z: self.z.square(),
        }
    }

    /// López-Dahab point doubling.
    #[must_use]
    pub fn double(&self) -> Self {
        if self.is_identity().into() {
            return Self::IDENTITY;
        }

        let z1z1 = self.z.square();
        let x1x1 = self.x.square();
        let b_z4 = C::EQUATION_B * z1z1.square();

        let z3 = x1x1 * z1z1;
        let x3 = x1x1.square() + b_z4;
        let y3 = b_z4 * z3 + x3 * (C::EQUATION_A * z3 + self.y.square() + b_z4);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// López-Dahab mixed addition with a normalized point.
    ///
    /// When both operands share an x-image, doubling is selected; when
    /// the y-images then differ, the result is the point at infinity.
    pub fn add_mixed(&self, other: &AffinePoint<C, DIGS>) -> Self {
        if other.is_identity().into() {
            return *self;
        }
        if self.is_identity().into() {
            return Self {
                x: other.x,
                y: other.y,
                z: FieldElement::ONE,
            };
        }

        let z1z1 = self.z.square();
        let a = other.y * z1z1 + self.y;
        let b = other.x * self.z + self.x;

        if bool::from(b.is_zero()) {
            return if bool::from(a.is_zero()) {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let c = self.z * b;
        let d = b.square() * (c + C::EQUATION_A * z1z1);
        let z3 = c.square();
        let e = a * c;
        let x3 = a.square() + d + e;
        let f = x3 + other.x * z3;
        let g = (other.x + other.y) * z3.square();
        let y3 = (e + z3) * f + g;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed subtraction.
    pub fn sub_mixed(&self, other: &AffinePoint<C, DIGS>) -> Self {
        self.add_mixed(&-other)
    }

    /// General point addition. The right operand is normalized first, so
    /// hot paths should prefer [`Self::add_mixed`] against precomputed
    /// affine tables.
    pub fn add(&self, other: &Self) -> Self {
        self.add_mixed(&other.to_affine())
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Clone for ProjectivePoint<C, DIGS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Copy for ProjectivePoint<C, DIGS> {}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Default for ProjectivePoint<C, DIGS> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> ConditionallySelectable
    for ProjectivePoint<C, DIGS>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> ConstantTimeEq for ProjectivePoint<C, DIGS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Cross-multiplied comparison: X1/Z1 = X2/Z2, Y1/Z1² = Y2/Z2².
        let x_eq = (self.x * other.z).ct_eq(&(other.x * self.z));
        let y_eq = (self.y * other.z.square()).ct_eq(&(other.y * self.z.square()));
        let both_infinity = self.is_identity() & other.is_identity();
        both_infinity | (!self.is_identity() & !other.is_identity() & x_eq & y_eq)
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Eq for ProjectivePoint<C, DIGS> {}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> PartialEq for ProjectivePoint<C, DIGS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> From<AffinePoint<C, DIGS>>
    for ProjectivePoint<C, DIGS>
{
    fn from(p: AffinePoint<C, DIGS>) -> Self {
        let projective = Self {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

//
// Operator impls
//

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Add for ProjectivePoint<C, DIGS> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> AddAssign for ProjectivePoint<C, DIGS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Sub for ProjectivePoint<C, DIGS> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &other.neg())
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> SubAssign for ProjectivePoint<C, DIGS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs.neg());
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> Neg for ProjectivePoint<C, DIGS> {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint::neg(&self)
    }
}

impl<C: BinCurveParams<DIGS>, const DIGS: usize> fmt::Debug for ProjectivePoint<C, DIGS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectivePoint({:?})", self.to_affine())
    }
}
