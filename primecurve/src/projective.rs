//! Projective curve points in Jacobian coordinates.
//!
//! A point `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`; the
//! point at infinity has `Z = 0`.

use crate::affine::AffinePoint;
use crate::params::PrimeCurveParams;
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use primefield::FieldElement;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a short Weierstrass curve in Jacobian coordinates.
pub struct ProjectivePoint<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    pub(crate) x: FieldElement<C::Field, LIMBS>,
    pub(crate) y: FieldElement<C::Field, LIMBS>,
    pub(crate) z: FieldElement<C::Field, LIMBS>,
}

impl<C, const LIMBS: usize> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Additive identity: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
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

    /// Normalizes to affine coordinates (an inversion and four
    /// multiplications).
    pub fn to_affine(&self) -> AffinePoint<C, LIMBS> {
        match Option::<FieldElement<C::Field, LIMBS>>::from(self.z.invert()) {
            Some(zinv) => {
                let zinv2 = zinv.square();
                AffinePoint::from_xy_unchecked(self.x * zinv2, self.y * zinv2 * zinv)
            }
            None => AffinePoint::IDENTITY,
        }
    }

    /// Normalizes a slice of points with a single shared inversion.
    pub fn normalize_batch(points: &[Self], out: &mut [AffinePoint<C, LIMBS>]) {
        assert_eq!(points.len(), out.len());
        let mut zs = [FieldElement::<C::Field, LIMBS>::ONE; 64];
        let zs = &mut zs[..points.len()];
        for (z, p) in zs.iter_mut().zip(points.iter()) {
            // Substitute 1 for zero denominators; those entries resolve to
            // the identity below.
            z.conditional_assign(&p.z, !p.z.is_zero());
        }
        FieldElement::invert_sim(zs).expect("batch contains no zero after substitution");
        for ((p, zinv), slot) in points.iter().zip(zs.iter()).zip(out.iter_mut()) {
            let zinv2 = zinv.square();
            let affine = AffinePoint::from_xy_unchecked(p.x * zinv2, p.y * zinv2 * *zinv);
            *slot = AffinePoint::conditional_select(&affine, &AffinePoint::IDENTITY, p.z.is_zero());
        }
    }

    /// Point negation.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Point doubling, valid for any `a`.
    #[must_use]
    pub fn double(&self) -> Self {
        if self.is_identity().into() {
            return Self::IDENTITY;
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();

        // s = 4xy² = 2((x + y²)² - x² - y⁴)
        let s = ((self.x + yy).square() - xx - yyyy).double();
        // m = 3x² + a·z⁴
        let m = xx.double() + xx + C::EQUATION_A * zz.square();
        let x3 = m.square() - s.double();
        let y3 = m * (s - x3) - yyyy.double().double().double();
        let z3 = (self.y + self.z).square() - yy - zz;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition.
    ///
    /// When both operands project to the same affine x, doubling is
    /// selected; when the y-coordinates then differ, the result is the
    /// point at infinity.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity().into() {
            return *other;
        }
        if other.is_identity().into() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * z2z2 * other.z;
        let s2 = other.y * z1z1 * self.z;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = u2 - u1;
        let r = s2 - s1;
        let hh = h.square();
        let hhh = h * hh;
        let v = u1 * hh;

        let x3 = r.square() - hhh - v.double();
        let y3 = r * (v - x3) - s1 * hhh;
        let z3 = self.z * other.z * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition with a normalized (affine) point.
    pub fn add_mixed(&self, other: &AffinePoint<C, LIMBS>) -> Self {
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
        let u2 = other.x * z1z1;
        let s2 = other.y * z1z1 * self.z;

        if self.x == u2 {
            return if self.y == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = u2 - self.x;
        let r = s2 - self.y;
        let hh = h.square();
        let hhh = h * hh;
        let v = self.x * hh;

        let x3 = r.square() - hhh - v.double();
        let y3 = r * (v - x3) - self.y * hhh;
        let z3 = self.z * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed subtraction.
    pub fn sub_mixed(&self, other: &AffinePoint<C, LIMBS>) -> Self {
        self.add_mixed(&-other)
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Clone for ProjectivePoint<C, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Copy for ProjectivePoint<C, LIMBS> {}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Default for ProjectivePoint<C, LIMBS> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> ConditionallySelectable
    for ProjectivePoint<C, LIMBS>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for ProjectivePoint<C, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Cross-multiplied comparison avoids normalizing either side.
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let x_eq = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let y_eq = (self.y * z2z2 * other.z).ct_eq(&(other.y * z1z1 * self.z));
        let both_infinity = self.is_identity() & other.is_identity();
        both_infinity | (!self.is_identity() & !other.is_identity() & x_eq & y_eq)
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Eq for ProjectivePoint<C, LIMBS> {}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> PartialEq for ProjectivePoint<C, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> From<AffinePoint<C, LIMBS>>
    for ProjectivePoint<C, LIMBS>
{
    fn from(p: AffinePoint<C, LIMBS>) -> Self {
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

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Add for ProjectivePoint<C, LIMBS> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Add<&ProjectivePoint<C, LIMBS>>
    for &ProjectivePoint<C, LIMBS>
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn add(self, other: &ProjectivePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::add(self, other)
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> AddAssign for ProjectivePoint<C, LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Sub for ProjectivePoint<C, LIMBS> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &other.neg())
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> SubAssign for ProjectivePoint<C, LIMBS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs.neg());
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> Neg for ProjectivePoint<C, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint::neg(&self)
    }
}

impl<C: PrimeCurveParams<LIMBS>, const LIMBS: usize> fmt::Debug for ProjectivePoint<C, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectivePoint({:?})", self.to_affine())
    }
}
