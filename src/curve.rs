// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Projective Montgomery curves and points on their Kummer lines.
//!
//! A curve \\( E\_{(A:C)} : y\^2 = x\^3 + (A/C) x\^2 + x \\) is held as the
//! projective pair \\( (A : C) \\), and a point as its x-coordinate
//! \\( (X : Z) \\) only.  Neither type refers to the other: the same
//! coordinates are read against different curves as an isogeny walk
//! proceeds, and the caller keeps track of which curve is current.
//!
//! Affine forms appear only at the boundary, for test vectors and final
//! outputs; conversion to affine costs an inversion.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.
#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallySelectable;

use zeroize::Zeroize;

use crate::field::ExtensionFieldElement;
use crate::traits::Identity;

/// The coefficients \\( (A : C) \\) of the Montgomery curve
/// \\( y\^2 = x\^3 + (A/C) x\^2 + x \\).
#[derive(Copy, Clone, Debug)]
pub struct ProjectiveCurveParameters {
    pub A: ExtensionFieldElement,
    pub C: ExtensionFieldElement,
}

/// A point \\( (X : Z) \\) on the Kummer line of a Montgomery curve,
/// representing the affine x-coordinate \\( X/Z \\).
#[derive(Copy, Clone, Debug)]
pub struct ProjectivePoint {
    pub X: ExtensionFieldElement,
    pub Z: ExtensionFieldElement,
}

impl ProjectiveCurveParameters {
    /// Construct \\( (a : 1) \\) from the affine coefficient `a`.
    pub fn from_affine(a: &ExtensionFieldElement) -> ProjectiveCurveParameters {
        ProjectiveCurveParameters {
            A: *a,
            C: ExtensionFieldElement::one(),
        }
    }

    /// Compute the affine coefficient \\( A/C \\).
    pub fn to_affine(&self) -> ExtensionFieldElement {
        &self.A * &self.C.invert()
    }

    /// Compute the j-invariant of this curve,
    ///
    /// j = 256*(A^2 - 3*C^2)^3 / (C^4 * (A^2 - 4*C^2)).
    pub fn j_invariant(&self) -> ExtensionFieldElement {
        let A_sq = self.A.square(); // = A^2
        let C_sq = self.C.square(); // = C^2
        let C_sq_2 = &C_sq + &C_sq; // = 2C^2
        let C_sq_3 = &C_sq_2 + &C_sq; // = 3C^2
        let C_sq_4 = &C_sq_2 + &C_sq_2; // = 4C^2

        let mut numerator = &A_sq - &C_sq_3; // = A^2 - 3C^2
        numerator = &numerator.square() * &numerator; // = (A^2 - 3C^2)^3
        for _ in 0..8 {
            numerator = &numerator + &numerator;
        } // = 256*(A^2 - 3C^2)^3

        let denominator = &C_sq.square() * &(&A_sq - &C_sq_4); // = C^4*(A^2 - 4C^2)

        &numerator * &denominator.invert()
    }

    /// Compare two curves for projective equality, i.e. whether
    /// \\( A\_1 C\_2 = A\_2 C\_1 \\).
    ///
    /// # Warning
    ///
    /// This comparison is *not* constant time.
    pub fn vartime_eq(&self, other: &ProjectiveCurveParameters) -> bool {
        let t0 = &self.A * &other.C;
        let t1 = &other.A * &self.C;
        t0.vartime_eq(&t1)
    }
}

impl Zeroize for ProjectiveCurveParameters {
    fn zeroize(&mut self) {
        self.A.zeroize();
        self.C.zeroize();
    }
}

impl Identity for ProjectivePoint {
    /// The point at infinity, \\( (1 : 0) \\).
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: ExtensionFieldElement::one(),
            Z: ExtensionFieldElement::zero(),
        }
    }
}

impl Default for ProjectivePoint {
    fn default() -> ProjectivePoint {
        ProjectivePoint::identity()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &ProjectivePoint, b: &ProjectivePoint, choice: Choice) -> ProjectivePoint {
        ProjectivePoint {
            X: ExtensionFieldElement::conditional_select(&a.X, &b.X, choice),
            Z: ExtensionFieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Z.zeroize();
    }
}

impl ProjectivePoint {
    /// Construct \\( (x : 1) \\) from an affine x-coordinate.
    pub fn from_affine(x: &ExtensionFieldElement) -> ProjectivePoint {
        ProjectivePoint {
            X: *x,
            Z: ExtensionFieldElement::one(),
        }
    }

    /// Compute the affine x-coordinate \\( X/Z \\).
    ///
    /// The point at infinity has no affine form; since the inverse of
    /// zero is zero, it maps to \\( 0 \\).
    pub fn to_affine(&self) -> ExtensionFieldElement {
        &self.X * &self.Z.invert()
    }

    /// Compare two points for projective equality, i.e. whether
    /// \\( X\_1 Z\_2 = X\_2 Z\_1 \\).
    ///
    /// # Warning
    ///
    /// This comparison is *not* constant time, and must not be used
    /// on secret data.
    pub fn vartime_eq(&self, other: &ProjectivePoint) -> bool {
        let t0 = &self.X * &other.Z;
        let t1 = &other.X * &self.Z;
        t0.vartime_eq(&t1)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    use rand::thread_rng;

    use crate::constants;

    #[test]
    fn affine_roundtrip() {
        let mut rng = thread_rng();
        let x = ExtensionFieldElement::random(&mut rng);
        let xP = ProjectivePoint::from_affine(&x);
        assert_eq!(xP.to_affine(), x);

        // Rescaling does not change the affine form.
        let lambda = ExtensionFieldElement::random(&mut rng);
        let scaled = ProjectivePoint {
            X: &xP.X * &lambda,
            Z: &xP.Z * &lambda,
        };
        assert!(scaled.vartime_eq(&xP));
        assert_eq!(scaled.to_affine(), x);
    }

    #[test]
    fn distinct_points_are_not_equal() {
        let xP = ProjectivePoint::from_affine(&ExtensionFieldElement::from(2u64));
        let xQ = ProjectivePoint::from_affine(&ExtensionFieldElement::from(3u64));
        assert!(!xP.vartime_eq(&xQ));
    }

    #[test]
    fn identity_is_not_affine() {
        let id = ProjectivePoint::identity();
        assert!(!id.vartime_eq(&ProjectivePoint::from_affine(&ExtensionFieldElement::zero())));
        assert_eq!(id.to_affine(), ExtensionFieldElement::zero());
    }

    #[test]
    fn j_invariant_of_base_curve() {
        // E_0 : y^2 = x^3 + x has j = 1728.
        assert_eq!(constants::E0.j_invariant(), ExtensionFieldElement::from(1728u64));
    }

    #[test]
    fn j_invariant_is_projective() {
        let mut rng = thread_rng();
        let curve = ProjectiveCurveParameters::from_affine(&ExtensionFieldElement::random(&mut rng));
        let lambda = ExtensionFieldElement::random(&mut rng);
        let scaled = ProjectiveCurveParameters {
            A: &curve.A * &lambda,
            C: &curve.C * &lambda,
        };
        assert!(scaled.vartime_eq(&curve));
        assert_eq!(scaled.j_invariant(), curve.j_invariant());
        assert_eq!(scaled.to_affine(), curve.A);
    }
}
