// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Construction and evaluation of 3- and 4-isogenies between projective
//! Montgomery curves.
//!
//! Each isogeny type is built once from its kernel by a `compute`
//! function, which returns the codomain curve together with the
//! isogeny.  The isogeny is then pushed through any number of points
//! with [`Isogeny::eval`](crate::traits::Isogeny::eval); in SIDH every
//! step is evaluated on the public basis points as well as the point
//! that carries the secret.
//!
//! None of these functions checks that the kernel point has the claimed
//! order.  A point of the wrong order gives a meaningless result rather
//! than an error, and checking would require branching on secret data.
//! Kernel points must come from code that has already validated them.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.
#![allow(non_snake_case)]

use zeroize::Zeroize;

use crate::curve::{ProjectiveCurveParameters, ProjectivePoint};
use crate::field::ExtensionFieldElement;
use crate::traits::Isogeny;

/// A 3-isogeny \\( \phi \\), holding the data necessary to evaluate
/// \\( \phi \\).
#[derive(Copy, Clone, Debug)]
pub struct ThreeIsogeny {
    X: ExtensionFieldElement,
    Z: ExtensionFieldElement,
}

impl ThreeIsogeny {
    /// Given a three-torsion point \\( x\_3 = x(P\_3) \\) on the curve
    /// \\( E\_{(A:C)} \\), construct the three-isogeny
    /// \\( \phi : E\_{(A:C)} \rightarrow E\_{(A:C)}/\langle P\_3 \rangle = E\_{(A':C')} \\).
    ///
    /// # Return
    ///
    /// A tuple `(codomain, isogeny)` \\( = (E\_{(A':C')}, \phi) \\).
    pub fn compute(x3: &ProjectivePoint) -> (ProjectiveCurveParameters, ThreeIsogeny) {
        let isogeny = ThreeIsogeny { X: x3.X, Z: x3.Z };

        // We want to compute
        //
        // (A':C') = (Z^4 + 18X^2Z^2 - 27X^4 : 4XZ^3)
        //
        // To do this, use the identity 18X^2Z^2 - 27X^4 = 9X^2(2Z^2 - 3X^2).
        let X_sq = x3.X.square(); // = X^2
        let X_sq_3 = &(&X_sq + &X_sq) + &X_sq; // = 3X^2
        let X_sq_9 = &(&X_sq_3 + &X_sq_3) + &X_sq_3; // = 9X^2
        let Z_sq = x3.Z.square(); // = Z^2
        let Z_pow4 = Z_sq.square(); // = Z^4
        let Z_sq_2 = &Z_sq + &Z_sq; // = 2Z^2
        let t0 = &Z_sq_2 - &X_sq_3; // = 2Z^2 - 3X^2
        let t1 = &X_sq_9 * &t0; // = 9X^2(2Z^2 - 3X^2)
        let XZ = &x3.X * &x3.Z; // = XZ
        let XZ_2 = &XZ + &XZ; // = 2XZ

        let codomain = ProjectiveCurveParameters {
            A: &Z_pow4 + &t1,  // = Z^4 + 9X^2(2Z^2 - 3X^2)
            C: &XZ_2 * &Z_sq_2, // = 4XZ^3
        };

        (codomain, isogeny)
    }
}

impl Isogeny for ThreeIsogeny {
    /// Given a 3-isogeny \\( \phi \\) and a point \\( x\_P = x(P) \\),
    /// compute \\( x\_Q = x(Q) \\), the x-coordinate of the image
    /// \\( Q = \phi(P) \\) of \\( P \\) under
    /// \\( \phi : E\_{(A:C)} \rightarrow E\_{(A':C')} \\).
    ///
    /// The output is a point on the curve \\( E\_{(A':C')} \\) returned by
    /// `ThreeIsogeny::compute`.
    fn eval(&self, xP: &ProjectivePoint) -> ProjectivePoint {
        let t0 = &self.X * &xP.X; // = X3*XP
        let t1 = &self.Z * &xP.Z; // = Z3*ZP
        let t2 = &t0 - &t1; // = X3*XP - Z3*ZP
        let t0 = &self.Z * &xP.X; // = Z3*XP
        let t1 = &self.X * &xP.Z; // = X3*ZP
        let t0 = &t0 - &t1; // = Z3*XP - X3*ZP
        let t2 = t2.square(); // = (X3*XP - Z3*ZP)^2
        let t0 = t0.square(); // = (Z3*XP - X3*ZP)^2

        ProjectivePoint {
            X: &t2 * &xP.X, // = XP*(X3*XP - Z3*ZP)^2
            Z: &t0 * &xP.Z, // = ZP*(Z3*XP - X3*ZP)^2
        }
    }
}

impl Zeroize for ThreeIsogeny {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Z.zeroize();
    }
}

/// A 4-isogeny \\( \phi \\), holding the data necessary to evaluate
/// \\( \phi \\).
#[derive(Copy, Clone, Debug)]
pub struct FourIsogeny {
    Xsq_plus_Zsq: ExtensionFieldElement,
    Xsq_minus_Zsq: ExtensionFieldElement,
    XZ2: ExtensionFieldElement,
    Xpow4: ExtensionFieldElement,
    Zpow4: ExtensionFieldElement,
}

impl FourIsogeny {
    /// Given a four-torsion point \\( x\_4 = x(P\_4) \\) on the curve
    /// \\( E\_{(A:C)} \\), compute the coefficients of the codomain
    /// \\( E\_{(A':C')} \\) of the four-isogeny
    /// \\( \phi : E\_{(A:C)} \rightarrow E\_{(A:C)}/\langle P\_4 \rangle \\).
    ///
    /// The kernel point must not be \\( x = \pm 1 \\), the 4-torsion
    /// points lying over \\( (0, 0) \\): the evaluation formula scales its
    /// output by \\( 16 (X\_4 + Z\_4)(X\_4 - Z\_4) X\_4\^2 Z\_4\^4 \\), which
    /// vanishes there.  On \\( E\_0 \\) that kernel is handled by
    /// [`FirstFourIsogeny`].
    ///
    /// # Return
    ///
    /// A tuple `(codomain, isogeny)` \\( = (E\_{(A':C')}, \phi) \\).
    pub fn compute(x4: &ProjectivePoint) -> (ProjectiveCurveParameters, FourIsogeny) {
        let v0 = x4.X.square(); // = X4^2
        let v1 = x4.Z.square(); // = Z4^2
        let Xsq_plus_Zsq = &v0 + &v1; // = X4^2 + Z4^2
        let Xsq_minus_Zsq = &v0 - &v1; // = X4^2 - Z4^2
        let XZ2 = &(&x4.X + &x4.Z).square() - &Xsq_plus_Zsq; // = 2X4Z4
        let Xpow4 = v0.square(); // = X4^4
        let Zpow4 = v1.square(); // = Z4^4

        let t0 = &(&Xpow4 + &Xpow4) - &Zpow4; // = 2X4^4 - Z4^4

        let codomain = ProjectiveCurveParameters {
            A: &t0 + &t0, // = 2(2X4^4 - Z4^4)
            C: Zpow4,     // = Z4^4
        };

        let isogeny = FourIsogeny {
            Xsq_plus_Zsq,
            Xsq_minus_Zsq,
            XZ2,
            Xpow4,
            Zpow4,
        };

        (codomain, isogeny)
    }
}

impl Isogeny for FourIsogeny {
    /// Given a 4-isogeny \\( \phi \\) and a point \\( x\_P = x(P) \\),
    /// compute \\( x\_Q = x(Q) \\), the x-coordinate of the image
    /// \\( Q = \phi(P) \\) of \\( P \\) under
    /// \\( \phi : E\_{(A:C)} \rightarrow E\_{(A':C')} \\).
    ///
    /// The output is a point on the curve \\( E\_{(A':C')} \\) returned by
    /// `FourIsogeny::compute`.
    fn eval(&self, xP: &ProjectivePoint) -> ProjectivePoint {
        // We want to compute formula (7) of Costello-Longa-Naehrig, namely
        //
        // Xprime = (2*X_4*Z*Z_4 - (X_4^2 + Z_4^2)*X)*(X*X_4 - Z*Z_4)^2*X
        // Zprime = (2*X*X_4*Z_4 - (X_4^2 + Z_4^2)*Z)*(X_4*Z - X*Z_4)^2*Z
        //
        // but computing instead
        //
        // X_Q = Xprime*( 16*(X_4 + Z_4)*(X_4 - Z_4)*X_4^2*Z_4^4 )
        // Z_Q = Zprime*( 16*(X_4 + Z_4)*(X_4 - Z_4)*X_4^2*Z_4^4 )
        //
        // which is the same projective point with fewer multiplications.
        let t0 = &xP.X * &self.XZ2; // = 2*X*X_4*Z_4
        let t1 = &xP.Z * &self.Xsq_plus_Zsq; // = (X_4^2 + Z_4^2)*Z
        let t0 = &t0 - &t1; // = -X_4^2*Z + 2*X*X_4*Z_4 - Z*Z_4^2
        let t1 = &xP.Z * &self.Xsq_minus_Zsq; // = (X_4^2 - Z_4^2)*Z
        let t2 = (&t0 - &t1).square(); // = 4*(X_4*Z - X*Z_4)^2*X_4^2
        let t0 = &t0 * &t1;
        let t0 = &t0 + &t0;
        let t0 = &t0 + &t0; // = 4*(2*X*X_4*Z_4 - (X_4^2 + Z_4^2)*Z)*(X_4^2 - Z_4^2)*Z
        let t1 = &t0 + &t2; // = 4*(X*X_4 - Z*Z_4)^2*Z_4^2
        let t0 = &t0 * &t2; // = Zprime * 16*(X_4 + Z_4)*(X_4 - Z_4)*X_4^2
        let Z = &t0 * &self.Zpow4; // = Zprime * 16*(X_4 + Z_4)*(X_4 - Z_4)*X_4^2*Z_4^4
        let t2 = &t2 * &self.Zpow4; // = 4*(X_4*Z - X*Z_4)^2*X_4^2*Z_4^4
        let t0 = &t1 * &self.Xpow4; // = 4*(X*X_4 - Z*Z_4)^2*X_4^4*Z_4^2
        let t0 = &t2 - &t0; // = -4*(X*X_4^2 - 2*X_4*Z*Z_4 + X*Z_4^2)*X*(X_4^2 - Z_4^2)*X_4^2*Z_4^2
        let X = &t1 * &t0; // = Xprime * 16*(X_4 + Z_4)*(X_4 - Z_4)*X_4^2*Z_4^4

        ProjectivePoint { X, Z }
    }
}

impl Zeroize for FourIsogeny {
    fn zeroize(&mut self) {
        self.Xsq_plus_Zsq.zeroize();
        self.Xsq_minus_Zsq.zeroize();
        self.XZ2.zeroize();
        self.Xpow4.zeroize();
        self.Zpow4.zeroize();
    }
}

/// The first 4-isogeny out of the base curve
/// \\( E\_a : y\^2 = x\^3 + a x\^2 + x \\).
///
/// Its kernel is generated by the point with \\( x = 1 \\), which lies
/// over \\( (0, 0) \\).  [`FourIsogeny`] cannot be used for this kernel,
/// since its scaling factor vanishes at \\( x = \pm 1 \\); this variant
/// instead uses the Vélu-style formula specialised to that kernel, and
/// needs only the affine coefficient \\( a \\).
#[derive(Copy, Clone, Debug)]
pub struct FirstFourIsogeny {
    a: ExtensionFieldElement,
}

impl FirstFourIsogeny {
    /// Given the affine coefficient \\( a \\) of the base curve
    /// \\( E\_a \\), construct the four-isogeny with kernel
    /// \\( \langle (1, \cdot) \rangle \\).
    ///
    /// # Return
    ///
    /// A tuple `(codomain, isogeny)` \\( = (E\_{(A':C')}, \phi) \\), where
    /// \\( (A' : C') = (2(a+6) : a-2) \\).
    pub fn compute(a: &ExtensionFieldElement) -> (ProjectiveCurveParameters, FirstFourIsogeny) {
        let two = &ExtensionFieldElement::one() + &ExtensionFieldElement::one(); // = 2
        let four = &two + &two; // = 4
        let six = &two + &four; // = 6
        let a_plus_6 = &six + a; // = a+6

        let codomain = ProjectiveCurveParameters {
            A: &a_plus_6 + &a_plus_6, // = 2(a+6)
            C: a - &two,              // = a-2
        };

        (codomain, FirstFourIsogeny { a: *a })
    }
}

impl Isogeny for FirstFourIsogeny {
    /// Given \\( x\_P = x(P) \\) on \\( E\_a \\), compute the
    /// x-coordinate of its image,
    ///
    /// X' = (X+Z)^2 * (X^2 + Z^2 + aXZ)
    /// Z' = (X-Z)^2 * (2-a)XZ
    fn eval(&self, xP: &ProjectivePoint) -> ProjectivePoint {
        let t0 = (&xP.X + &xP.Z).square(); // = (X+Z)^2
        let two = &ExtensionFieldElement::one() + &ExtensionFieldElement::one(); // = 2
        let t1 = &two - &self.a; // = 2 - a
        let t2 = &(&xP.X * &xP.Z) * &t1; // = (2-a)*X*Z
        let t1 = &t0 - &t2; // = X^2 + Z^2 + a*X*Z
        let X = &t0 * &t1; // = (X+Z)^2*(X^2 + Z^2 + a*X*Z)

        let t0 = (&xP.X - &xP.Z).square(); // = (X-Z)^2
        let Z = &t0 * &t2; // = (2-a)*X*Z*(X-Z)^2

        ProjectivePoint { X, Z }
    }
}

impl Zeroize for FirstFourIsogeny {
    fn zeroize(&mut self) {
        self.a.zeroize();
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
