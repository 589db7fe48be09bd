// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Module for common traits.

#![allow(non_snake_case)]

use crate::curve::ProjectivePoint;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for an isogeny \\( \phi : E \rightarrow E' \\) whose kernel data
/// has already been precomputed, so that it can be pushed through any
/// number of points.
pub trait Isogeny {
    /// Given \\( x(P) \\) for a point \\( P \\) on the domain, compute
    /// \\( x(\phi(P)) \\) on the codomain.
    ///
    /// The output is only defined up to a nonzero projective scalar;
    /// compare results with `ProjectivePoint::vartime_eq` or after
    /// conversion to affine form.
    fn eval(&self, xP: &ProjectivePoint) -> ProjectivePoint;
}
