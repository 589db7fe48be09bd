// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Various constants, such as the base curve.

use crate::curve::ProjectiveCurveParameters;
use crate::field::ExtensionFieldElement;

/// The starting curve \\( E\_0 : y\^2 = x\^3 + x \\), i.e.
/// \\( (A : C) = (0 : 1) \\).  Its affine coefficient \\( a = 0 \\) is
/// the input to `FirstFourIsogeny::compute`.
pub const E0: ProjectiveCurveParameters = ProjectiveCurveParameters {
    A: ExtensionFieldElement::ZERO,
    C: ExtensionFieldElement::ONE,
};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base_curve_coefficients() {
        assert_eq!(E0.A, ExtensionFieldElement::zero());
        assert_eq!(E0.C, ExtensionFieldElement::from(1u64));
        assert_eq!(E0.to_affine(), ExtensionFieldElement::zero());
    }
}
