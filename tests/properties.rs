// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Algebraic properties of the field and isogeny layers, checked on
//! random inputs.
//!
//! Field elements are too large for proptest strategies to be useful,
//! so each case draws a seed and expands it with a `StdRng`.

#![allow(non_snake_case)]

use p751sidh::curve::{ProjectiveCurveParameters, ProjectivePoint};
use p751sidh::field::{ExtensionFieldElement, EXTENSION_FIELD_ELEMENT_LENGTH};
use p751sidh::isogeny::{FirstFourIsogeny, FourIsogeny, ThreeIsogeny};
use p751sidh::traits::Isogeny;

use proptest::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_element(rng: &mut StdRng) -> ExtensionFieldElement {
    ExtensionFieldElement::random(rng)
}

fn random_point(rng: &mut StdRng) -> ProjectivePoint {
    ProjectivePoint {
        X: random_element(rng),
        Z: random_element(rng),
    }
}

fn rescale(xP: &ProjectivePoint, lambda: &ExtensionFieldElement) -> ProjectivePoint {
    ProjectivePoint {
        X: &xP.X * lambda,
        Z: &xP.Z * lambda,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn multiplication_is_commutative_and_associative(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = random_element(&mut rng);
        let y = random_element(&mut rng);
        let z = random_element(&mut rng);

        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
    }

    #[test]
    fn addition_is_commutative_and_associative(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = random_element(&mut rng);
        let y = random_element(&mut rng);
        let z = random_element(&mut rng);

        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
    }

    #[test]
    fn multiplication_distributes_over_addition(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = random_element(&mut rng);
        let y = random_element(&mut rng);
        let z = random_element(&mut rng);

        prop_assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
        prop_assert_eq!(&x * &(&y - &z), &(&x * &y) - &(&x * &z));
    }

    #[test]
    fn identities_and_inverses(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = random_element(&mut rng);
        let zero = ExtensionFieldElement::zero();
        let one = ExtensionFieldElement::one();

        prop_assert_eq!(&x + &zero, x);
        prop_assert_eq!(&x * &one, x);
        prop_assert_eq!(&x * &zero, zero);
        prop_assert_eq!(&x + &(-&x), zero);
        prop_assert_eq!(&x - &x, zero);
        prop_assert_eq!(x.square(), &x * &x);
        prop_assert_eq!(&x * &x.invert(), one);
        prop_assert_eq!(x.invert().invert(), x);
    }

    #[test]
    fn encoding_roundtrips(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = random_element(&mut rng);
        let bytes = x.to_bytes();
        prop_assert_eq!(bytes.len(), EXTENSION_FIELD_ELEMENT_LENGTH);

        let decoded = ExtensionFieldElement::from_bytes(&bytes);
        prop_assert!(bool::from(decoded.is_some()));
        prop_assert_eq!(decoded.unwrap(), x);
    }

    #[test]
    fn three_isogeny_is_projective(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x3 = random_point(&mut rng);
        let xP = random_point(&mut rng);
        let lambda = random_element(&mut rng);
        let mu = random_element(&mut rng);

        let (codomain, phi) = ThreeIsogeny::compute(&x3);
        let (scaled_codomain, scaled_phi) = ThreeIsogeny::compute(&rescale(&x3, &mu));
        prop_assert!(codomain.vartime_eq(&scaled_codomain));

        let xQ = phi.eval(&xP);
        prop_assert!(xQ.vartime_eq(&phi.eval(&rescale(&xP, &lambda))));
        prop_assert!(xQ.vartime_eq(&scaled_phi.eval(&xP)));
    }

    #[test]
    fn four_isogeny_is_projective(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x4 = random_point(&mut rng);
        let xP = random_point(&mut rng);
        let lambda = random_element(&mut rng);
        let mu = random_element(&mut rng);

        let (codomain, phi) = FourIsogeny::compute(&x4);
        let (scaled_codomain, scaled_phi) = FourIsogeny::compute(&rescale(&x4, &mu));
        prop_assert!(codomain.vartime_eq(&scaled_codomain));

        let xQ = phi.eval(&xP);
        prop_assert!(xQ.vartime_eq(&phi.eval(&rescale(&xP, &lambda))));
        prop_assert!(xQ.vartime_eq(&scaled_phi.eval(&xP)));
    }

    #[test]
    fn first_four_isogeny_is_projective(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = random_element(&mut rng);
        let xP = random_point(&mut rng);
        let lambda = random_element(&mut rng);

        let (codomain, phi) = FirstFourIsogeny::compute(&a);
        let two = ExtensionFieldElement::from(2u64);
        let six = ExtensionFieldElement::from(6u64);
        let expected = ProjectiveCurveParameters {
            A: &two * &(&a + &six),
            C: &a - &two,
        };
        prop_assert!(codomain.vartime_eq(&expected));

        let xQ = phi.eval(&xP);
        prop_assert!(xQ.vartime_eq(&phi.eval(&rescale(&xP, &lambda))));
    }

    #[test]
    fn isogenies_are_deterministic(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let kernel = random_point(&mut rng);
        let xP = random_point(&mut rng);

        let (first_codomain, first_phi) = ThreeIsogeny::compute(&kernel);
        let (second_codomain, second_phi) = ThreeIsogeny::compute(&kernel);
        prop_assert_eq!(first_codomain.A, second_codomain.A);
        prop_assert_eq!(first_codomain.C, second_codomain.C);

        let first = first_phi.eval(&xP);
        let second = second_phi.eval(&xP);
        prop_assert_eq!(first.X, second.X);
        prop_assert_eq!(first.Z, second.Z);

        let (_, phi) = FourIsogeny::compute(&kernel);
        let first = phi.eval(&xP);
        let second = phi.eval(&xP);
        prop_assert_eq!(first.X, second.X);
        prop_assert_eq!(first.Z, second.Z);
    }
}
