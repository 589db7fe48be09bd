// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

#![no_std]

//! # p751sidh
//!
//! **Arithmetic for supersingular isogeny Diffie-Hellman over the prime
//! \\( p = 2\^{372} 3\^{239} - 1 \\).**
//!
//! This crate provides the layers that an SIDH key exchange is built on:
//!
//! * arithmetic in \\( \mathbb F\_{p\^2} = \mathbb F\_p(i) \\), with
//!   \\( i\^2 = -1 \\), in the [`field`] module, backed by a Montgomery
//!   form representation of \\( \mathbb F\_p \\) on twelve 64-bit words;
//!
//! * projective Montgomery curves \\( (A : C) \\) and points \\( (X : Z) \\)
//!   on their Kummer lines, in the [`curve`] module;
//!
//! * construction and evaluation of the 3- and 4-isogenies used to walk
//!   the isogeny graph, in the [`isogeny`] module.
//!
//! Key generation, the three-point ladder, and SIKE encapsulation live
//! above this crate.
//!
//! # Example
//!
//! ```
//! use p751sidh::constants::E0;
//! use p751sidh::curve::ProjectivePoint;
//! use p751sidh::field::ExtensionFieldElement;
//! use p751sidh::isogeny::FirstFourIsogeny;
//! use p751sidh::traits::Isogeny;
//!
//! let (codomain, phi) = FirstFourIsogeny::compute(&E0.to_affine());
//! let xP = ProjectivePoint::from_affine(&ExtensionFieldElement::from(3u64));
//! let xQ = phi.eval(&xP);
//!
//! assert_eq!(codomain.to_affine(), -ExtensionFieldElement::from(6u64));
//! assert!(!xQ.vartime_eq(&xP));
//! ```
//!
//! # Side channels
//!
//! Field arithmetic and isogeny evaluation run in time independent of
//! the values involved: there are no branches or table lookups on
//! secret data, and equality and selection go through the [`subtle`]
//! crate.  Functions named `vartime_*`, affine conversions, and
//! [`ProjectiveCurveParameters::j_invariant`](curve::ProjectiveCurveParameters::j_invariant)
//! are meant for public data only.

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// p751sidh public modules
//------------------------------------------------------------------------

// Arithmetic in the quadratic extension F_{p^2}
pub mod field;

// Projective Montgomery curves and Kummer line points
pub mod curve;

// 3- and 4-isogenies between Montgomery curves
pub mod isogeny;

// Useful constants, like the base curve
pub mod constants;

// External (and internal) traits.
pub mod traits;

//------------------------------------------------------------------------
// p751sidh internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^372 * 3^239 - 1
pub(crate) mod backend;
