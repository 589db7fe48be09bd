// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! This module contains backend-specific constant values, such as the
//! 64-bit limbs of the modulus and the Montgomery constants.

use super::field::{Fp751Element, NUM_WORDS};

/// The modulus \\( p = 2\^{372} \cdot 3\^{239} - 1 \\), as twelve
/// little-endian 64-bit words.
pub(crate) const P751: [u64; NUM_WORDS] = [
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xeeafffffffffffff,
    0xe3ec968549f878a8,
    0xda959b1a13f7cc76,
    0x084e9867d6ebe876,
    0x8562b5045cb25748,
    0x0e12909f97badc66,
    0x00006fe5d541f71c,
];

/// `-p^(-1) mod 2^64`.  Since `p = -1 mod 2^64` this is `1`.
pub(crate) const P751_INV: u64 = 0x0000000000000001;

/// `R mod p`, where `R = 2^768`; this is `1` in Montgomery form.
pub(crate) const MONTGOMERY_ONE: Fp751Element = Fp751Element([
    0x00000000000249ad,
    0x0000000000000000,
    0x0000000000000000,
    0x0000000000000000,
    0x0000000000000000,
    0x8310000000000000,
    0x5527b1e4375c6c66,
    0x697797bf3f4f24d0,
    0xc89db7b2ac5c4e2e,
    0x4ca4b439d2076956,
    0x10f7926c7512c7e9,
    0x00002d5b24bce5e2,
]);

/// `R^2 mod p`, used to move values into Montgomery form.
pub(crate) const MONTGOMERY_RSQ: Fp751Element = Fp751Element([
    0x233046449dad4058,
    0xdb010161a696452a,
    0x5e36941472e3fd8e,
    0xf40bfe2082a2e706,
    0x4932cca8904f8751,
    0x1f735f1f1ee7fc81,
    0xa24f4d80c1048e18,
    0xb56c383ccdb607c5,
    0x441dd47b735f9c90,
    0x5673ed2c6a6ac82a,
    0x06c905261132294b,
    0x000041ad830f1f35,
]);

/// `p - 2`, the inversion exponent.
pub(crate) const P751_MINUS_TWO: [u64; NUM_WORDS] = [
    0xfffffffffffffffd,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xeeafffffffffffff,
    0xe3ec968549f878a8,
    0xda959b1a13f7cc76,
    0x084e9867d6ebe876,
    0x8562b5045cb25748,
    0x0e12909f97badc66,
    0x00006fe5d541f71c,
];

/// `(p - 1) / 2`, the Legendre-symbol exponent.
pub(crate) const P751_MINUS_ONE_HALVED: [u64; NUM_WORDS] = [
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7757ffffffffffff,
    0x71f64b42a4fc3c54,
    0x6d4acd8d09fbe63b,
    0x04274c33eb75f43b,
    0x42b15a822e592ba4,
    0x0709484fcbdd6e33,
    0x000037f2eaa0fb8e,
];

/// Mask for the top word of a 751-bit value.
pub(crate) const TOP_WORD_MASK: u64 = (1u64 << (751 - 64 * (NUM_WORDS - 1))) - 1;
