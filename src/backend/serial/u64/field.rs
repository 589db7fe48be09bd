// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Arithmetic modulo \\(p = 2\^{372} \cdot 3\^{239} - 1\\) using twelve
//! 64-bit limbs, with elements held in Montgomery form for the radix
//! \\(R = 2\^{768}\\).
//!
//! Three types carry the reduction state of a value:
//!
//! * [`Fp751Element`] is always canonical, in \\([0, p)\\).  Only these
//!   may be multiplied or compared.
//! * [`LazyFp751Element`] is an unreduced sum in \\([0, 2p)\\), which
//!   must be strong-reduced before use.
//! * [`Fp751X2`] is a double-width product, which may be accumulated
//!   lazily and is consumed by Montgomery reduction.
//!
//! All routines run in constant time: loop bounds are fixed and
//! carries, borrows and selections are computed with masks.

use core::fmt::Debug;

use byteorder::{ByteOrder, LittleEndian};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

use zeroize::Zeroize;

use super::constants;

/// Number of 64-bit words in a base field element.
pub(crate) const NUM_WORDS: usize = 12;

/// Number of bytes in the canonical encoding of a base field element.
pub(crate) const NUM_BYTES: usize = 94;

/// Compute `a + b + carry`, returning `(result, carry)`.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute `a - (b + borrow)`, returning `(result, borrow)` with the
/// borrow in `{0, 1}`.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, ((ret >> 64) as u64) & 1)
}

/// Compute `a + (b * c) + carry`, returning `(result, carry)`.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Given `x` in \\([0, 2p)\\), return `x mod p`.
#[inline(always)]
fn reduce_once(x: &[u64; NUM_WORDS]) -> [u64; NUM_WORDS] {
    let mut difference = [0u64; NUM_WORDS];
    let mut borrow = 0u64;
    for i in 0..NUM_WORDS {
        (difference[i], borrow) = sbb(x[i], constants::P751[i], borrow);
    }

    // If x - p borrowed, x was already reduced.
    let keep = Choice::from(borrow as u8);
    let mut output = [0u64; NUM_WORDS];
    for i in 0..NUM_WORDS {
        output[i] = u64::conditional_select(&difference[i], &x[i], keep);
    }
    output
}

/// An element of \\( \mathbb F\_p \\) in Montgomery form, reduced to
/// \\([0, p)\\).
#[derive(Copy, Clone)]
pub(crate) struct Fp751Element(pub(crate) [u64; NUM_WORDS]);

/// An unreduced sum of two base field elements, in \\([0, 2p)\\).
#[derive(Copy, Clone)]
pub(crate) struct LazyFp751Element([u64; NUM_WORDS]);

/// An unreduced product of two base field elements, as 24 words.
///
/// Not `Copy`: `montgomery_reduce` takes it by value and wipes it.
#[derive(Clone)]
pub(crate) struct Fp751X2(pub(crate) [u64; 2 * NUM_WORDS]);

impl Debug for Fp751Element {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Fp751Element: {:?}", &self.0[..])
    }
}

impl Debug for LazyFp751Element {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "LazyFp751Element: {:?}", &self.0[..])
    }
}

impl Debug for Fp751X2 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Fp751X2: {:?}", &self.0[..])
    }
}

impl Zeroize for Fp751Element {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Zeroize for Fp751X2 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConstantTimeEq for Fp751Element {
    /// Both operands are canonical, so limb equality is value equality.
    fn ct_eq(&self, other: &Fp751Element) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for Fp751Element {
    fn conditional_select(a: &Fp751Element, b: &Fp751Element, choice: Choice) -> Fp751Element {
        let mut output = [0u64; NUM_WORDS];
        for i in 0..NUM_WORDS {
            output[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp751Element(output)
    }
}

impl Fp751Element {
    /// The additive identity.
    pub(crate) const ZERO: Fp751Element = Fp751Element([0u64; NUM_WORDS]);

    /// The multiplicative identity, `R mod p`.
    pub(crate) const ONE: Fp751Element = constants::MONTGOMERY_ONE;

    /// Compute `self + rhs (mod p)`.
    pub(crate) fn add(&self, rhs: &Fp751Element) -> Fp751Element {
        // Both inputs are below p < 2^751, so the sum cannot carry out.
        let mut sum = [0u64; NUM_WORDS];
        let mut carry = 0u64;
        for i in 0..NUM_WORDS {
            (sum[i], carry) = adc(self.0[i], rhs.0[i], carry);
        }
        Fp751Element(reduce_once(&sum))
    }

    /// Compute `self - rhs (mod p)`.
    pub(crate) fn sub(&self, rhs: &Fp751Element) -> Fp751Element {
        let mut difference = [0u64; NUM_WORDS];
        let mut borrow = 0u64;
        for i in 0..NUM_WORDS {
            (difference[i], borrow) = sbb(self.0[i], rhs.0[i], borrow);
        }

        // Add p back if we wrapped around.
        let mask = 0u64.wrapping_sub(borrow);
        let mut carry = 0u64;
        for i in 0..NUM_WORDS {
            (difference[i], carry) = adc(difference[i], constants::P751[i] & mask, carry);
        }
        Fp751Element(difference)
    }

    /// Compute `self + rhs` without reducing.
    pub(crate) fn add_lazy(&self, rhs: &Fp751Element) -> LazyFp751Element {
        let mut sum = [0u64; NUM_WORDS];
        let mut carry = 0u64;
        for i in 0..NUM_WORDS {
            (sum[i], carry) = adc(self.0[i], rhs.0[i], carry);
        }
        LazyFp751Element(sum)
    }

    /// Compute `-self (mod p)`.
    pub(crate) fn negate(&self) -> Fp751Element {
        Fp751Element::ZERO.sub(self)
    }

    /// Compute the full 24-word product `self * rhs`.
    ///
    /// For inputs in Montgomery form this is `x*y*R*R`.
    pub(crate) fn mul_wide(&self, rhs: &Fp751Element) -> Fp751X2 {
        let mut z = [0u64; 2 * NUM_WORDS];
        for i in 0..NUM_WORDS {
            let mut carry = 0u64;
            for j in 0..NUM_WORDS {
                (z[i + j], carry) = mac(z[i + j], self.0[i], rhs.0[j], carry);
            }
            z[i + NUM_WORDS] = carry;
        }
        Fp751X2(z)
    }

    /// Compute `(self * rhs) / R (mod p)`.
    pub(crate) fn montgomery_mul(&self, rhs: &Fp751Element) -> Fp751Element {
        self.mul_wide(rhs).montgomery_reduce()
    }

    /// Compute `self^2 / R (mod p)`.
    pub(crate) fn montgomery_square(&self) -> Fp751Element {
        self.montgomery_mul(self)
    }

    /// Put twelve words, read as an integer below \\(2\^{768}\\), into
    /// Montgomery form, i.e. compute `x*R (mod p)`.
    pub(crate) fn from_words(words: &[u64; NUM_WORDS]) -> Fp751Element {
        Fp751Element(*words).montgomery_mul(&constants::MONTGOMERY_RSQ)
    }

    /// Take this element out of Montgomery form, i.e. compute `x/R (mod p)`.
    pub(crate) fn to_words(&self) -> [u64; NUM_WORDS] {
        let mut wide = [0u64; 2 * NUM_WORDS];
        wide[..NUM_WORDS].copy_from_slice(&self.0);
        Fp751X2(wide).montgomery_reduce().0
    }

    /// Construct the element `n (mod p)`.
    pub(crate) fn from_u64(n: u64) -> Fp751Element {
        let mut words = [0u64; NUM_WORDS];
        words[0] = n;
        Fp751Element::from_words(&words)
    }

    /// Raise `self` to a public exponent, given as little-endian words.
    ///
    /// The exponent is not secret, so branching on its bits is fine;
    /// nothing here depends on the value of `self`.
    pub(crate) fn pow_public(&self, exponent: &[u64; NUM_WORDS]) -> Fp751Element {
        let mut result = Fp751Element::ONE;
        for i in (0..NUM_WORDS).rev() {
            for j in (0..64).rev() {
                result = result.montgomery_square();
                if (exponent[i] >> j) & 1 == 1 {
                    result = result.montgomery_mul(self);
                }
            }
        }
        result
    }

    /// Compute `1/self (mod p)` as `self^(p-2)`.  The inverse of zero
    /// is zero.
    pub(crate) fn invert(&self) -> Fp751Element {
        self.pow_public(&constants::P751_MINUS_TWO)
    }

    /// Determine whether `self` is a square in \\( \mathbb F\_p \\),
    /// using Euler's criterion.  Zero counts as a square.
    pub(crate) fn is_square(&self) -> Choice {
        let legendre = self.pow_public(&constants::P751_MINUS_ONE_HALVED);
        legendre.ct_eq(&Fp751Element::ONE) | legendre.ct_eq(&Fp751Element::ZERO)
    }

    /// Compare two elements word-by-word.  Canonical elements need no
    /// further reduction first; lazy values must be strong-reduced to
    /// reach this type at all.
    ///
    /// # Warning
    ///
    /// This comparison is *not* constant time, and must not be used
    /// on secret data.
    pub(crate) fn vartime_eq(&self, other: &Fp751Element) -> bool {
        self.0 == other.0
    }

    /// Encode the canonical value of this element as 94 little-endian
    /// bytes.
    pub(crate) fn to_bytes(&self) -> [u8; NUM_BYTES] {
        let mut buf = [0u8; 8 * NUM_WORDS];
        LittleEndian::write_u64_into(&self.to_words(), &mut buf);
        let mut bytes = [0u8; NUM_BYTES];
        bytes.copy_from_slice(&buf[..NUM_BYTES]);
        buf.zeroize();
        bytes
    }

    /// Decode 94 little-endian bytes, rejecting values which are not
    /// below `p`.
    pub(crate) fn from_bytes(bytes: &[u8; NUM_BYTES]) -> CtOption<Fp751Element> {
        let mut buf = [0u8; 8 * NUM_WORDS];
        buf[..NUM_BYTES].copy_from_slice(bytes);
        let mut words = [0u64; NUM_WORDS];
        LittleEndian::read_u64_into(&buf, &mut words);
        buf.zeroize();

        // words < p iff words - p borrows.
        let mut borrow = 0u64;
        for i in 0..NUM_WORDS {
            (_, borrow) = sbb(words[i], constants::P751[i], borrow);
        }
        let is_canonical = Choice::from(borrow as u8);

        let element = Fp751Element::from_words(&words);
        words.zeroize();
        CtOption::new(element, is_canonical)
    }
}

impl LazyFp751Element {
    /// Load twelve words as an unreduced element.  The top word is
    /// masked to 751 bits, so the value lies in \\([0, 2p)\\).
    pub(crate) fn from_masked_words(words: &[u64; NUM_WORDS]) -> LazyFp751Element {
        let mut masked = *words;
        masked[NUM_WORDS - 1] &= constants::TOP_WORD_MASK;
        LazyFp751Element(masked)
    }

    /// Reduce this value from \\([0, 2p)\\) to \\([0, p)\\).
    pub(crate) fn strong_reduce(&self) -> Fp751Element {
        Fp751Element(reduce_once(&self.0))
    }
}

impl Fp751X2 {
    /// Compute `self + rhs` without reducing.
    ///
    /// The caller must keep the sum below \\(p \cdot 2\^{768}\\) so that
    /// it can still be Montgomery-reduced.
    pub(crate) fn add_lazy(&self, rhs: &Fp751X2) -> Fp751X2 {
        let mut sum = [0u64; 2 * NUM_WORDS];
        let mut carry = 0u64;
        for i in 0..2 * NUM_WORDS {
            (sum[i], carry) = adc(self.0[i], rhs.0[i], carry);
        }
        Fp751X2(sum)
    }

    /// Compute `self - rhs`, adding \\(p \cdot 2\^{768}\\) if the
    /// difference is negative.
    ///
    /// If `self` is below \\(p \cdot 2\^{768}\\), so is the result.
    pub(crate) fn sub_lazy(&self, rhs: &Fp751X2) -> Fp751X2 {
        let mut difference = [0u64; 2 * NUM_WORDS];
        let mut borrow = 0u64;
        for i in 0..2 * NUM_WORDS {
            (difference[i], borrow) = sbb(self.0[i], rhs.0[i], borrow);
        }

        let mask = 0u64.wrapping_sub(borrow);
        let mut carry = 0u64;
        for i in 0..NUM_WORDS {
            (difference[NUM_WORDS + i], carry) =
                adc(difference[NUM_WORDS + i], constants::P751[i] & mask, carry);
        }
        Fp751X2(difference)
    }

    /// Perform Montgomery reduction: given `x` below
    /// \\(p \cdot 2\^{768}\\), compute `x/R (mod p)`.
    ///
    /// Consumes and wipes the input.
    pub(crate) fn montgomery_reduce(mut self) -> Fp751Element {
        let t = &mut self.0;
        for i in 0..NUM_WORDS {
            let m = t[i].wrapping_mul(constants::P751_INV);
            let mut carry = 0u64;
            for j in 0..NUM_WORDS {
                (t[i + j], carry) = mac(t[i + j], m, constants::P751[j], carry);
            }
            for k in (i + NUM_WORDS)..(2 * NUM_WORDS) {
                (t[k], carry) = adc(t[k], 0, carry);
            }
        }

        // The low half is now zero, and the high half is below 2p.
        let mut high = [0u64; NUM_WORDS];
        high.copy_from_slice(&t[NUM_WORDS..]);
        let output = Fp751Element(reduce_once(&high));
        high.zeroize();
        self.zeroize();
        output
    }
}
