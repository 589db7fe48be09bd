// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Arithmetic in the quadratic extension
//! \\( \mathbb F\_{p\^2} = \mathbb F\_p[i] / (i\^2 + 1) \\), where
//! \\( p = 2\^{372} \cdot 3\^{239} - 1 \\).
//!
//! Every operation here returns an element whose base field
//! components are fully reduced, so results compose freely without the
//! caller tracking lazy reduction state.  That bookkeeping is confined
//! to the bodies of the operations below, and is enforced by the types
//! of the backend.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use rand_core::{CryptoRng, RngCore};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

use zeroize::Zeroize;

use crate::backend::serial::u64::field::{Fp751Element, LazyFp751Element, NUM_BYTES, NUM_WORDS};

/// An element \\( a + b i \\) of \\( \mathbb F\_{p\^2} \\), with
/// \\( a, b \\) stored in Montgomery form.
#[derive(Copy, Clone)]
pub struct ExtensionFieldElement {
    pub(crate) a: Fp751Element,
    pub(crate) b: Fp751Element,
}

/// Length of the canonical byte encoding of an `ExtensionFieldElement`.
pub const EXTENSION_FIELD_ELEMENT_LENGTH: usize = 2 * NUM_BYTES;

impl Debug for ExtensionFieldElement {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "ExtensionFieldElement{{\n\ta: {:?},\n\tb: {:?}\n}}", &self.a, &self.b)
    }
}

impl Default for ExtensionFieldElement {
    fn default() -> ExtensionFieldElement {
        ExtensionFieldElement::ZERO
    }
}

impl Zeroize for ExtensionFieldElement {
    fn zeroize(&mut self) {
        self.a.zeroize();
        self.b.zeroize();
    }
}

impl ConstantTimeEq for ExtensionFieldElement {
    fn ct_eq(&self, other: &ExtensionFieldElement) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b)
    }
}

impl Eq for ExtensionFieldElement {}

impl PartialEq for ExtensionFieldElement {
    fn eq(&self, other: &ExtensionFieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConditionallySelectable for ExtensionFieldElement {
    fn conditional_select(
        x: &ExtensionFieldElement,
        y: &ExtensionFieldElement,
        choice: Choice,
    ) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: Fp751Element::conditional_select(&x.a, &y.a, choice),
            b: Fp751Element::conditional_select(&x.b, &y.b, choice),
        }
    }
}

impl From<u64> for ExtensionFieldElement {
    /// Construct the element \\( n + 0 i \\).
    fn from(n: u64) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: Fp751Element::from_u64(n),
            b: Fp751Element::ZERO,
        }
    }
}

impl<'a, 'b> Add<&'b ExtensionFieldElement> for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn add(self, rhs: &'b ExtensionFieldElement) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: self.a.add(&rhs.a),
            b: self.b.add(&rhs.b),
        }
    }
}

define_add_variants!(
    LHS = ExtensionFieldElement,
    RHS = ExtensionFieldElement,
    Output = ExtensionFieldElement
);

impl<'b> AddAssign<&'b ExtensionFieldElement> for ExtensionFieldElement {
    fn add_assign(&mut self, rhs: &'b ExtensionFieldElement) {
        *self = (self as &ExtensionFieldElement) + rhs;
    }
}

define_add_assign_variants!(LHS = ExtensionFieldElement, RHS = ExtensionFieldElement);

impl<'a, 'b> Sub<&'b ExtensionFieldElement> for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn sub(self, rhs: &'b ExtensionFieldElement) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: self.a.sub(&rhs.a),
            b: self.b.sub(&rhs.b),
        }
    }
}

define_sub_variants!(
    LHS = ExtensionFieldElement,
    RHS = ExtensionFieldElement,
    Output = ExtensionFieldElement
);

impl<'b> SubAssign<&'b ExtensionFieldElement> for ExtensionFieldElement {
    fn sub_assign(&mut self, rhs: &'b ExtensionFieldElement) {
        *self = (self as &ExtensionFieldElement) - rhs;
    }
}

define_sub_assign_variants!(LHS = ExtensionFieldElement, RHS = ExtensionFieldElement);

impl<'a, 'b> Mul<&'b ExtensionFieldElement> for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;

    /// Multiply using three base field multiplications instead of four.
    fn mul(self, rhs: &'b ExtensionFieldElement) -> ExtensionFieldElement {
        // Let (a,b,c,d) = (lhs.a,lhs.b,rhs.a,rhs.b).
        let a = &self.a;
        let b = &self.b;
        let c = &rhs.a;
        let d = &rhs.b;

        // We want to compute
        //
        // (a + bi)*(c + di) = (a*c - b*d) + (a*d + b*c)i
        //
        // Use Karatsuba's trick: note that
        //
        // (b - a)*(c - d) = (b*c + a*d) - a*c - b*d
        //
        // so (a*d + b*c) = (b-a)*(c-d) + a*c + b*d.

        let ac = a.mul_wide(c); // = a*c*R*R
        let bd = b.mul_wide(d); // = b*d*R*R

        let b_minus_a = b.sub(a); // = (b-a)*R
        let c_minus_d = c.sub(d); // = (c-d)*R

        let ad_plus_bc = b_minus_a
            .mul_wide(&c_minus_d) // = (b-a)*(c-d)*R*R
            .add_lazy(&ac) // = ((b-a)*(c-d) + a*c)*R*R
            .add_lazy(&bd); // = ((b-a)*(c-d) + a*c + b*d)*R*R

        let ac_minus_bd = ac.sub_lazy(&bd); // = (a*c - b*d)*R*R

        ExtensionFieldElement {
            a: ac_minus_bd.montgomery_reduce(), // = (a*c - b*d)*R mod p
            b: ad_plus_bc.montgomery_reduce(),  // = (a*d + b*c)*R mod p
        }
    }
}

define_mul_variants!(
    LHS = ExtensionFieldElement,
    RHS = ExtensionFieldElement,
    Output = ExtensionFieldElement
);

impl<'b> MulAssign<&'b ExtensionFieldElement> for ExtensionFieldElement {
    fn mul_assign(&mut self, rhs: &'b ExtensionFieldElement) {
        *self = (self as &ExtensionFieldElement) * rhs;
    }
}

define_mul_assign_variants!(LHS = ExtensionFieldElement, RHS = ExtensionFieldElement);

impl<'a> Neg for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn neg(self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: self.a.negate(),
            b: self.b.negate(),
        }
    }
}

impl Neg for ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn neg(self) -> ExtensionFieldElement {
        -&self
    }
}

impl ExtensionFieldElement {
    /// The additive identity.
    pub const ZERO: ExtensionFieldElement = ExtensionFieldElement {
        a: Fp751Element::ZERO,
        b: Fp751Element::ZERO,
    };

    /// The multiplicative identity.
    pub const ONE: ExtensionFieldElement = ExtensionFieldElement {
        a: Fp751Element::ONE,
        b: Fp751Element::ZERO,
    };

    /// Construct the additive identity.
    pub fn zero() -> ExtensionFieldElement {
        ExtensionFieldElement::ZERO
    }

    /// Construct the multiplicative identity.
    pub fn one() -> ExtensionFieldElement {
        ExtensionFieldElement::ONE
    }

    /// Compute the square of this element, using two base field
    /// multiplications:
    ///
    /// (a + bi)^2 = (a+b)*(a-b) + 2ab i
    pub fn square(&self) -> ExtensionFieldElement {
        let a = &self.a;
        let b = &self.b;

        let a_plus_b = a.add_lazy(b).strong_reduce(); // = (a+b)*R
        let a_minus_b = a.sub(b); // = (a-b)*R
        let ab = a.montgomery_mul(b); // = a*b*R

        ExtensionFieldElement {
            a: a_plus_b.mul_wide(&a_minus_b).montgomery_reduce(), // = (a^2 - b^2)*R
            b: ab.add(&ab),                                        // = 2ab*R
        }
    }

    /// Compute the inverse of this element:
    ///
    /// 1/(a + bi) = (a - bi)/(a^2 + b^2)
    ///
    /// The inverse of zero is zero.
    pub fn invert(&self) -> ExtensionFieldElement {
        let norm = self
            .a
            .mul_wide(&self.a)
            .add_lazy(&self.b.mul_wide(&self.b))
            .montgomery_reduce(); // = (a^2 + b^2)*R
        let norm_inv = norm.invert(); // = (a^2 + b^2)^(-1)*R

        ExtensionFieldElement {
            a: self.a.montgomery_mul(&norm_inv),
            b: self.b.montgomery_mul(&norm_inv).negate(),
        }
    }

    /// Determine whether this element is a square in \\( \mathbb F\_{p\^2} \\).
    ///
    /// An element of \\( \mathbb F\_{p\^2} \\) is a square exactly when
    /// its norm \\( a\^2 + b\^2 \\) is a square in \\( \mathbb F\_p \\).
    /// Zero is counted as a square.
    pub fn is_square(&self) -> Choice {
        let norm = self
            .a
            .mul_wide(&self.a)
            .add_lazy(&self.b.mul_wide(&self.b))
            .montgomery_reduce();
        norm.is_square()
    }

    /// Compare two elements for equality.
    ///
    /// # Warning
    ///
    /// This comparison is *not* constant time.  It exists for tests and
    /// diagnostics, and must never be used on secret data; use
    /// `ct_eq` instead.
    pub fn vartime_eq(&self, other: &ExtensionFieldElement) -> bool {
        self.a.vartime_eq(&other.a) && self.b.vartime_eq(&other.b)
    }

    /// Generate a random element, sampling each coordinate from the
    /// 751-bit integers and reducing.
    ///
    /// Reduction from \\( [0, 2\^{751}) \\) is slightly biased; this is
    /// intended for tests and blinding, not for key generation.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> ExtensionFieldElement {
        let mut words = [0u64; 2 * NUM_WORDS];
        for w in words.iter_mut() {
            *w = rng.next_u64();
        }
        let mut a_words = [0u64; NUM_WORDS];
        let mut b_words = [0u64; NUM_WORDS];
        a_words.copy_from_slice(&words[..NUM_WORDS]);
        b_words.copy_from_slice(&words[NUM_WORDS..]);

        let element = ExtensionFieldElement {
            a: LazyFp751Element::from_masked_words(&a_words).strong_reduce(),
            b: LazyFp751Element::from_masked_words(&b_words).strong_reduce(),
        };

        words.zeroize();
        a_words.zeroize();
        b_words.zeroize();
        element
    }

    /// Encode this element as `a || b`, each coordinate as 94
    /// little-endian bytes of its canonical (non-Montgomery) value.
    pub fn to_bytes(&self) -> [u8; EXTENSION_FIELD_ELEMENT_LENGTH] {
        let mut bytes = [0u8; EXTENSION_FIELD_ELEMENT_LENGTH];
        bytes[..NUM_BYTES].copy_from_slice(&self.a.to_bytes());
        bytes[NUM_BYTES..].copy_from_slice(&self.b.to_bytes());
        bytes
    }

    /// Decode an element from `a || b`.
    ///
    /// # Return
    ///
    /// `None` (in constant time) if either coordinate is not
    /// canonical, i.e. not below \\( p \\).
    pub fn from_bytes(bytes: &[u8; EXTENSION_FIELD_ELEMENT_LENGTH]) -> CtOption<ExtensionFieldElement> {
        let mut a_bytes = [0u8; NUM_BYTES];
        let mut b_bytes = [0u8; NUM_BYTES];
        a_bytes.copy_from_slice(&bytes[..NUM_BYTES]);
        b_bytes.copy_from_slice(&bytes[NUM_BYTES..]);

        let a = Fp751Element::from_bytes(&a_bytes);
        let b = Fp751Element::from_bytes(&b_bytes);
        a_bytes.zeroize();
        b_bytes.zeroize();

        let is_some = a.is_some() & b.is_some();
        let element = ExtensionFieldElement {
            a: a.unwrap_or(Fp751Element::ZERO),
            b: b.unwrap_or(Fp751Element::ZERO),
        };
        CtOption::new(element, is_some)
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for ExtensionFieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ExtensionFieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExtensionFieldElementVisitor;

        impl<'de> Visitor<'de> for ExtensionFieldElementVisitor {
            type Value = ExtensionFieldElement;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                formatter.write_str("a canonical 188-byte encoding of an element of GF(p^2)")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<ExtensionFieldElement, E>
            where
                E: serde::de::Error,
            {
                if v.len() != EXTENSION_FIELD_ELEMENT_LENGTH {
                    return Err(serde::de::Error::invalid_length(v.len(), &self));
                }
                let mut bytes = [0u8; EXTENSION_FIELD_ELEMENT_LENGTH];
                bytes.copy_from_slice(v);
                Option::from(ExtensionFieldElement::from_bytes(&bytes))
                    .ok_or_else(|| serde::de::Error::custom("non-canonical field element"))
            }
        }

        deserializer.deserialize_bytes(ExtensionFieldElementVisitor)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
