// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Pluggable implementations of the base field for different
//! architectures.
//!
//! The extension field and isogeny layers only rely on the numeric
//! contract of `Fp751Element`, `LazyFp751Element` and `Fp751X2`:
//! reduced and lazy addition, reduced subtraction, double-width
//! multiplication, and destructive Montgomery reduction.  Only the
//! portable `u64` serial backend exists so far; an assembly backend
//! would live beside it behind the same interface.

pub(crate) mod serial;
