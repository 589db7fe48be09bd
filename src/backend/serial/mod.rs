// -*- mode: rust; -*-
//
// This file is part of p751sidh.
// See LICENSE for licensing information.

//! Serial implementations of base field arithmetic.

pub(crate) mod u64;
