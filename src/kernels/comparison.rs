// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Kernels Module** - *Cross-Path Equivalence Checking*
//!
//! Elementwise tolerance comparison between a scalar-path output and a
//! vectorised-path output. A disagreement here indicates a platform-specific
//! numeric bug rather than a usage error, so the check reports a boolean and
//! never fails.

use num_traits::Float;

/// True iff `lhs` and `rhs` have the same length and every paired element
/// differs by at most `tolerance`.
///
/// A length mismatch yields `false` rather than an error: this kernel is the
/// diagnostic of last resort and must not itself have a failure path.
#[inline(always)]
pub fn verify_equivalent<T: Float>(lhs: &[T], rhs: &[T], tolerance: T) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    lhs.iter()
        .zip(rhs.iter())
        .all(|(&a, &b)| (a - b).abs() <= tolerance)
}
