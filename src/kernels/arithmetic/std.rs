// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Standard Arithmetic Kernels Module** - *Scalar Reference Implementations*
//!
//! Portable scalar implementations of the elementwise channel operations.
//!
//! Prefer dispatch.rs for easily handling the general case, otherwise you can
//! use these inner functions directly.
//!
//! ## Overview
//! - **Scalar loops**: Standard element-wise operations without vectorisation
//! - **Reference role**: The vectorised bodies in simd.rs must agree with
//!   these within the configured equality threshold
//! - **Full compatibility**: Works on any architecture regardless of SIMD support
//!
//! ## Design Notes
//! - Intentionally avoids parallelisation to allow higher-level chunking strategies
//! - The linear transform is multiply-then-add, never a fused `mul_add`, so the
//!   aligned region of the vectorised body reproduces it bit-for-bit

use num_traits::Float;

/// Scalar linear-transform kernel: `out[i] = scale * data[i] + offset`.
#[inline(always)]
pub fn linear_dense_body_std<T: Float>(data: &[T], scale: T, offset: T, out: &mut [T]) {
    let n = data.len();
    for i in 0..n {
        out[i] = scale * data[i] + offset;
    }
}

/// Scalar elementwise vector addition kernel: `out[i] = lhs[i] + rhs[i]`.
#[inline(always)]
pub fn add_dense_body_std<T: Float>(lhs: &[T], rhs: &[T], out: &mut [T]) {
    let n = lhs.len();
    for i in 0..n {
        out[i] = lhs[i] + rhs[i];
    }
}

/// Scalar broadcast addition kernel: `out[i] = data[i] + shift`.
#[inline(always)]
pub fn add_scalar_dense_body_std<T: Float>(data: &[T], shift: T, out: &mut [T]) {
    let n = data.len();
    for i in 0..n {
        out[i] = data[i] + shift;
    }
}
