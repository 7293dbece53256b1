// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SIMD Arithmetic Kernels Module** - *Vectorised Elementwise Operations*
//!
//! Inner SIMD-accelerated implementations using `std::simd`.
//! Prefer dispatch.rs for easily handling the general case, otherwise you can
//! use these inner functions directly.
//!
//! ## Overview
//! - **Portable SIMD**: Uses `std::simd` for cross-platform vectorisation with
//!   compile-time lane counts from build.rs
//! - **Aligned split**: Each body processes the largest multiple of the lane
//!   count, then finishes the remainder with the scalar algorithm on the same
//!   data; the tail is never skipped or zero-padded
//! - **Building blocks**: For the dispatch layer, or for low-level hot loops
//!   where one wants to fully avoid abstraction overhead

use core::simd::{Simd, SimdElement};
use std::ops::{Add, Mul};

use num_traits::Float;

/// SIMD linear-transform kernel: `out[i] = scale * data[i] + offset`.
/// Vectorised over the aligned prefix with a scalar tail.
#[inline(always)]
pub fn linear_dense_body_simd<T, const LANES: usize>(data: &[T], scale: T, offset: T, out: &mut [T])
where
    T: Float + SimdElement,
    Simd<T, LANES>: Add<Output = Simd<T, LANES>> + Mul<Output = Simd<T, LANES>>,
{
    let n = data.len();
    let vectorisable = n / LANES * LANES;
    let scale_v = Simd::<T, LANES>::splat(scale);
    let offset_v = Simd::<T, LANES>::splat(offset);

    let mut i = 0;
    while i < vectorisable {
        let v = Simd::<T, LANES>::from_slice(&data[i..i + LANES]);
        let r = scale_v * v + offset_v;
        r.copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Scalar tail
    for idx in vectorisable..n {
        out[idx] = scale * data[idx] + offset;
    }
}

/// SIMD elementwise vector addition kernel: `out[i] = lhs[i] + rhs[i]`.
/// Vectorised over the aligned prefix with a scalar tail.
#[inline(always)]
pub fn add_dense_body_simd<T, const LANES: usize>(lhs: &[T], rhs: &[T], out: &mut [T])
where
    T: Float + SimdElement,
    Simd<T, LANES>: Add<Output = Simd<T, LANES>>,
{
    let n = lhs.len();
    let vectorisable = n / LANES * LANES;

    let mut i = 0;
    while i < vectorisable {
        let a = Simd::<T, LANES>::from_slice(&lhs[i..i + LANES]);
        let b = Simd::<T, LANES>::from_slice(&rhs[i..i + LANES]);
        let r = a + b;
        r.copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Scalar tail
    for idx in vectorisable..n {
        out[idx] = lhs[idx] + rhs[idx];
    }
}

/// SIMD broadcast addition kernel: `out[i] = data[i] + shift`.
/// Vectorised over the aligned prefix with a scalar tail.
#[inline(always)]
pub fn add_scalar_dense_body_simd<T, const LANES: usize>(data: &[T], shift: T, out: &mut [T])
where
    T: Float + SimdElement,
    Simd<T, LANES>: Add<Output = Simd<T, LANES>>,
{
    let n = data.len();
    let vectorisable = n / LANES * LANES;
    let shift_v = Simd::<T, LANES>::splat(shift);

    let mut i = 0;
    while i < vectorisable {
        let v = Simd::<T, LANES>::from_slice(&data[i..i + LANES]);
        let r = v + shift_v;
        r.copy_to_slice(&mut out[i..i + LANES]);
        i += LANES;
    }

    // Scalar tail
    for idx in vectorisable..n {
        out[idx] = data[idx] + shift;
    }
}
