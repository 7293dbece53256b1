// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Aggregation Kernels Module** - *Dual-Path Mean Reduction*
//!
//! Mean reduction over a channel sequence with SIMD acceleration.
//!
//! Both paths widen every element to f64 before accumulating, bounding error
//! growth regardless of the element width. The scalar path accumulates
//! serially in input order; the vectorised path reduces chunk-width groups
//! with a horizontal pairwise sum and accumulates the remainder serially.
//! The reordered summation is why cross-path equivalence is checked against
//! a tolerance rather than exact equality.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

#[cfg(feature = "simd")]
use std::simd::{num::SimdFloat, Simd};

use crate::errors::KernelError;
use crate::operators::ExecutionMode;
use crate::utils::confirm_non_empty;

/// Generates mean-reduction entry points for float types using SIMD or
/// scalar fallback.
macro_rules! impl_mean_float {
    ($name:ident, $ty:ty, $LANES:expr) => {
        #[doc = concat!(
            "Computes the mean of a `&[", stringify!($ty), "]` as an f64, \
            widening each element to f64 before accumulation. \
            `ExecutionMode::Vectorised` reduces in ", stringify!($LANES),
            "-lane groups with a horizontal sum and finishes the remainder \
            serially. Fails with `EmptyInput` on a zero-length sequence."
        )]
        #[inline(always)]
        pub fn $name(data: &[$ty], mode: ExecutionMode) -> Result<f64, KernelError> {
            confirm_non_empty("mean", data.len())?;

            match mode {
                #[cfg(feature = "simd")]
                ExecutionMode::Vectorised => {
                    const N: usize = $LANES;
                    let len = data.len();
                    let mut sum = 0.0_f64;
                    let mut i = 0;
                    while i + N <= len {
                        let v = Simd::<$ty, N>::from_slice(&data[i..i + N]);
                        sum += v.cast::<f64>().reduce_sum();
                        i += N;
                    }
                    // Scalar tail
                    for &x in &data[i..] {
                        sum += x as f64;
                    }
                    Ok(sum / len as f64)
                }
                _ => {
                    // Serial accumulation in input order; the reference
                    // summation order for the equivalence contract.
                    let mut sum = 0.0_f64;
                    for &x in data {
                        sum += x as f64;
                    }
                    Ok(sum / data.len() as f64)
                }
            }
        }
    };
}

impl_mean_float!(mean_f32, f32, W32);
impl_mean_float!(mean_f64, f64, W64);
