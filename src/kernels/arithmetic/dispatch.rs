// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Dispatch Module** - *Mode-Flagged Entry Points*
//!
//! Public elementwise kernels routing each call to the scalar or SIMD body
//! according to the caller-supplied [`ExecutionMode`].
//!
//! ## Overview
//! - **Dual-path execution**: Vectorised path with scalar reference path,
//!   chosen by an explicit flag rather than runtime capability detection
//! - **Type-specific dispatch**: Generated entry points for f32 and f64
//! - **Build-time SIMD lanes**: Lane counts determined at build time based on
//!   target architecture
//!
//! Each entry point validates its input, allocates a fresh output buffer, and
//! never aliases input with output.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use crate::errors::KernelError;
#[cfg(feature = "simd")]
use crate::kernels::arithmetic::simd::{
    add_dense_body_simd, add_scalar_dense_body_simd, linear_dense_body_simd,
};
use crate::kernels::arithmetic::std::{
    add_dense_body_std, add_scalar_dense_body_std, linear_dense_body_std,
};
use crate::operators::ExecutionMode;
use crate::utils::{confirm_equal_len, confirm_non_empty, prealloc_vec};

// Kernels

/// Generates linear-transform entry points with mode-flagged SIMD/scalar dispatch.
macro_rules! impl_linear_float {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        #[doc = concat!(
            "Computes `scale * data[i] + offset` over a `&[", stringify!($ty),
            "]`, vectorised with ", stringify!($lanes), " lanes when \
            `ExecutionMode::Vectorised` is requested and the `simd` feature is \
            enabled, otherwise via the scalar reference loop. \
            Fails with `EmptyInput` on a zero-length sequence."
        )]
        #[inline(always)]
        pub fn $fn_name(
            data: &[$ty],
            scale: $ty,
            offset: $ty,
            mode: ExecutionMode,
        ) -> Result<Vec<$ty>, KernelError> {
            confirm_non_empty("linear transform", data.len())?;

            let mut out = prealloc_vec::<$ty>(data.len());
            match mode {
                #[cfg(feature = "simd")]
                ExecutionMode::Vectorised => {
                    linear_dense_body_simd::<$ty, $lanes>(data, scale, offset, &mut out)
                }
                #[cfg(not(feature = "simd"))]
                ExecutionMode::Vectorised => {
                    linear_dense_body_std::<$ty>(data, scale, offset, &mut out)
                }
                ExecutionMode::Scalar => {
                    linear_dense_body_std::<$ty>(data, scale, offset, &mut out)
                }
            }
            Ok(out)
        }
    };
}

/// Generates vector+vector addition entry points with mode-flagged dispatch.
macro_rules! impl_add_float {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        #[doc = concat!(
            "Computes the elementwise sum of two equal-length `&[", stringify!($ty),
            "]`, vectorised with ", stringify!($lanes), " lanes when \
            `ExecutionMode::Vectorised` is requested and the `simd` feature is \
            enabled, otherwise via the scalar reference loop. \
            Fails with `LengthMismatch` for unequal lengths and `EmptyInput` \
            for zero-length sequences."
        )]
        #[inline(always)]
        pub fn $fn_name(
            lhs: &[$ty],
            rhs: &[$ty],
            mode: ExecutionMode,
        ) -> Result<Vec<$ty>, KernelError> {
            confirm_equal_len("vector addition", lhs.len(), rhs.len())?;
            confirm_non_empty("vector addition", lhs.len())?;

            let mut out = prealloc_vec::<$ty>(lhs.len());
            match mode {
                #[cfg(feature = "simd")]
                ExecutionMode::Vectorised => {
                    add_dense_body_simd::<$ty, $lanes>(lhs, rhs, &mut out)
                }
                #[cfg(not(feature = "simd"))]
                ExecutionMode::Vectorised => add_dense_body_std::<$ty>(lhs, rhs, &mut out),
                ExecutionMode::Scalar => add_dense_body_std::<$ty>(lhs, rhs, &mut out),
            }
            Ok(out)
        }
    };
}

/// Generates broadcast (vector+scalar) addition entry points with mode-flagged dispatch.
macro_rules! impl_add_scalar_float {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        #[doc = concat!(
            "Computes `data[i] + shift` over a `&[", stringify!($ty),
            "]`, vectorised with ", stringify!($lanes), " lanes when \
            `ExecutionMode::Vectorised` is requested and the `simd` feature is \
            enabled, otherwise via the scalar reference loop. \
            Fails with `EmptyInput` on a zero-length sequence."
        )]
        #[inline(always)]
        pub fn $fn_name(
            data: &[$ty],
            shift: $ty,
            mode: ExecutionMode,
        ) -> Result<Vec<$ty>, KernelError> {
            confirm_non_empty("broadcast addition", data.len())?;

            let mut out = prealloc_vec::<$ty>(data.len());
            match mode {
                #[cfg(feature = "simd")]
                ExecutionMode::Vectorised => {
                    add_scalar_dense_body_simd::<$ty, $lanes>(data, shift, &mut out)
                }
                #[cfg(not(feature = "simd"))]
                ExecutionMode::Vectorised => {
                    add_scalar_dense_body_std::<$ty>(data, shift, &mut out)
                }
                ExecutionMode::Scalar => add_scalar_dense_body_std::<$ty>(data, shift, &mut out),
            }
            Ok(out)
        }
    };
}

// Generates f32, f64 variants using lane counts via simd_lanes.rs

impl_linear_float!(linear_f32, f32, W32);
impl_linear_float!(linear_f64, f64, W64);

impl_add_float!(add_f32, f32, W32);
impl_add_float!(add_f64, f64, W64);

impl_add_scalar_float!(add_scalar_f32, f32, W32);
impl_add_scalar_float!(add_scalar_f64, f64, W64);
