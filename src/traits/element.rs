// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Element-width abstraction for the channel pipeline.
//!
//! A pipeline fixes its numeric width once at instantiation; this trait is
//! the seam that routes the generic pipeline onto the per-type dispatch
//! functions, whose SIMD lane counts differ per width.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::errors::KernelError;
use crate::kernels::aggregate::{mean_f32, mean_f64};
use crate::kernels::arithmetic::dispatch::{
    add_f32, add_f64, add_scalar_f32, add_scalar_f64, linear_f32, linear_f64,
};
use crate::kernels::comparison::verify_equivalent;
use crate::kernels::unary::reciprocal;
use crate::operators::ExecutionMode;

/// A numeric element width usable as the fixed type of a whole pipeline.
///
/// Implemented for `f32` and `f64`. Mixed-width operations within one
/// pipeline instance are ruled out by construction: every kernel call goes
/// through the one implementing type.
pub trait ChannelElement:
    Copy + PartialOrd + Debug + Display + FromStr + 'static
{
    /// Narrows (or passes through) an f64, for thresholds and the derived
    /// baseline scalar.
    fn from_f64(value: f64) -> Self;

    /// Widens to f64 for reporting and tolerance arithmetic.
    fn to_f64(self) -> f64;

    /// `scale * data[i] + offset` under the requested mode.
    fn linear(
        data: &[Self],
        scale: Self,
        offset: Self,
        mode: ExecutionMode,
    ) -> Result<Vec<Self>, KernelError>;

    /// Elementwise sum of two equal-length sequences under the requested mode.
    fn add(lhs: &[Self], rhs: &[Self], mode: ExecutionMode) -> Result<Vec<Self>, KernelError>;

    /// `data[i] + shift` under the requested mode.
    fn add_scalar(
        data: &[Self],
        shift: Self,
        mode: ExecutionMode,
    ) -> Result<Vec<Self>, KernelError>;

    /// Mean as f64, widened before accumulation, under the requested mode.
    fn mean(data: &[Self], mode: ExecutionMode) -> Result<f64, KernelError>;

    /// `1 / data[i]`; identical for both modes.
    fn reciprocal(
        data: &[Self],
        zero_threshold: Self,
        mode: ExecutionMode,
    ) -> Result<Vec<Self>, KernelError>;

    /// Elementwise agreement within `tolerance`; false on length mismatch.
    fn approx_equal(lhs: &[Self], rhs: &[Self], tolerance: f64) -> bool;
}

macro_rules! impl_channel_element {
    ($ty:ty, $linear:ident, $add:ident, $add_scalar:ident, $mean:ident) => {
        impl ChannelElement for $ty {
            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn linear(
                data: &[Self],
                scale: Self,
                offset: Self,
                mode: ExecutionMode,
            ) -> Result<Vec<Self>, KernelError> {
                $linear(data, scale, offset, mode)
            }

            #[inline(always)]
            fn add(
                lhs: &[Self],
                rhs: &[Self],
                mode: ExecutionMode,
            ) -> Result<Vec<Self>, KernelError> {
                $add(lhs, rhs, mode)
            }

            #[inline(always)]
            fn add_scalar(
                data: &[Self],
                shift: Self,
                mode: ExecutionMode,
            ) -> Result<Vec<Self>, KernelError> {
                $add_scalar(data, shift, mode)
            }

            #[inline(always)]
            fn mean(data: &[Self], mode: ExecutionMode) -> Result<f64, KernelError> {
                $mean(data, mode)
            }

            #[inline(always)]
            fn reciprocal(
                data: &[Self],
                zero_threshold: Self,
                mode: ExecutionMode,
            ) -> Result<Vec<Self>, KernelError> {
                reciprocal::<$ty>(data, zero_threshold, mode)
            }

            #[inline(always)]
            fn approx_equal(lhs: &[Self], rhs: &[Self], tolerance: f64) -> bool {
                verify_equivalent(lhs, rhs, tolerance as $ty)
            }
        }
    };
}

impl_channel_element!(f32, linear_f32, add_f32, add_scalar_f32, mean_f32);
impl_channel_element!(f64, linear_f64, add_f64, add_scalar_f64, mean_f64);
