// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Channel Pipeline Module** - *Derived Channel Quantities*
//!
//! Stateful composition of the numeric kernels over one loaded channel
//! sequence and its two line parameters (slope and intercept).
//!
//! Derived quantities are never cached: each call recomputes its dependency
//! chain from scratch, which suits the batch usage pattern and guarantees
//! that repeated calls without an intervening [`ChannelPipeline::refresh`]
//! return identical results. The pipeline does not self-validate cross-mode
//! equivalence; callers compare paired scalar/vectorised outputs with
//! [`crate::kernels::comparison::verify_equivalent`] when cross-validation
//! is wanted.
//!
//! State is single-owner and not synchronised: interleaving a refresh with a
//! derived-quantity computation from another thread is outside the model.

pub mod parser;

use std::collections::HashMap;
use std::path::Path;

use crate::config::{Tolerances, INTERCEPT_KEY, SLOPE_KEY};
use crate::errors::KernelError;
use crate::operators::ExecutionMode;
use crate::traits::element::ChannelElement;

/// One channel sequence plus the slope/intercept parameters loaded from the
/// two text sources, and the tolerances fixed at construction.
#[derive(Debug, Clone)]
pub struct ChannelPipeline<T: ChannelElement> {
    channels: Vec<T>,
    slope: T,
    intercept: T,
    tolerances: Tolerances,
}

impl<T: ChannelElement> ChannelPipeline<T> {
    /// Loads a pipeline from the channel and parameter sources with the
    /// default tolerances.
    ///
    /// An unreadable channel source yields an empty sequence (channel data is
    /// optional at parse time), but a missing slope or intercept parameter is
    /// fatal: the pipeline is never constructed partially initialised.
    pub fn load(channels: &Path, parameters: &Path) -> Result<Self, KernelError> {
        Self::load_with(channels, parameters, Tolerances::default())
    }

    /// Loads a pipeline with caller-supplied tolerances.
    pub fn load_with(
        channels: &Path,
        parameters: &Path,
        tolerances: Tolerances,
    ) -> Result<Self, KernelError> {
        let values = parser::parse_channels::<T>(channels);
        let params = parser::parse_parameters::<T>(parameters);
        let slope = required_parameter(&params, SLOPE_KEY, parameters)?;
        let intercept = required_parameter(&params, INTERCEPT_KEY, parameters)?;
        Ok(Self {
            channels: values,
            slope,
            intercept,
            tolerances,
        })
    }

    /// Discards the current state and re-runs the load against the given
    /// sources.
    ///
    /// Replacement is wholesale: a fresh parse of both sources, never an
    /// incremental patch. Sequences previously returned by the derived
    /// operations are owned by their callers and are not updated. If the
    /// reload fails the existing state is left untouched.
    pub fn refresh(&mut self, channels: &Path, parameters: &Path) -> Result<(), KernelError> {
        *self = Self::load_with(channels, parameters, self.tolerances)?;
        Ok(())
    }

    /// The loaded channel sequence.
    pub fn channels(&self) -> &[T] {
        &self.channels
    }

    /// The loaded slope parameter.
    pub fn slope(&self) -> T {
        self.slope
    }

    /// The loaded intercept parameter.
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// The tolerances fixed at construction.
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Y = slope · X + intercept, elementwise under the requested mode.
    pub fn scaled(&self, mode: ExecutionMode) -> Result<Vec<T>, KernelError> {
        T::linear(&self.channels, self.slope, self.intercept, mode)
    }

    /// A = 1 / X, elementwise. Identical regardless of mode.
    pub fn reciprocals(&self) -> Result<Vec<T>, KernelError> {
        T::reciprocal(
            &self.channels,
            T::from_f64(self.tolerances.zero_threshold),
            ExecutionMode::Scalar,
        )
    }

    /// b = mean(A + Y) as f64, with the addition and the mean both under the
    /// requested mode.
    pub fn baseline(&self, mode: ExecutionMode) -> Result<f64, KernelError> {
        let reciprocals = self.reciprocals()?;
        let scaled = self.scaled(mode)?;
        let combined = T::add(&reciprocals, &scaled, mode)?;
        T::mean(&combined, mode)
    }

    /// C = X + b, broadcasting the derived baseline under the requested mode.
    pub fn rebased(&self, mode: ExecutionMode) -> Result<Vec<T>, KernelError> {
        let baseline = self.baseline(mode)?;
        T::add_scalar(&self.channels, T::from_f64(baseline), mode)
    }
}

fn required_parameter<T: ChannelElement>(
    params: &HashMap<char, T>,
    key: char,
    source: &Path,
) -> Result<T, KernelError> {
    params.get(&key).copied().ok_or_else(|| {
        KernelError::MissingParameter(format!(
            "required parameter '{}' absent from {}",
            key,
            source.display()
        ))
    })
}
