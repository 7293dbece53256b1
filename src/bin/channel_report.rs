// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Loads a channel pipeline, computes every derived quantity in both
//! execution modes, cross-checks the two paths, and prints the derived
//! baseline. Source paths default to the config constants and can be
//! overridden with two positional arguments.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use channel_kernels::config::{DEFAULT_CHANNELS_FILE, DEFAULT_PARAMETERS_FILE};
use channel_kernels::kernels::comparison::verify_equivalent;
use channel_kernels::{ChannelPipeline, ExecutionMode, KernelError};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let channels =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_CHANNELS_FILE.to_string()));
    let parameters =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_PARAMETERS_FILE.to_string()));

    match run(&channels, &parameters) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(channels: &Path, parameters: &Path) -> Result<(), KernelError> {
    let pipeline = ChannelPipeline::<f32>::load(channels, parameters)?;
    let tolerances = pipeline.tolerances();

    let scaled_scalar = pipeline.scaled(ExecutionMode::Scalar)?;
    let scaled_vectorised = pipeline.scaled(ExecutionMode::Vectorised)?;

    let baseline_scalar = pipeline.baseline(ExecutionMode::Scalar)?;
    let baseline_vectorised = pipeline.baseline(ExecutionMode::Vectorised)?;

    let reciprocals = pipeline.reciprocals()?;

    let rebased_scalar = pipeline.rebased(ExecutionMode::Scalar)?;
    let rebased_vectorised = pipeline.rebased(ExecutionMode::Vectorised)?;

    // Cross-check the two execution paths. A disagreement points at a
    // platform-specific numeric bug, not a usage error, so report it and
    // still print the result.
    let tolerance = tolerances.equality_threshold as f32;
    if (baseline_scalar - baseline_vectorised).abs() >= tolerances.equality_threshold
        || !verify_equivalent(&scaled_scalar, &scaled_vectorised, tolerance)
        || !verify_equivalent(&rebased_scalar, &rebased_vectorised, tolerance)
    {
        log::error!(
            "scalar and vectorised paths disagree beyond {}",
            tolerances.equality_threshold
        );
    }

    println!("channels loaded: {}", pipeline.channels().len());
    println!("reciprocal elements: {}", reciprocals.len());
    println!("computed b = {baseline_scalar}");
    Ok(())
}
