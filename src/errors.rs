// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel and Pipeline Error Handling*
//!
//! Error types for kernel operations and pipeline loading with structured
//! error reporting.
//!
//! ## Error Categories
//! - **Input Errors**: Empty sequences and array length mismatches
//! - **Boundary Errors**: Reciprocal of elements at or below the zero threshold
//! - **Source Errors**: Missing required parameters, unreadable text sources
//!
//! All errors include contextual message space for debugging.

use core::fmt;
use std::error::Error;

/// Error type for all kernel and pipeline operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, enabling precise debugging and error reporting.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// An operation requiring at least one element received a zero-length sequence.
    EmptyInput(String),

    /// Array length mismatch between operands.
    LengthMismatch(String),

    /// Reciprocal encountered an element at or below the zero threshold.
    DivideByZero(String),

    /// A required parameter key was absent after parsing. Fatal to pipeline
    /// construction: the pipeline must not exist in a partially-initialised state.
    MissingParameter(String),

    /// A channel or parameter source could not be opened or read.
    SourceUnavailable(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::DivideByZero(msg) => write!(f, "Divide by Zero error: {}", msg),
            KernelError::MissingParameter(msg) => write!(f, "Missing parameter: {}", msg),
            KernelError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl Error for KernelError {}
