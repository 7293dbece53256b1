// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Contains the execution-strategy selector used to route kernel calls

/// Execution strategy for the dual-path kernels.
///
/// Selection is always an explicit caller decision, never runtime capability
/// detection, which keeps the scalar/vectorised equivalence contract
/// deterministic and testable across platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Portable scalar loop; the reference implementation.
    Scalar,
    /// `std::simd` chunked loop with a scalar tail for the remainder.
    ///
    /// Requires the `simd` crate feature; without it this mode degrades to
    /// the scalar body.
    Vectorised,
}
