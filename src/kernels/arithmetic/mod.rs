// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Kernels Module** - *Dual-Path Elementwise Operations*
//!
//! Elementwise channel operations, each implemented twice: a portable scalar
//! reference form and a SIMD form that must agree with it within the
//! configured equality threshold.
//!
//! ## Modules
//! - **`dispatch`**: Entry points selecting the SIMD or scalar body from the
//!   caller's `ExecutionMode` flag
//! - **`simd`**: SIMD-accelerated implementations using `std::simd` with
//!   portable vectorisation
//! - **`std`**: Scalar reference implementations
//!
//! ## Operations
//! Linear transform (`scale * x + offset`), vector+vector addition, and
//! broadcast vector+scalar addition.
//!
//! ## Scope
//! **These do not leverage parallel-thread processing; the vectorised paths
//! exploit SIMD lanes within a single thread.**

pub mod dispatch;
#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

// Shared tests for SIMD and Std
