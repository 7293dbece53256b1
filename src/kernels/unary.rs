// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Unary Kernels Module** - *Elementwise Reciprocal*
//!
//! Single-sequence transformation kernels. Reciprocal is the one operation in
//! the pipeline without a vectorised form: it accepts the mode flag for
//! signature parity with the dual-path kernels but both modes share the same
//! scalar body.

use num_traits::Float;

use crate::errors::KernelError;
use crate::operators::ExecutionMode;
use crate::utils::prealloc_vec;

/// Computes `1 / data[i]` elementwise into a fresh sequence.
///
/// Every element must sit strictly above `zero_threshold`; any element at or
/// below it fails the whole operation with `DivideByZero` before output is
/// allocated. Behaviour is identical for both execution modes.
#[inline(always)]
pub fn reciprocal<T: Float>(
    data: &[T],
    zero_threshold: T,
    _mode: ExecutionMode,
) -> Result<Vec<T>, KernelError> {
    if data.iter().any(|v| *v <= zero_threshold) {
        return Err(KernelError::DivideByZero(format!(
            "reciprocal: element at or below zero threshold {}",
            zero_threshold.to_f64().unwrap_or(f64::NAN)
        )));
    }

    let mut out = prealloc_vec::<T>(data.len());
    for (i, &v) in data.iter().enumerate() {
        out[i] = T::one() / v;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::reciprocal;
    use crate::config::ZERO_THRESHOLD;
    use crate::errors::KernelError;
    use crate::operators::ExecutionMode::{Scalar, Vectorised};

    #[test]
    fn reciprocal_elementwise() {
        let v = [123.87_f64, 43.59, 92.18, 0.5, 2.0];
        let out = reciprocal(&v, ZERO_THRESHOLD, Scalar).unwrap();
        for (r, x) in out.iter().zip(v.iter()) {
            assert!((r - 1.0 / x).abs() < 1e-12);
        }
    }

    #[test]
    fn reciprocal_mode_independent() {
        let v = [123.87_f64, 43.59, 92.18];
        let scalar = reciprocal(&v, ZERO_THRESHOLD, Scalar).unwrap();
        let vectorised = reciprocal(&v, ZERO_THRESHOLD, Vectorised).unwrap();
        assert_eq!(scalar, vectorised);
    }

    #[test]
    fn reciprocal_zero_rejected() {
        let v = [1.0_f64, 0.0, 2.0];
        assert!(matches!(
            reciprocal(&v, ZERO_THRESHOLD, Scalar),
            Err(KernelError::DivideByZero(_))
        ));
    }

    #[test]
    fn reciprocal_below_threshold_rejected() {
        // Positive but inside the zero guard band.
        let v = [1.0_f64, 1e-10];
        assert!(matches!(
            reciprocal(&v, ZERO_THRESHOLD, Scalar),
            Err(KernelError::DivideByZero(_))
        ));
    }

    #[test]
    fn reciprocal_f32_threshold_cast() {
        let v = [4.0_f32, 8.0];
        let out = reciprocal(&v, ZERO_THRESHOLD as f32, Scalar).unwrap();
        assert_eq!(out, vec![0.25, 0.125]);
    }
}
