//! Cross-path equivalence properties of the numeric kernels.
//!
//! Each dual-path kernel must agree with its scalar reference within the
//! configured equality threshold for lengths on both sides of the SIMD lane
//! width, including the degenerate single-element case.

mod util;

use channel_kernels::config::{EQUALITY_THRESHOLD, ZERO_THRESHOLD};
use channel_kernels::kernels::aggregate::{mean_f32, mean_f64};
use channel_kernels::kernels::arithmetic::dispatch::{
    add_f32, add_f64, add_scalar_f32, add_scalar_f64, linear_f32, linear_f64,
};
use channel_kernels::kernels::comparison::verify_equivalent;
use channel_kernels::kernels::unary::reciprocal;
use channel_kernels::ExecutionMode::{Scalar, Vectorised};
use channel_kernels::KernelError;
use util::assert_close;

const LENGTHS: [usize; 8] = [1, 2, 5, 8, 9, 16, 100, 257];

/// Deterministic non-trivial test sequence with all elements well above the
/// zero threshold.
fn ramp_f64(len: usize) -> Vec<f64> {
    (0..len).map(|i| 0.37 * i as f64 + 0.25).collect()
}

fn ramp_f32(len: usize) -> Vec<f32> {
    (0..len).map(|i| 0.37 * i as f32 + 0.25).collect()
}

#[test]
fn linear_paths_agree_f64() {
    for len in LENGTHS {
        let v = ramp_f64(len);
        let scalar = linear_f64(&v, 0.89, 12.16, Scalar).unwrap();
        let vectorised = linear_f64(&v, 0.89, 12.16, Vectorised).unwrap();
        assert!(
            verify_equivalent(&scalar, &vectorised, EQUALITY_THRESHOLD),
            "len {len}"
        );
    }
}

#[test]
fn linear_paths_agree_f32() {
    for len in LENGTHS {
        let v = ramp_f32(len);
        let scalar = linear_f32(&v, 0.89, 12.16, Scalar).unwrap();
        let vectorised = linear_f32(&v, 0.89, 12.16, Vectorised).unwrap();
        assert!(
            verify_equivalent(&scalar, &vectorised, EQUALITY_THRESHOLD as f32),
            "len {len}"
        );
    }
}

#[test]
fn add_paths_agree() {
    for len in LENGTHS {
        let v = ramp_f64(len);
        let u: Vec<f64> = v.iter().map(|x| 10.0 - x).collect();
        let scalar = add_f64(&v, &u, Scalar).unwrap();
        let vectorised = add_f64(&v, &u, Vectorised).unwrap();
        assert!(
            verify_equivalent(&scalar, &vectorised, EQUALITY_THRESHOLD),
            "len {len}"
        );
        // x + (10 - x) is exactly 10 in both paths for these inputs.
        for s in &scalar {
            assert_close(*s, 10.0, EQUALITY_THRESHOLD);
        }
    }
}

#[test]
fn add_mismatch_fails_in_both_modes() {
    let v = ramp_f64(9);
    let u = ramp_f64(8);
    for mode in [Scalar, Vectorised] {
        assert!(matches!(
            add_f64(&v, &u, mode),
            Err(KernelError::LengthMismatch(_))
        ));
        let v32 = ramp_f32(9);
        let u32 = ramp_f32(8);
        assert!(matches!(
            add_f32(&v32, &u32, mode),
            Err(KernelError::LengthMismatch(_))
        ));
    }
}

#[test]
fn add_scalar_paths_agree() {
    for len in LENGTHS {
        let v = ramp_f64(len);
        let scalar = add_scalar_f64(&v, -3.75, Scalar).unwrap();
        let vectorised = add_scalar_f64(&v, -3.75, Vectorised).unwrap();
        assert!(
            verify_equivalent(&scalar, &vectorised, EQUALITY_THRESHOLD),
            "len {len}"
        );
    }
}

#[test]
fn mean_paths_agree_despite_reordering() {
    for len in LENGTHS {
        let v = ramp_f64(len);
        let scalar = mean_f64(&v, Scalar).unwrap();
        let vectorised = mean_f64(&v, Vectorised).unwrap();
        assert_close(scalar, vectorised, EQUALITY_THRESHOLD);

        let v32 = ramp_f32(len);
        let scalar32 = mean_f32(&v32, Scalar).unwrap();
        let vectorised32 = mean_f32(&v32, Vectorised).unwrap();
        assert_close(scalar32, vectorised32, EQUALITY_THRESHOLD);
    }
}

#[test]
fn reciprocal_succeeds_above_threshold() {
    let v = [123.87_f64, 43.59, 92.18, 0.75, 19.0];
    for mode in [Scalar, Vectorised] {
        let out = reciprocal(&v, ZERO_THRESHOLD, mode).unwrap();
        for (r, x) in out.iter().zip(v.iter()) {
            assert_close(*r, 1.0 / x, 1e-12);
        }
    }
}

#[test]
fn reciprocal_rejects_zero_in_both_modes() {
    let v = [123.87_f64, 0.0, 92.18];
    for mode in [Scalar, Vectorised] {
        assert!(matches!(
            reciprocal(&v, ZERO_THRESHOLD, mode),
            Err(KernelError::DivideByZero(_))
        ));
    }
}

#[test]
fn outputs_are_fresh_allocations() {
    // Inputs must be untouched after every kernel call.
    let v = ramp_f64(16);
    let before = v.clone();
    let _ = linear_f64(&v, 2.0, 1.0, Vectorised).unwrap();
    let _ = add_scalar_f64(&v, 5.0, Vectorised).unwrap();
    let _ = mean_f64(&v, Vectorised).unwrap();
    let _ = reciprocal(&v, ZERO_THRESHOLD, Scalar).unwrap();
    assert_eq!(v, before);
}
