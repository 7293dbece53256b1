#![allow(unused)]

//! Shared assertion helpers for the integration suites.

pub fn assert_close(a: f64, e: f64, tol: f64) {
    assert!(
        (a - e).abs() <= tol,
        "mismatch: got {a}, expect {e} (tol={tol})"
    );
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            (ai - ei).abs() <= tol,
            "idx {i}: got {ai}, expect {ei} (tol={tol})"
        );
    }
}

/// Widens any float slice to f64 for comparison against expected values.
pub fn widen<T: Into<f64> + Copy>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.into()).collect()
}
