// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Tolerances and Source Defaults*
//!
//! Global configuration constants controlling kernel behaviour, plus the
//! [`Tolerances`] value handed to a pipeline at construction. The two
//! thresholds are observable contracts: changing either silently changes the
//! pass/fail behaviour of equivalence checks and reciprocal guards.

/// Minimum magnitude below which the reciprocal kernel treats an element as
/// zero and fails rather than dividing.
pub const ZERO_THRESHOLD: f64 = 1e-9;

/// Maximum elementwise difference at which scalar-path and vectorised-path
/// outputs are still considered equivalent.
///
/// The two paths accumulate in different orders (the vectorised mean reduces
/// chunk-wise before accumulating serially), so equivalence is checked
/// against this tolerance rather than exact equality.
pub const EQUALITY_THRESHOLD: f64 = 1e-5;

/// Parameter key carrying the linear-transform slope.
pub const SLOPE_KEY: char = 'm';

/// Parameter key carrying the linear-transform intercept.
pub const INTERCEPT_KEY: char = 'c';

/// Default channel source consumed by the `channel-report` binary.
pub const DEFAULT_CHANNELS_FILE: &str = "data/channels.txt";

/// Default parameter source consumed by the `channel-report` binary.
pub const DEFAULT_PARAMETERS_FILE: &str = "data/parameters.txt";

/// Numeric tolerances for one pipeline instance.
///
/// Passed in at construction rather than read from ambient global state, so a
/// caller can tighten or loosen the contract per pipeline. [`Default`] yields
/// the documented constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// See [`ZERO_THRESHOLD`].
    pub zero_threshold: f64,
    /// See [`EQUALITY_THRESHOLD`].
    pub equality_threshold: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            zero_threshold: ZERO_THRESHOLD,
            equality_threshold: EQUALITY_THRESHOLD,
        }
    }
}
