//! Gain validation shared by the filters.
//!
//! Gains are expected to lie in the open interval (0, 1). Assigning a value outside of it is not
//! an error: a warning is logged and reported back to the caller as an [`InvalidGain`], and the
//! value is clamped. Only strictly negative values and values strictly greater than 1 are
//! replaced. The boundaries 0 and 1 are stored as given even though they trigger the warning.

use thiserror::Error;

/// Value a negative gain is replaced with.
pub const NEGATIVE_GAIN_REPLACEMENT: f32 = 0.1;

/// Value a gain greater than 1 is replaced with.
pub const MAX_GAIN: f32 = 1.0;

/// Diagnostic produced when a gain outside of (0, 1) is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("gain should be non-zero positive and less than 1, got {requested} (using {applied})")]
pub struct InvalidGain {
    /// The value that was passed in.
    pub requested: f32,
    /// The value that was actually stored.
    pub applied: f32,
}

/// Returns whether `gain` lies in the open interval (0, 1).
pub fn is_valid(gain: f32) -> bool {
    gain > 0.0 && gain < 1.0
}

/// Applies the clamping policy to a requested gain.
///
/// Returns the value to store, and an [`InvalidGain`] if `requested` failed validation. The
/// warning is also logged.
pub fn clamp(requested: f32) -> (f32, Option<InvalidGain>) {
    let applied = if requested < 0.0 {
        NEGATIVE_GAIN_REPLACEMENT
    } else if requested > 1.0 {
        MAX_GAIN
    } else {
        // also covers exactly 0, exactly 1 and NaN
        requested
    };

    if is_valid(requested) {
        (applied, None)
    } else {
        let warning = InvalidGain { requested, applied };
        log::warn!("{}", warning);
        (applied, Some(warning))
    }
}

/// Derives the rate gain of an alpha-beta filter from its position gain.
pub fn derived_beta(alpha: f32) -> f32 {
    alpha * alpha / (2.0 - alpha)
}
