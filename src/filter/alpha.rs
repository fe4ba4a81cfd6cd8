//! Alpha filter (exponential smoothing of a single value).

use std::convert::Infallible;

use super::{gain, Filter, InvalidGain};

/// An alpha filter, which smooths a value by moving its estimate a fixed fraction towards every
/// new measurement.
///
/// This is an Exponential Moving Average seeded with an explicit initial estimate instead of the
/// first measurement.
///
/// The `alpha` gain defines how quickly the weight of older measurements decays. Values close to
/// 1.0 very strongly favor recent measurements, while values close to 0.0 produce a smoother, but
/// more sluggish estimate.
#[derive(Debug, Clone)]
pub struct AlphaFilter {
    x: f32,
    alpha: f32,
    initial: f32,
}

impl AlphaFilter {
    /// Gain used by newly created filters.
    pub const DEFAULT_ALPHA: f32 = 0.2;

    /// Creates a new alpha filter with the initial estimate `x` and the default gain.
    pub fn new(x: f32) -> Self {
        Self {
            x,
            alpha: Self::DEFAULT_ALPHA,
            initial: x,
        }
    }

    /// Returns `self` with the gain set to `alpha`.
    ///
    /// See [`AlphaFilter::set_alpha`] for how out-of-range values are handled.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Returns the current gain.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sets the gain.
    ///
    /// The gain should lie in between 0.0 and 1.0 (exclusive). If it does not, a warning is
    /// logged and returned. Negative values are replaced with 0.1, and values above 1.0 with 1.0;
    /// 0.0 and 1.0 themselves are kept.
    pub fn set_alpha(&mut self, alpha: f32) -> Option<InvalidGain> {
        let (alpha, warning) = gain::clamp(alpha);
        self.alpha = alpha;
        warning
    }

    /// Returns the current estimate.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Overwrites the current estimate.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Updates the estimate with the measurement `z` and returns the new estimate.
    pub fn filter(&mut self, z: f32) -> f32 {
        let residual = z - self.x;
        self.x += self.alpha * residual;

        log::trace!("alpha filter: z={} residual={} x={}", z, residual, self.x);
        self.x
    }
}

impl Default for AlphaFilter {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Filter<f32> for AlphaFilter {
    type Error = Infallible;

    fn push(&mut self, value: f32) -> Result<f32, Infallible> {
        Ok(self.filter(value))
    }

    /// Restores the initial estimate. The gain is kept.
    fn reset(&mut self) {
        self.x = self.initial;
    }
}
