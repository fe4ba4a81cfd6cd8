use super::{gain, Filter, FilterError, InvalidGain};

/// An [alpha beta filter] tracking a scalar value together with its rate of change.
///
/// Every update first projects the position estimate forward by `rate_x * dt`, then corrects
/// both the position and the rate using the residual between the measurement and that
/// projection. With a rate and `beta` of 0 it behaves like an [`AlphaFilter`][super::AlphaFilter].
///
/// The time step `dt` is chosen by the caller and may be changed between updates, for example
/// when measurements arrive at irregular intervals.
///
/// Only the position gain `alpha` can be configured. The rate gain `beta` is derived from it as
/// `alpha² / (2 - alpha)` every time `alpha` is set.
///
/// [alpha beta filter]: https://en.wikipedia.org/wiki/Alpha_beta_filter
#[derive(Debug, Clone)]
pub struct AlphaBetaFilter {
    x: f32,
    /// Estimated change in `x` per unit of time.
    rate_x: f32,
    dt: f32,
    alpha: f32,
    beta: f32,
    initial: f32,
}

impl AlphaBetaFilter {
    /// Position gain used by newly created filters.
    pub const DEFAULT_ALPHA: f32 = 0.75;

    /// Creates a new filter with the initial position estimate `x`.
    ///
    /// The rate of change starts out at 0, the time step at 1.
    pub fn new(x: f32) -> Self {
        Self {
            x,
            rate_x: 0.0,
            dt: 1.0,
            alpha: Self::DEFAULT_ALPHA,
            beta: gain::derived_beta(Self::DEFAULT_ALPHA),
            initial: x,
        }
    }

    /// Returns `self` with the position gain set to `alpha`.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Returns `self` with the time step set to `dt`.
    pub fn with_dt(self, dt: f32) -> Self {
        Self { dt, ..self }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// Sets the position gain and recomputes `beta`.
    ///
    /// Out-of-range values are handled like in [`AlphaFilter::set_alpha`]: a warning is logged
    /// and returned, negative values are replaced with 0.1 and values above 1.0 with 1.0.
    ///
    /// `beta` is derived from `alpha` *as passed in*, not from the replacement value. Setting
    /// `alpha` to 1.5 stores an `alpha` of 1.0 and a `beta` of 4.5.
    ///
    /// Setting `alpha` to exactly 2.0 stores a `beta` of +inf, which makes the next update drive
    /// `rate_x` to infinity. Reference implementations fail with a division by zero here and keep
    /// the previous `beta`; this filter does not report an error.
    ///
    /// [`AlphaFilter::set_alpha`]: super::AlphaFilter::set_alpha
    pub fn set_alpha(&mut self, alpha: f32) -> Option<InvalidGain> {
        let (clamped, warning) = gain::clamp(alpha);
        self.alpha = clamped;
        self.beta = gain::derived_beta(alpha);
        warning
    }

    /// Returns the current position estimate.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Overwrites the current position estimate.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Returns the current rate of change estimate.
    pub fn rate_x(&self) -> f32 {
        self.rate_x
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Sets the time step between measurements.
    ///
    /// Any value is accepted. A time step of 0 makes [`AlphaBetaFilter::filter`] fail until it is
    /// changed again.
    pub fn set_dt(&mut self, dt: f32) {
        self.dt = dt;
    }

    /// Updates the estimates with the measurement `z` and returns the new position estimate.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ZeroTimeStep`] if the time step is 0. The filter state is not
    /// modified in that case.
    pub fn filter(&mut self, z: f32) -> Result<f32, FilterError> {
        if self.dt == 0.0 {
            return Err(FilterError::ZeroTimeStep);
        }

        let prediction = self.x + self.dt * self.rate_x;
        let residual = z - prediction;

        self.x = prediction + self.alpha * residual;
        self.rate_x += self.beta * residual / self.dt;

        log::trace!(
            "alpha-beta filter: z={} prediction={} residual={} x={} rate_x={}",
            z,
            prediction,
            residual,
            self.x,
            self.rate_x,
        );
        Ok(self.x)
    }
}

impl Default for AlphaBetaFilter {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Filter<f32> for AlphaBetaFilter {
    type Error = FilterError;

    fn push(&mut self, value: f32) -> Result<f32, FilterError> {
        self.filter(value)
    }

    /// Restores the initial position and a rate of 0. Gains and time step are kept.
    fn reset(&mut self) {
        self.x = self.initial;
        self.rate_x = 0.0;
    }
}
