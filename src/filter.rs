//! Data filtering and smoothing.

mod alpha;
mod alpha_beta;
pub mod gain;

pub use alpha::AlphaFilter;
pub use alpha_beta::AlphaBetaFilter;
pub use gain::InvalidGain;

use thiserror::Error;

/// Errors that can occur while updating a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The time step is zero, so the rate correction would divide by zero.
    #[error("time step is zero, cannot update the rate estimate")]
    ZeroTimeStep,
}

/// A filter for values of type `V`.
pub trait Filter<V> {
    /// Error returned when an update cannot be performed.
    type Error;

    /// Adds a new value to the filter, returning the filtered value.
    fn push(&mut self, value: V) -> Result<V, Self::Error>;

    /// Resets the accumulated history and state of the filter to be identical to the state just
    /// after construction.
    fn reset(&mut self);

    /// Pushes every value yielded by `values`, returning the filtered values in order.
    ///
    /// Stops at the first value that fails to update the filter.
    fn push_all<I>(&mut self, values: I) -> Result<Vec<V>, Self::Error>
    where
        I: IntoIterator<Item = V>,
        Self: Sized,
    {
        values.into_iter().map(|value| self.push(value)).collect()
    }
}

impl<V, E> Filter<V> for Box<dyn Filter<V, Error = E>> {
    type Error = E;

    fn push(&mut self, value: V) -> Result<V, E> {
        (**self).push(value)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
