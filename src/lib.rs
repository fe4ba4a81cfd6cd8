//! Recursive single-variable estimators for smoothing noisy scalar measurements.
//!
//! Two filters are provided, both with constant memory and constant per-sample cost:
//!
//! * [`AlphaFilter`]: an exponential moving average of a single value.
//! * [`AlphaBetaFilter`]: a second-order estimator that tracks a value and its rate of change.
//!
//! Both are driven by feeding them measurements one at a time and reading the estimate back
//! afterwards.
//!
//! # Logging
//!
//! Diagnostics are emitted through the [`log`] facade. Assigning a gain outside of the open
//! interval (0, 1) logs a warning, and every filter update is logged at *trace* level. Use
//! [`init_logger!`] to get output on *stderr*; the `RUST_LOG` environment variable is honored.
//!
//! [`AlphaFilter`]: filter::AlphaFilter
//! [`AlphaBetaFilter`]: filter::AlphaBetaFilter

use log::LevelFilter;

pub mod filter;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate will log at *debug* level, unless overridden via `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
