//! Beta-binomial density engine.
//!
//! The engine side of an interactive distribution explorer: callers (a
//! reactive view layer, or the bundled CLI) hand over the current
//! `(n, alpha, beta)` and receive fresh PMF/CDF arrays plus axis hints, ready
//! to push into a plot. All numerics live in `bb-math`; this crate owns the
//! validated parameter types, the serializable payload contract, and the
//! explicit per-caller session state.

pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod params;
pub mod payload;
pub mod session;

pub use engine::evaluate;
pub use error::{Error, Result};
pub use output::OutputFormat;
pub use params::DistributionParameters;
pub use payload::{AxisHints, BetaReference, DensityPayload};
pub use session::Session;
