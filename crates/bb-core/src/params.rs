//! Validated distribution parameters.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Slider bounds exposed by the reference dashboard. The engine itself
/// accepts any valid parameters; these are hints for callers building
/// controls.
pub const N_SLIDER_MAX: u32 = 30;
pub const SHAPE_SLIDER_MIN: f64 = 0.1;
pub const SHAPE_SLIDER_MAX: f64 = 40.0;

/// Parameters of a BetaBinomial(n, alpha, beta) distribution.
///
/// Construct through [`DistributionParameters::new`] to get domain
/// validation; deserialized values can be re-checked with
/// [`DistributionParameters::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParameters {
    /// Number of trials. Zero is a valid (single-point) support.
    pub n: u32,
    /// First shape parameter of the mixing Beta prior (> 0).
    pub alpha: f64,
    /// Second shape parameter of the mixing Beta prior (> 0).
    pub beta: f64,
}

impl DistributionParameters {
    /// Create validated parameters.
    pub fn new(n: u32, alpha: f64, beta: f64) -> Result<Self> {
        let params = Self { n, alpha, beta };
        params.validate()?;
        Ok(params)
    }

    /// Reject non-finite or non-positive shape parameters.
    pub fn validate(&self) -> Result<()> {
        check_shape("alpha", self.alpha)?;
        check_shape("beta", self.beta)?;
        Ok(())
    }
}

impl Default for DistributionParameters {
    /// The dashboard's initial state: n=10, alpha=beta=2.
    fn default() -> Self {
        Self {
            n: 10,
            alpha: 2.0,
            beta: 2.0,
        }
    }
}

fn check_shape(param: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Domain {
            param,
            requirement: "a positive finite real",
            value,
        });
    }
    Ok(())
}
