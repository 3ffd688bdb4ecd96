//! The serializable engine-to-view contract.
//!
//! One payload per recomputation: support and arrays for the discrete
//! distribution, the optional continuous beta overlay, and the axis ranges
//! the reference dashboard used when rescaling its plots.

use crate::params::DistributionParameters;
use serde::{Deserialize, Serialize};

/// Margin added above the PMF maximum when suggesting a y-axis range.
const PMF_Y_MARGIN: f64 = 0.1;
/// Fixed y-axis ceiling for CDF plots.
const CDF_Y_MAX: f64 = 1.05;

/// Suggested plot ranges for the current arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisHints {
    pub x_min: f64,
    pub x_max: f64,
    pub y_pmf_max: f64,
    pub y_cdf_max: f64,
}

/// Continuous Beta(alpha, beta) curves on an evenly spaced unit grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetaReference {
    pub x: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

/// Everything a view needs to redraw after one parameter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityPayload {
    pub params: DistributionParameters,
    /// Support values 0..=n, aligned with `pmf` and `cdf`.
    pub support: Vec<u32>,
    pub pmf: Vec<f64>,
    pub cdf: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_reference: Option<BetaReference>,
    pub axes: AxisHints,
}

impl AxisHints {
    /// Ranges matching the dashboard's rescaling rule: x spans [-1, n+1],
    /// the PMF axis tops out a margin above the largest mass, the CDF axis
    /// is fixed at 1.05.
    pub fn for_arrays(n: u32, pmf: &[f64]) -> Self {
        let pmf_max = pmf.iter().cloned().fold(0.0f64, f64::max);
        Self {
            x_min: -1.0,
            x_max: f64::from(n) + 1.0,
            y_pmf_max: pmf_max + PMF_Y_MARGIN,
            y_cdf_max: CDF_Y_MAX,
        }
    }
}
