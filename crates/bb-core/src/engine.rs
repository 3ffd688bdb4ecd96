//! One blocking evaluation per parameter change.
//!
//! The engine is pure and stateless: identical parameters give identical
//! payloads, and nothing is cached between calls. Callers that want
//! last-valid retention wrap it in a [`crate::session::Session`].

use crate::error::Result;
use crate::params::DistributionParameters;
use crate::payload::{AxisHints, BetaReference, DensityPayload};
use bb_math::{beta, beta_binomial};
use tracing::debug;

/// Compute PMF and CDF arrays (and optionally the continuous beta overlay)
/// for the given parameters.
///
/// `beta_grid` requests the Beta(alpha, beta) reference curves on that many
/// evenly spaced points in [0, 1]; `None` skips them. The CDF is built from
/// the PMF normalized to total mass 1, so its final entry is 1.0 up to
/// floating error.
pub fn evaluate(
    params: &DistributionParameters,
    beta_grid: Option<usize>,
) -> Result<DensityPayload> {
    params.validate()?;
    let DistributionParameters { n, alpha, beta: b } = *params;

    let pmf = beta_binomial::pmf(n, alpha, b);
    let cdf = beta_binomial::cdf(n, alpha, b);
    debug!(n, alpha, beta = b, entries = pmf.len(), "computed density arrays");

    let beta_reference = beta_grid.map(|points| BetaReference {
        x: beta::unit_grid(points),
        pdf: beta::pdf_grid(alpha, b, points),
        cdf: beta::cdf_grid(alpha, b, points),
    });

    let axes = AxisHints::for_arrays(n, &pmf);
    Ok(DensityPayload {
        params: *params,
        support: (0..=n).collect(),
        pmf,
        cdf,
        beta_reference,
        axes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_math::beta::DEFAULT_GRID_POINTS;

    #[test]
    fn payload_arrays_are_aligned() {
        let params = DistributionParameters::new(10, 2.0, 2.0).unwrap();
        let payload = evaluate(&params, None).unwrap();
        assert_eq!(payload.support.len(), 11);
        assert_eq!(payload.pmf.len(), 11);
        assert_eq!(payload.cdf.len(), 11);
        assert_eq!(payload.support[0], 0);
        assert_eq!(payload.support[10], 10);
        assert!(payload.beta_reference.is_none());
        assert!((payload.cdf[10] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn beta_reference_has_requested_grid() {
        let params = DistributionParameters::default();
        let payload = evaluate(&params, Some(DEFAULT_GRID_POINTS)).unwrap();
        let reference = payload.beta_reference.unwrap();
        assert_eq!(reference.x.len(), DEFAULT_GRID_POINTS);
        assert_eq!(reference.pdf.len(), DEFAULT_GRID_POINTS);
        assert_eq!(reference.cdf.len(), DEFAULT_GRID_POINTS);
        assert_eq!(reference.x[0], 0.0);
    }

    #[test]
    fn invalid_parameters_are_rejected_before_compute() {
        let params = DistributionParameters {
            n: 10,
            alpha: -2.0,
            beta: 2.0,
        };
        let err = evaluate(&params, None).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let params = DistributionParameters::new(20, 0.7, 13.0).unwrap();
        let a = evaluate(&params, Some(50)).unwrap();
        let b = evaluate(&params, Some(50)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_point_support() {
        let params = DistributionParameters::new(0, 1.0, 1.0).unwrap();
        let payload = evaluate(&params, None).unwrap();
        assert_eq!(payload.pmf, vec![1.0]);
        assert_eq!(payload.cdf, vec![1.0]);
        assert_eq!(payload.axes.x_max, 1.0);
    }
}
