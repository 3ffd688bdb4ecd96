//! Explicit per-caller session state.
//!
//! The reference dashboard kept its current parameters and plot sources in
//! module-level globals mutated by slider callbacks. Here that state is an
//! ordinary value the caller owns: `update` recomputes and swaps the payload,
//! and a rejected update leaves the previous payload in place so the view can
//! keep rendering its last-valid plot. The `&mut self` receiver means at most
//! one recomputation is in flight per session.

use crate::engine::evaluate;
use crate::error::Result;
use crate::params::DistributionParameters;
use crate::payload::DensityPayload;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Session {
    params: DistributionParameters,
    payload: DensityPayload,
    beta_grid: Option<usize>,
}

impl Session {
    /// Start a session by evaluating the initial parameters.
    pub fn new(params: DistributionParameters, beta_grid: Option<usize>) -> Result<Self> {
        let payload = evaluate(&params, beta_grid)?;
        Ok(Self {
            params,
            payload,
            beta_grid,
        })
    }

    /// Current parameters.
    pub fn params(&self) -> &DistributionParameters {
        &self.params
    }

    /// Last successfully computed payload.
    pub fn payload(&self) -> &DensityPayload {
        &self.payload
    }

    /// Recompute for new parameters.
    ///
    /// On a domain error the session is unchanged and the error surfaces to
    /// the caller.
    pub fn update(&mut self, params: DistributionParameters) -> Result<&DensityPayload> {
        match evaluate(&params, self.beta_grid) {
            Ok(payload) => {
                self.params = params;
                self.payload = payload;
                Ok(&self.payload)
            }
            Err(err) => {
                warn!(%err, "update rejected, keeping last-valid payload");
                Err(err)
            }
        }
    }

    /// Slider-style update of the trial count.
    pub fn set_n(&mut self, n: u32) -> Result<&DensityPayload> {
        let mut params = self.params;
        params.n = n;
        self.update(params)
    }

    /// Slider-style update of alpha.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<&DensityPayload> {
        let mut params = self.params;
        params.alpha = alpha;
        self.update(params)
    }

    /// Slider-style update of beta.
    pub fn set_beta(&mut self, beta: f64) -> Result<&DensityPayload> {
        let mut params = self.params;
        params.beta = beta;
        self.update(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_swaps_payload() {
        let mut session = Session::new(DistributionParameters::default(), None).unwrap();
        assert_eq!(session.payload().pmf.len(), 11);

        session.set_n(20).unwrap();
        assert_eq!(session.params().n, 20);
        assert_eq!(session.payload().pmf.len(), 21);
    }

    #[test]
    fn rejected_update_keeps_last_valid_payload() {
        let mut session = Session::new(DistributionParameters::default(), None).unwrap();
        let before = session.payload().clone();

        let err = session.set_alpha(0.0).unwrap_err();
        assert!(err.is_domain());
        assert_eq!(session.params().alpha, 2.0);
        assert_eq!(session.payload(), &before);
    }

    #[test]
    fn invalid_initial_parameters_fail_construction() {
        let params = DistributionParameters {
            n: 5,
            alpha: 1.0,
            beta: f64::NAN,
        };
        assert!(Session::new(params, None).is_err());
    }

    #[test]
    fn beta_grid_setting_persists_across_updates() {
        let mut session = Session::new(DistributionParameters::default(), Some(25)).unwrap();
        session.set_beta(5.0).unwrap();
        let reference = session.payload().beta_reference.as_ref().unwrap();
        assert_eq!(reference.x.len(), 25);
    }
}
