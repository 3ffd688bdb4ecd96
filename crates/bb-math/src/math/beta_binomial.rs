//! Beta-binomial mass function over the support 0..=n.
//!
//! The distribution of k successes in n trials when the success probability
//! is itself drawn from Beta(alpha, beta):
//!
//! `PMF(k) = C(n,k) * B(alpha+k, n+beta-k) / B(alpha, beta)`
//!
//! Direct evaluation of this expression through the Gamma function overflows
//! for moderate n (Gamma(n+1) grows factorially) and can hit a zero
//! denominator before the division. Every path here works in log space:
//! log-gamma terms are accumulated, subtracted, and exponentiated once.

use super::stable::{log_beta, log_binomial, log_sum_exp};

/// Log of the beta-binomial PMF at k.
///
/// NaN or non-positive shape parameters give NaN; k > n gives -inf.
pub fn log_pmf(k: u32, n: u32, alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if k > n {
        return f64::NEG_INFINITY;
    }
    let n_f = f64::from(n);
    let k_f = f64::from(k);
    log_binomial(n_f, k_f) + log_beta(alpha + k_f, n_f + beta - k_f) - log_beta(alpha, beta)
}

/// Log-PMF over the full support, index k ascending, length n+1.
pub fn log_pmf_support(n: u32, alpha: f64, beta: f64) -> Vec<f64> {
    (0..=n).map(|k| log_pmf(k, n, alpha, beta)).collect()
}

/// PMF over the full support 0..=n.
///
/// A -inf log term (the degenerate-denominator case of direct evaluation)
/// clamps that entry to 0 instead of propagating a division error.
pub fn pmf(n: u32, alpha: f64, beta: f64) -> Vec<f64> {
    log_pmf_support(n, alpha, beta)
        .into_iter()
        .map(|lp| {
            if lp == f64::NEG_INFINITY {
                0.0
            } else {
                lp.exp()
            }
        })
        .collect()
}

/// PMF rescaled so the entries sum to 1.
///
/// The normalizer is taken in log space (log_sum_exp over the log terms), so
/// extreme parameters cannot lose the total mass to underflow. If every term
/// is -inf the result is all zeros.
pub fn pmf_normalized(n: u32, alpha: f64, beta: f64) -> Vec<f64> {
    let logs = log_pmf_support(n, alpha, beta);
    let log_z = log_sum_exp(&logs);
    if log_z == f64::NEG_INFINITY {
        return vec![0.0; logs.len()];
    }
    logs.into_iter()
        .map(|lp| {
            if lp == f64::NEG_INFINITY {
                0.0
            } else {
                (lp - log_z).exp()
            }
        })
        .collect()
}

/// CDF over the full support: prefix sums of the normalized PMF.
pub fn cdf(n: u32, alpha: f64, beta: f64) -> Vec<f64> {
    let normalized = pmf_normalized(n, alpha, beta);
    prefix_sum(&normalized)
}

/// CDF derived from an already-computed PMF array.
///
/// Policy: the input is first normalized by 1/sum so the final entry is 1.0
/// up to floating error, even when upstream clamping removed mass. An input
/// with zero total mass yields all zeros; empty input yields empty output.
pub fn cdf_from_pmf(pmf: &[f64]) -> Vec<f64> {
    let total: f64 = pmf.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return vec![0.0; pmf.len()];
    }
    let normalized: Vec<f64> = pmf.iter().map(|p| p / total).collect();
    prefix_sum(&normalized)
}

fn prefix_sum(values: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            acc += v;
            acc
        })
        .collect()
}

/// Mean of BetaBinomial(n, alpha, beta): n * alpha / (alpha + beta).
pub fn mean(n: u32, alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    f64::from(n) * alpha / (alpha + beta)
}

/// Variance of BetaBinomial(n, alpha, beta).
pub fn variance(n: u32, alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    let n_f = f64::from(n);
    let sum = alpha + beta;
    n_f * alpha * beta * (sum + n_f) / (sum * sum * (sum + 1.0))
}
