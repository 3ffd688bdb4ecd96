//! Continuous Beta distribution reference curves.
//!
//! Provides PDF and CDF for Beta(alpha, beta), plus fixed-grid evaluation
//! over [0, 1] for overlaying the continuous density against the discrete
//! beta-binomial. The CDF uses the regularized incomplete beta function with
//! a continued-fraction approximation (Numerical Recipes).

use super::stable::log_beta;

const BETACF_MAX_ITERS: usize = 200;
const BETACF_EPS: f64 = 3.0e-7;
const BETACF_FPMIN: f64 = 1.0e-30;

/// Number of grid points used by the dashboard overlay.
pub const DEFAULT_GRID_POINTS: usize = 100;

/// Mean of Beta(alpha, beta) = alpha / (alpha + beta).
pub fn beta_mean(alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    alpha / (alpha + beta)
}

/// Variance of Beta(alpha, beta).
pub fn beta_var(alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    let sum = alpha + beta;
    (alpha * beta) / (sum * sum * (sum + 1.0))
}

/// Log of the Beta PDF at x.
pub fn log_beta_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&x) {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 {
        if alpha < 1.0 {
            return f64::INFINITY;
        }
        if alpha > 1.0 {
            return f64::NEG_INFINITY;
        }
        return -log_beta(1.0, beta);
    }
    if x == 1.0 {
        if beta < 1.0 {
            return f64::INFINITY;
        }
        if beta > 1.0 {
            return f64::NEG_INFINITY;
        }
        return -log_beta(alpha, 1.0);
    }
    (alpha - 1.0) * x.ln() + (beta - 1.0) * (-x).ln_1p() - log_beta(alpha, beta)
}

/// Beta PDF at x.
pub fn beta_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    let log_pdf = log_beta_pdf(x, alpha, beta);
    if log_pdf.is_nan() {
        return f64::NAN;
    }
    if log_pdf == f64::INFINITY {
        return f64::INFINITY;
    }
    if log_pdf == f64::NEG_INFINITY {
        return 0.0;
    }
    log_pdf.exp()
}

/// Beta CDF: the regularized incomplete beta function I_x(alpha, beta).
pub fn beta_cdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_beta = log_beta(alpha, beta);
    let bt = (alpha * x.ln() + beta * (1.0 - x).ln() - ln_beta).exp();
    let threshold = (alpha + 1.0) / (alpha + beta + 2.0);
    if x < threshold {
        bt * betacf(alpha, beta, x) / alpha
    } else {
        1.0 - bt * betacf(beta, alpha, 1.0 - x) / beta
    }
}

/// Evenly spaced grid of `points` values spanning [0, 1] inclusive.
///
/// `points` below 2 is bumped to 2 so both endpoints are always present.
pub fn unit_grid(points: usize) -> Vec<f64> {
    let points = points.max(2);
    let step = 1.0 / (points - 1) as f64;
    (0..points).map(|i| (i as f64 * step).min(1.0)).collect()
}

/// Beta PDF evaluated on an evenly spaced unit grid.
pub fn pdf_grid(alpha: f64, beta: f64, points: usize) -> Vec<f64> {
    unit_grid(points)
        .into_iter()
        .map(|x| beta_pdf(x, alpha, beta))
        .collect()
}

/// Beta CDF evaluated on an evenly spaced unit grid.
pub fn cdf_grid(alpha: f64, beta: f64, points: usize) -> Vec<f64> {
    unit_grid(points)
        .into_iter()
        .map(|x| beta_cdf(x, alpha, beta))
        .collect()
}

fn betacf(alpha: f64, beta: f64, x: f64) -> f64 {
    let qab = alpha + beta;
    let qap = alpha + 1.0;
    let qam = alpha - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < BETACF_FPMIN {
        d = BETACF_FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=BETACF_MAX_ITERS {
        let m_f = m as f64;
        let m2 = 2.0 * m_f;
        let aa = m_f * (beta - m_f) * x / ((qam + m2) * (alpha + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETACF_FPMIN {
            d = BETACF_FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETACF_FPMIN {
            c = BETACF_FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(alpha + m_f) * (qab + m_f) * x / ((alpha + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETACF_FPMIN {
            d = BETACF_FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETACF_FPMIN {
            c = BETACF_FPMIN;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;
        if (del - 1.0).abs() < BETACF_EPS {
            break;
        }
    }

    h
}
