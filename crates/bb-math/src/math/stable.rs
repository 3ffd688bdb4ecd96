//! Numerically stable log-domain primitives.
//!
//! Ratios of gamma terms are assembled by summing log-gamma values and
//! exponentiating once at the end, so intermediate factors never overflow.

use std::f64::consts::PI;

const LOG_SQRT_2PI: f64 = 0.918_938_533_204_672_8; // 0.5 * ln(2*pi)
const LANCZOS_G: f64 = 7.0;
#[allow(clippy::excessive_precision)] // These are published numerical constants
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the Gamma function (log |Gamma(z)|).
///
/// Uses a Lanczos approximation with reflection for z < 0.5. Non-positive
/// integers are poles and return NaN.
pub fn log_gamma(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z == f64::INFINITY {
        return f64::INFINITY;
    }
    if z == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if z <= 0.0 {
        let z_round = z.round();
        if (z - z_round).abs() < 1e-15 {
            return f64::NAN;
        }
    }
    if z < 0.5 {
        let sin_pi = (PI * z).sin();
        if sin_pi == 0.0 {
            return f64::NAN;
        }
        return PI.ln() - sin_pi.abs().ln() - log_gamma(1.0 - z);
    }

    let z_minus = z - 1.0;
    let mut x = LANCZOS_COEFFS[0];
    for (i, coeff) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        x += coeff / (z_minus + i as f64);
    }
    let t = z_minus + LANCZOS_G + 0.5;
    LOG_SQRT_2PI + (z_minus + 0.5) * t.ln() - t + x.ln()
}

/// log Beta(a, b) = log Gamma(a) + log Gamma(b) - log Gamma(a+b).
pub fn log_beta(a: f64, b: f64) -> f64 {
    log_gamma(a) + log_gamma(b) - log_gamma(a + b)
}

/// log binomial coefficient log C(n, k), with fractional support.
///
/// For integer n, k this equals log(n! / (k! (n-k)!)); real-valued n and k
/// extend it through the Gamma function.
pub fn log_binomial(n: f64, k: f64) -> f64 {
    if n < 0.0 || k < 0.0 || k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0.0 || k == n {
        return 0.0;
    }
    log_gamma(n + 1.0) - log_gamma(k + 1.0) - log_gamma(n - k + 1.0)
}

/// Stable log(sum(exp(values))).
///
/// Returns NEG_INFINITY for empty input or all -inf inputs.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NEG_INFINITY;
    }
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if max == f64::INFINITY {
        return f64::INFINITY;
    }
    let mut sum = 0.0;
    for v in values {
        sum += (*v - max).exp();
    }
    max + sum.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn log_gamma_matches_factorials() {
        assert!(approx_eq(log_gamma(1.0), 0.0, 1e-12));
        assert!(approx_eq(log_gamma(2.0), 0.0, 1e-12));
        assert!(approx_eq(log_gamma(5.0), 24.0f64.ln(), 1e-10)); // Gamma(5) = 4!
        assert!(approx_eq(log_gamma(11.0), 3_628_800.0f64.ln(), 1e-9));
    }

    #[test]
    fn log_gamma_half_integer() {
        // Gamma(1/2) = sqrt(pi)
        let expected = 0.5 * PI.ln();
        assert!(approx_eq(log_gamma(0.5), expected, 1e-10));
    }

    #[test]
    fn log_gamma_large_argument_is_finite() {
        // Gamma(301) overflows f64; its log must not.
        let lg = log_gamma(301.0);
        assert!(lg.is_finite());
        assert!(lg > 700.0);
    }

    #[test]
    fn log_gamma_poles_are_nan() {
        assert!(log_gamma(0.0).is_nan());
        assert!(log_gamma(-1.0).is_nan());
        assert!(log_gamma(-3.0).is_nan());
    }

    #[test]
    fn log_beta_known_values() {
        assert!(approx_eq(log_beta(1.0, 1.0), 0.0, 1e-12));
        // B(2, 3) = 1!*2!/4! = 1/12
        assert!(approx_eq(log_beta(2.0, 3.0), (1.0f64 / 12.0).ln(), 1e-10));
    }

    #[test]
    fn log_binomial_integer_cases() {
        assert!(approx_eq(log_binomial(5.0, 2.0), 10.0f64.ln(), 1e-10));
        assert!(approx_eq(log_binomial(10.0, 0.0), 0.0, 1e-12));
        assert!(approx_eq(log_binomial(10.0, 10.0), 0.0, 1e-12));
        assert_eq!(log_binomial(3.0, 4.0), f64::NEG_INFINITY);
    }

    #[test]
    fn log_sum_exp_basic() {
        let out = log_sum_exp(&[0.0, 0.0]);
        assert!(approx_eq(out, 2.0f64.ln(), 1e-12));
    }

    #[test]
    fn log_sum_exp_dominant_term() {
        let out = log_sum_exp(&[-1000.0, 0.0]);
        assert!(approx_eq(out, 0.0, 1e-12));
    }

    #[test]
    fn log_sum_exp_edge_inputs() {
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        let out = log_sum_exp(&[f64::NEG_INFINITY, f64::NEG_INFINITY]);
        assert!(out.is_infinite() && out.is_sign_negative());
        assert!(log_sum_exp(&[0.0, f64::NAN]).is_nan());
    }
}
