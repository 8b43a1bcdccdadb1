// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function
///
/// ```text
/// Φ(x) = 0.5 * (1 + erf(x/√2)) = 0.5 * erfc(-x/√2)
/// ```
///
/// The complementary form keeps full precision in the lower tail.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function
///
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_cdf(0.1), 0.539827837277029, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(1.0), 0.841344746068543, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.024997895148220, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(3.0), 0.998650101968370, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert_abs_diff_eq!(norm_cdf(10.0), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-10.0), 0.0, epsilon = 1e-10);
        // Lower tail keeps relative precision
        let lower = norm_cdf(-8.0);
        assert!(lower > 0.0);
        assert!((lower - 6.22096057427178e-16).abs() / 6.22096057427178e-16 < 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_pdf() {
        assert_abs_diff_eq!(norm_pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(0.1), 0.39695254747701181, epsilon = 1e-15);
        assert_eq!(norm_pdf(1.5), norm_pdf(-1.5));
        assert_eq!(norm_pdf(50.0), 0.0);
    }
}
