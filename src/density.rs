//! Parzen window (kernel) density estimation with a Gaussian kernel.

use ndarray::{Array1, Axis};
use statrs::distribution::{Continuous, Normal};

use crate::error::ParzenError;

/// Estimate a probability density function with a Parzen window and a
/// normal kernel N(0, h^2).
///
/// For each query point `x[i]` the estimate is the arithmetic mean of the
/// Gaussian pdf evaluated at `x[i] - x_trn[j]` over all training points:
///
/// p(x_i) = (1 / m) * sum_j N(x_i - t_j; 0, h^2)
///
/// The kernel matrix is built as a single (n, m) outer-difference broadcast
/// followed by a row-wise mean, so the O(n*m) work stays in vectorized
/// elementwise operations.
///
/// # Arguments
///
/// * `x` - Query points where the density should be evaluated.
/// * `x_trn` - Training sample (must be non-empty).
/// * `h` - Kernel bandwidth, the standard deviation of the smoothing kernel.
///
/// # Returns
///
/// Estimated densities `p(x|k)`, same length and order as `x`; every entry
/// is >= 0. An empty `x` yields an empty array.
pub fn parzen(x: &Array1<f64>, x_trn: &Array1<f64>, h: f64) -> Result<Array1<f64>, ParzenError> {
    let kernel = make_kernel(h)?;
    if x_trn.is_empty() {
        return Err(ParzenError::EmptySample);
    }
    if x.is_empty() {
        return Ok(Array1::zeros(0));
    }

    // (n, 1) - (1, m) broadcasts to the full outer-difference matrix.
    let queries = x.view().insert_axis(Axis(1));
    let centers = x_trn.view().insert_axis(Axis(0));
    let delta = &queries - &centers;

    let khx = delta.mapv(|d| kernel.pdf(d));
    let p = khx
        .mean_axis(Axis(1))
        .expect("parzen: training sample verified non-empty");

    Ok(p)
}

/// Build the N(0, h^2) kernel distribution, validating the bandwidth.
pub(crate) fn make_kernel(h: f64) -> Result<Normal, ParzenError> {
    if !h.is_finite() || h <= 0.0 {
        return Err(ParzenError::InvalidBandwidth(h));
    }
    Normal::new(0.0, h).map_err(|_| ParzenError::InvalidBandwidth(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_normal_at_zero() {
        // Three identical training points at 0 with h = 1 reduce to the
        // standard normal density at the query.
        let x_trn = array![0.0, 0.0, 0.0];
        let p = parzen(&array![0.0], &x_trn, 1.0).unwrap();
        assert!((p[0] - 0.3989423).abs() < 1e-6, "got {}", p[0]);
    }

    #[test]
    fn test_single_point_peak_value() {
        // Kernel maximum at the training point: 1 / (h * sqrt(2 pi)).
        for &(a, h) in &[(0.0, 1.0), (-3.5, 0.25), (120.0, 2.0)] {
            let p = parzen(&array![a], &array![a], h).unwrap();
            let expected = 1.0 / (h * (2.0 * PI).sqrt());
            assert!((p[0] - expected).abs() < 1e-12, "a={}, h={}", a, h);
        }
    }

    #[test]
    fn test_densities_nonnegative() {
        let x_trn = array![-2.0, -0.5, 0.0, 1.0, 4.0];
        let x = array![-10.0, -1.0, 0.3, 2.5, 30.0];
        let p = parzen(&x, &x_trn, 0.7).unwrap();
        assert_eq!(p.len(), x.len());
        assert!(p.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_monotonic_decay_from_single_center() {
        let x_trn = array![0.0];
        let x = array![0.5, 1.0, 2.0, 4.0, 8.0];
        let p = parzen(&x, &x_trn, 1.0).unwrap();
        for w in p.as_slice().unwrap().windows(2) {
            assert!(w[1] < w[0], "density must strictly decay away from 0");
        }
    }

    #[test]
    fn test_training_order_invariance() {
        let x = array![-1.0, 0.2, 3.0];
        let a = parzen(&x, &array![0.0, 1.0, -2.0, 0.5], 0.8).unwrap();
        let b = parzen(&x, &array![0.5, -2.0, 1.0, 0.0], 0.8).unwrap();
        for (va, vb) in a.iter().zip(b.iter()) {
            assert!((va - vb).abs() < 1e-15);
        }
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let p = parzen(&Array1::zeros(0), &array![1.0], 1.0).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_invalid_bandwidth_rejected() {
        let x = array![0.0];
        let x_trn = array![1.0];
        assert_eq!(
            parzen(&x, &x_trn, 0.0),
            Err(ParzenError::InvalidBandwidth(0.0))
        );
        assert!(matches!(
            parzen(&x, &x_trn, -1.0),
            Err(ParzenError::InvalidBandwidth(_))
        ));
        assert!(matches!(
            parzen(&x, &x_trn, f64::NAN),
            Err(ParzenError::InvalidBandwidth(_))
        ));
    }

    #[test]
    fn test_empty_training_sample_rejected() {
        let p = parzen(&array![0.0], &Array1::zeros(0), 1.0);
        assert_eq!(p, Err(ParzenError::EmptySample));
    }

    #[test]
    fn test_matches_scalar_reference() {
        // Cross-check the broadcast path against a naive double loop.
        let x = array![-1.3, 0.0, 0.7, 2.2];
        let x_trn = array![-0.5, 0.1, 0.9];
        let h = 0.6;
        let p = parzen(&x, &x_trn, h).unwrap();

        let kernel = Normal::new(0.0, h).unwrap();
        for (i, &xi) in x.iter().enumerate() {
            let mean: f64 =
                x_trn.iter().map(|&t| kernel.pdf(xi - t)).sum::<f64>() / x_trn.len() as f64;
            assert!((p[i] - mean).abs() < 1e-15);
        }
    }
}
