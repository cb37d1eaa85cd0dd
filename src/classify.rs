//! Two-class Bayes classifier over Parzen window density estimates.

use ndarray::{Array1, Zip};

use crate::density::parzen;
use crate::error::ParzenError;

/// Classify measurements with a Bayesian minimum-risk decision rule whose
/// class densities are estimated by [`parzen`].
///
/// The per-class risks use the 0/1-loss expected-risk pairing: the risk of
/// deciding for one class is the other class's density weighted by that
/// class's prior. A point is labeled `true` (class A) when
/// `p(x|A) * prior_a > p(x|C) * prior_c`; ties resolve to `false`.
///
/// # Arguments
///
/// * `x_test` - Measurements to classify.
/// * `x_a` / `x_c` - Training measurements for class A / class C.
/// * `prior_a` / `prior_c` - Prior probabilities of the two classes.
/// * `h_a` / `h_c` - Selected kernel bandwidths for the two classes.
///
/// # Returns
///
/// Labels for `x_test`, same length and order; `true` means class A.
pub fn classify_bayes_parzen(
    x_test: &Array1<f64>,
    x_a: &Array1<f64>,
    x_c: &Array1<f64>,
    prior_a: f64,
    prior_c: f64,
    h_a: f64,
    h_c: f64,
) -> Result<Array1<bool>, ParzenError> {
    let prob_a = parzen(x_test, x_a, h_a)?;
    let prob_c = parzen(x_test, x_c, h_c)?;

    // Risk of deciding A carries the C density and vice versa; keep this
    // cross-wise pairing, it is the 0/1-loss risk comparison. Class A wins
    // when its risk score is the smaller one.
    let r_a = prob_c.mapv(|p| p * prior_c);
    let r_c = prob_a.mapv(|p| p * prior_a);

    let labels = Zip::from(&r_c).and(&r_a).map_collect(|&rc, &ra| ra < rc);
    Ok(labels)
}
