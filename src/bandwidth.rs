//! Cross-validated log-likelihood scoring of kernel bandwidths and the
//! grid sweep used to pick the best one.

use itertools_num::linspace;
use ndarray::{Array1, Axis};
use rayon::prelude::*;

use crate::density::parzen;
use crate::error::ParzenError;

/// Compute the average held-out log-likelihood for a fixed bandwidth `h`
/// over training/testing splits generated by [`crate::crossval::crossval`].
///
/// For each fold the per-point densities of the testing part are estimated
/// from the training part with [`parzen`], log-transformed and summed; the
/// result is the mean of the per-fold sums. Higher is better.
///
/// A density that underflows to zero contributes `-inf` through the
/// logarithm and is propagated as-is, so such a bandwidth simply scores
/// itself out of the sweep. No epsilon flooring is applied.
///
/// # Arguments
///
/// * `itrn` - Training index sets, one per fold.
/// * `itst` - Testing index sets, one per fold.
/// * `x` - Full measurement sample the indices address.
/// * `h` - Candidate kernel bandwidth.
///
/// # Returns
///
/// The cross-validation objective `L(h)`, possibly non-finite.
pub fn compute_lh(
    itrn: &[Vec<usize>],
    itst: &[Vec<usize>],
    x: &Array1<f64>,
    h: f64,
) -> Result<f64, ParzenError> {
    if itrn.len() != itst.len() || itrn.is_empty() {
        return Err(ParzenError::FoldCountMismatch {
            trn: itrn.len(),
            tst: itst.len(),
        });
    }
    for &index in itrn.iter().chain(itst.iter()).flatten() {
        if index >= x.len() {
            return Err(ParzenError::IndexOutOfRange {
                index,
                len: x.len(),
            });
        }
    }

    let mut fold_lh = Vec::with_capacity(itrn.len());
    for (trn, tst) in itrn.iter().zip(itst.iter()) {
        let x_trn = x.select(Axis(0), trn);
        let x_tst = x.select(Axis(0), tst);
        let p = parzen(&x_tst, &x_trn, h)?;
        fold_lh.push(p.mapv(f64::ln).sum());
    }

    Ok(fold_lh.iter().sum::<f64>() / fold_lh.len() as f64)
}

/// Linearly spaced bandwidth candidates over `[h_min, h_max]`.
pub fn bandwidth_grid(h_min: f64, h_max: f64, num_candidates: usize) -> Vec<f64> {
    linspace(h_min, h_max, num_candidates).collect()
}

/// Sweep a grid of candidate bandwidths and return the `(h, L(h))` pair
/// maximizing the cross-validation objective.
///
/// Candidates are scored in parallel; the objective is a pure function of
/// its arguments, so the sweep is embarrassingly parallel. Candidates whose
/// score is non-finite (log-likelihood underflow at small bandwidths) are
/// skipped.
///
/// # Arguments
///
/// * `itrn` / `itst` - Fold index sets shared by every candidate.
/// * `x` - Full measurement sample.
/// * `candidates` - Bandwidths to score, e.g. from [`bandwidth_grid`].
///
/// # Returns
///
/// The best-scoring bandwidth and its score, or an error when the grid is
/// empty, a candidate is invalid, or no candidate scores finite.
pub fn select_bandwidth(
    itrn: &[Vec<usize>],
    itst: &[Vec<usize>],
    x: &Array1<f64>,
    candidates: &[f64],
) -> anyhow::Result<(f64, f64)> {
    if candidates.is_empty() {
        anyhow::bail!("Bandwidth sweep requires at least one candidate");
    }

    let scores = candidates
        .par_iter()
        .map(|&h| compute_lh(itrn, itst, x, h).map(|lh| (h, lh)))
        .collect::<Result<Vec<_>, _>>()?;

    let best = scores
        .into_iter()
        .filter(|(_, lh)| lh.is_finite())
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((h, lh)) => {
            log::debug!("Selected bandwidth {} with log-likelihood {}", h, lh);
            Ok((h, lh))
        }
        None => anyhow::bail!("No bandwidth candidate produced a finite log-likelihood"),
    }
}
