//! Random train/test partitioning for cross-validation.

use rand::seq::SliceRandom;
use rand::Rng;

/// Partition `0..num_data` into `num_folds` train/test index pairs.
///
/// The indices are shuffled once and split into contiguous blocks of
/// `ceil(num_data / num_folds)`; block `i` becomes fold `i`'s testing set
/// and the remaining indices its training set. Within each fold the two
/// sets are disjoint and together cover the full range.
///
/// The generator is passed in explicitly so sweeps are reproducible; seed
/// a `StdRng` for deterministic folds.
///
/// # Arguments
///
/// * `num_data` - Number of samples to partition.
/// * `num_folds` - Number of folds; values below 2 are clamped to 2.
/// * `rng` - Random number generator driving the permutation.
///
/// # Returns
///
/// `(itrn, itst)` where `itrn[i]` / `itst[i]` are the training / testing
/// indices of fold `i`.
pub fn crossval<R: Rng>(
    num_data: usize,
    num_folds: usize,
    rng: &mut R,
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let num_folds = if num_folds < 2 {
        log::warn!("Minimal number of folds set to 2.");
        2
    } else {
        num_folds
    };

    let mut inx: Vec<usize> = (0..num_data).collect();
    inx.shuffle(rng);

    let num_column = (num_data as f64 / num_folds as f64).ceil() as usize;

    let mut itrn = Vec::with_capacity(num_folds);
    let mut itst = Vec::with_capacity(num_folds);

    for idx in 0..num_folds {
        // Both ends clamp to num_data; trailing folds past the last block
        // get an empty testing set.
        let start = num_data.min(idx * num_column);
        let end = num_data.min((idx + 1) * num_column);
        let tst_range = start..end;
        itst.push(inx[tst_range.clone()].to_vec());
        itrn.push(
            inx[..tst_range.start]
                .iter()
                .chain(inx[tst_range.end..].iter())
                .copied()
                .collect(),
        );
    }

    (itrn, itst)
}
