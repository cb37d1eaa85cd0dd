//! Scalar measurement extraction from image stacks.

use ndarray::{s, Array1, Array3, Axis};

use crate::error::ParzenError;

/// Compute the left-minus-right intensity measurement for each image.
///
/// Images are stacked as `(height, width, count)`. Rows are summed first,
/// then the measurement is the total intensity of the left half of the
/// columns minus the total of the right half; the split is at
/// `width / 2` (integer division, so an odd middle column lands on the
/// right).
///
/// # Arguments
///
/// * `imgs` - Image stack of shape (height, width, count).
///
/// # Returns
///
/// One measurement per image, shape (count,).
pub fn compute_measurement_lr_cont(imgs: &Array3<f64>) -> Result<Array1<f64>, ParzenError> {
    let (_, width, count) = imgs.dim();
    if count == 0 || width == 0 {
        return Err(ParzenError::EmptySample);
    }

    // (width, count) column sums.
    let sum_rows = imgs.sum_axis(Axis(0));
    let half = width / 2;

    let left = sum_rows.slice(s![..half, ..]).sum_axis(Axis(0));
    let right = sum_rows.slice(s![half.., ..]).sum_axis(Axis(0));

    Ok(&left - &right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_left_minus_right_sums() {
        // Two 2x4 images: the first is left-heavy, the second right-heavy.
        let mut imgs = Array3::zeros((2, 4, 2));
        imgs.slice_mut(s![.., ..2, 0]).fill(3.0); // left half, image 0
        imgs.slice_mut(s![.., 2.., 1]).fill(2.0); // right half, image 1

        let x = compute_measurement_lr_cont(&imgs).unwrap();
        assert_eq!(x, array![12.0, -8.0]);
    }

    #[test]
    fn test_odd_width_split() {
        // width 3 splits as 1 | 2: the middle column counts as right.
        let mut imgs = Array3::zeros((1, 3, 1));
        imgs[[0, 0, 0]] = 5.0;
        imgs[[0, 1, 0]] = 1.0;
        imgs[[0, 2, 0]] = 2.0;

        let x = compute_measurement_lr_cont(&imgs).unwrap();
        assert_eq!(x, array![2.0]);
    }

    #[test]
    fn test_symmetric_image_measures_zero() {
        let mut imgs = Array3::zeros((3, 4, 1));
        imgs.fill(1.5);
        let x = compute_measurement_lr_cont(&imgs).unwrap();
        assert!(x[0].abs() < 1e-12);
    }

    #[test]
    fn test_empty_stack_rejected() {
        let imgs = Array3::zeros((4, 4, 0));
        assert_eq!(
            compute_measurement_lr_cont(&imgs),
            Err(ParzenError::EmptySample)
        );
    }
}
