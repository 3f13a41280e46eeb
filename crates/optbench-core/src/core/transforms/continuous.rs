use nalgebra::{DMatrix, DVector};

/// Subtracts the shift vector element-wise. `offset` may be longer than `x`;
/// only the `x.len()` prefix is used.
pub fn shift(x: &mut [f64], offset: &[f64]) {
    assert!(offset.len() >= x.len(), "shift vector shorter than input");
    for (value, delta) in x.iter_mut().zip(offset) {
        *value -= delta;
    }
}

/// Multiplies every coordinate by `rate`.
pub fn scale(x: &mut [f64], rate: f64) {
    for value in x.iter_mut() {
        *value *= rate;
    }
}

/// Applies `x' = M * x`. The pre-rotation vector is snapshotted so every output
/// component is computed from the same input state.
pub fn rotate(x: &mut [f64], matrix: &DMatrix<f64>) {
    assert_eq!(matrix.ncols(), x.len(), "rotation matrix does not match input");
    let snapshot = DVector::from_column_slice(x);
    let rotated = matrix * snapshot;
    x.copy_from_slice(rotated.as_slice());
}

/// Gathers `src` through a 0-based permutation: `dst[i] = src[permutation[i]]`.
pub fn shuffle(src: &[f64], permutation: &[usize], dst: &mut [f64]) {
    assert_eq!(permutation.len(), dst.len(), "permutation does not match output");
    for (slot, &index) in dst.iter_mut().zip(permutation) {
        *slot = src[index];
    }
}

/// The canonical transform composition: shift (if present), then scale, then
/// rotate (if present). The order is load-bearing; benchmark reference values
/// are only reproduced with this exact sequence.
pub fn shift_scale_rotate(
    x: &mut [f64],
    offset: Option<&[f64]>,
    matrix: Option<&DMatrix<f64>>,
    rate: f64,
) {
    if let Some(offset) = offset {
        shift(x, offset);
    }
    scale(x, rate);
    if let Some(matrix) = matrix {
        rotate(x, matrix);
    }
}
