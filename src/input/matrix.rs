//! Raw arrays and reshaping
//!
//! MAT containers store arrays column-major together with their logical
//! shape. Field matrices are rebuilt the way NumPy's default `reshape` sees
//! them: the stored array is read in row-major order of its logical shape,
//! and that flat sequence fills an (nt × nx) matrix row by row.

use nalgebra::DMatrix;

/// Numeric array as stored in a result file
///
/// `data` is column-major with respect to `shape`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArray {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl RawArray {
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Self {
        Self { shape, data }
    }

    /// 1 × n row vector, the layout MATLAB uses for `t` and `x`
    pub fn row(values: Vec<f64>) -> Self {
        Self {
            shape: vec![1, values.len()],
            data: values,
        }
    }

    /// Build from a logical (rows × cols) matrix given in row-major order
    pub fn from_row_major(rows: usize, cols: usize, values: &[f64]) -> Self {
        let data = DMatrix::from_row_slice(rows, cols, values).as_slice().to_vec();
        Self {
            shape: vec![rows, cols],
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in row-major order of the logical shape
    pub fn row_major(&self) -> Vec<f64> {
        row_major_from_column_major(&self.shape, &self.data)
    }
}

/// Reorder column-major storage into row-major (C) order
///
/// If `shape` does not describe `data` (empty, or wrong element count)
/// the data is returned as-is and treated as already flat.
pub fn row_major_from_column_major(shape: &[usize], data: &[f64]) -> Vec<f64> {
    let count: usize = shape.iter().product();
    if shape.is_empty() || count != data.len() {
        return data.to_vec();
    }

    // Column-major strides: first index is contiguous
    let mut strides = vec![1usize; shape.len()];
    for k in 1..shape.len() {
        strides[k] = strides[k - 1] * shape[k - 1];
    }

    (0..count)
        .map(|n| {
            let mut rem = n;
            let mut offset = 0;
            for k in (0..shape.len()).rev() {
                offset += (rem % shape[k]) * strides[k];
                rem /= shape[k];
            }
            data[offset]
        })
        .collect()
}

/// Fill an (nt × nx) matrix row by row from a flat sequence
///
/// Returns `None` when `flat.len() != nt * nx`.
pub fn reshape(flat: &[f64], nt: usize, nx: usize) -> Option<DMatrix<f64>> {
    if flat.len() != nt * nx {
        return None;
    }
    Some(DMatrix::from_row_slice(nt, nx, flat))
}

/// Inverse of [`reshape`]: row-major flat copy of a matrix
pub fn flatten(matrix: &DMatrix<f64>) -> Vec<f64> {
    matrix.transpose().as_slice().to_vec()
}

// =================================================================================================
// Tests
// =================================================================================================
