//! # Matrix types
//!
//! The `Matrix` trait defines the read and shape contract shared by all
//! matrix types in this module, regardless of back-end. Anything exposing it
//! can be projected into packed storage and compared structurally.
use itertools::Itertools;

pub use dense::Dense as DenseMatrix;
pub use triangular::{Lower, LowerTriangular, Orientation, Slice, Triangular, Upper, UpperTriangular};

use crate::data::linear_algebra::traits::Element;

mod dense;
mod triangular;

/// Defines read access to a matrix, regardless of back-end.
///
/// Mutation is not part of this contract; packed back-ends restrict which
/// coordinates can be written and expose their own mutation surface.
pub trait Matrix<F> {
    /// Number of rows.
    fn nr_rows(&self) -> usize;
    /// Number of columns.
    fn nr_columns(&self) -> usize;
    /// The value at coordinate (`i`, `j`).
    ///
    /// # Panics
    ///
    /// When the coordinate is outside the matrix shape.
    fn get(&self, i: usize, j: usize) -> F;
    /// The value at coordinate (`i`, `j`) without bounds validation.
    ///
    /// The caller must have established `i < nr_rows` and `j < nr_columns`;
    /// behavior on other inputs is unspecified.
    fn get_unchecked(&self, i: usize, j: usize) -> F;
}

/// Structural equality between two matrices of any back-end.
///
/// Compares the full shape, coordinate by coordinate. For a triangular
/// operand this includes its implicit zero half: the other matrix must be
/// exactly zero there. Identically packed operands can compare their
/// representations directly through `PartialEq` instead.
pub fn eq<F: Element>(left: &impl Matrix<F>, right: &impl Matrix<F>) -> bool {
    left.nr_rows() == right.nr_rows()
        && left.nr_columns() == right.nr_columns()
        && (0..left.nr_rows())
            .cartesian_product(0..left.nr_columns())
            .all(|(i, j)| left.get_unchecked(i, j) == right.get_unchecked(i, j))
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{self, DenseMatrix};

    #[test]
    fn eq_same_values() {
        let left = DenseMatrix::from_data(vec![vec![1_f64, 2_f64], vec![0_f64, 3_f64]]);
        let right = DenseMatrix::from_data(vec![vec![1_f64, 2_f64], vec![0_f64, 3_f64]]);

        assert!(matrix::eq(&left, &right));
    }

    #[test]
    fn eq_different_value() {
        let left = DenseMatrix::from_data(vec![vec![1_f64, 2_f64], vec![0_f64, 3_f64]]);
        let right = DenseMatrix::from_data(vec![vec![1_f64, 2_f64], vec![4_f64, 3_f64]]);

        assert!(!matrix::eq(&left, &right));
    }

    #[test]
    fn eq_different_shape() {
        let left = DenseMatrix::from_data(vec![vec![1_f64, 2_f64]]);
        let right = DenseMatrix::from_data(vec![vec![1_f64], vec![2_f64]]);

        assert!(!matrix::eq(&left, &right));
    }
}
