//! # Dense matrix
//!
//! Uses a row-major `Vec<Vec<F>>` as underlying data structure. Dimensions
//! are fixed at creation. Serves as the fully general operand for projection
//! into packed storage and for structural comparison.
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

/// Row-major matrix with every coordinate backed by memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Element> Dense<F> {
    /// Create a `DenseMatrix` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of equal length. Will not be changed and directly used
    /// for creation.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_rows, nr_columns }
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// # Panics
    ///
    /// When the coordinate is outside the matrix shape.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        assert!(
            i < self.nr_rows && j < self.nr_columns,
            "index ({}, {}) out of bounds for {} x {} matrix",
            i, j, self.nr_rows, self.nr_columns,
        );

        self.data[i][j] = value;
    }
}

impl<F: Element> Matrix<F> for Dense<F> {
    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get(&self, i: usize, j: usize) -> F {
        assert!(
            i < self.nr_rows && j < self.nr_columns,
            "index ({}, {}) out of bounds for {} x {} matrix",
            i, j, self.nr_rows, self.nr_columns,
        );

        self.data[i][j].clone()
    }

    fn get_unchecked(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        self.data[i][j].clone()
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1_f64, 2_f64, 0_f64],
            vec![0_f64, 5_f64, 6_f64],
        ])
    }

    #[test]
    fn from_data() {
        let m = test_matrix();

        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m.get(0, 0), 1_f64);
        assert_eq!(m.get(1, 2), 6_f64);
    }

    #[test]
    fn zeros() {
        let (rows, columns) = (299, 482);
        let m = DenseMatrix::<f64>::zeros(rows, columns);

        assert_eq!(m.get(0, 0), 0_f64);
        assert_eq!(m.get(rows - 1, columns - 1), 0_f64);
    }

    #[test]
    fn get_set() {
        let mut m = test_matrix();

        // Getting a zero value
        assert_eq!(m.get(0, 2), 0_f64);

        // Getting a nonzero value
        assert_eq!(m.get(0, 1), 2_f64);

        // Setting to the same value doesn't change
        let v = m.get(0, 1);
        m.set(0, 1, v);
        assert_eq!(m.get(0, 1), 2_f64);

        // Changing a value
        m.set(1, 1, 3_f64);
        assert_eq!(m.get(1, 1), 3_f64);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        let m = test_matrix();

        m.get(2, 0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_set() {
        let mut m = test_matrix();

        m.set(2, 0, 4_f64);
    }
}
