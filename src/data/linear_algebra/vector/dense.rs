//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size. The fully mutable,
//! unpacked counterpart of the bit-packed vector.
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::Vector;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F: Element> Dense<F> {
    /// Create a `DenseVector` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Values, one per index. Will not be changed and directly
    /// used for creation.
    /// * `len`: Length of the vector represented.
    pub fn new(data: Vec<F>, len: usize) -> Self {
        debug_assert_eq!(data.len(), len);

        Self { data }
    }

    /// Create a vector with all values being equal to a given value.
    pub fn constant(value: F, len: usize) -> Self {
        Self { data: vec![value; len] }
    }
}

impl<F: Element> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.data.len());

        &self.data[index]
    }
}

impl<F: Element> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.data.len());

        &mut self.data[index]
    }
}

impl<F: Element> Vector<F> for Dense<F> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> F {
        assert!(
            index < self.data.len(),
            "index {} out of bounds for vector of length {}",
            index, self.data.len(),
        );

        self.data[index].clone()
    }

    fn get_unchecked(&self, index: usize) -> F {
        debug_assert!(index < self.data.len());

        self.data[index].clone()
    }

    fn set(&mut self, index: usize, value: F) {
        assert!(
            index < self.data.len(),
            "index {} out of bounds for vector of length {}",
            index, self.data.len(),
        );

        self.data[index] = value;
    }

    /// Every value is stored exactly as written.
    fn is_fully_mutable(&self) -> bool {
        true
    }
}

impl<F: Element> fmt::Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::vector::{DenseVector, Vector};

    fn test_vector() -> DenseVector<f64> {
        DenseVector::new(vec![0_f64, 5_f64, 6_f64], 3)
    }

    #[test]
    fn new() {
        let v = test_vector();

        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v[0], 0_f64);
    }

    #[test]
    fn constant() {
        let v = DenseVector::constant(1.5_f64, 4);

        assert_eq!(v.len(), 4);
        assert_eq!(v.get(0), 1.5_f64);
        assert_eq!(v.get(3), 1.5_f64);
    }

    #[test]
    fn get_set() {
        let mut v = test_vector();

        // Getting a nonzero value
        assert_eq!(v.get(1), 5_f64);

        // Changing a value
        v.set(1, 3_f64);
        assert_eq!(v.get(1), 3_f64);
        assert_eq!(v.get_unchecked(1), 3_f64);

        assert!(v.is_fully_mutable());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        let v = test_vector();

        v.get(400);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_set() {
        let mut v = test_vector();

        v.set(400, 45_f64);
    }
}
