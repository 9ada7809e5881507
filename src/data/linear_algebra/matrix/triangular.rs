//! # Triangular matrices
//!
//! Lower and upper triangular matrices packed densely over their stored
//! half. Only the `t * (t + 1) / 2` entries of the stored triangle are
//! backed by memory; the other half reads as zero and cannot be written.
//!
//! The two orientations share one addressing core with swapped row and
//! column roles, which makes transposition a constant-time reinterpretation
//! of the same buffer rather than a copy.
use std::cell::{Ref, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

use itertools::Itertools;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

/// Addressing rule of one triangular half.
///
/// In the lower orientation, row `i` occupies `i + 1` consecutive slots
/// after the `i * (i + 1) / 2` slots of the rows above it. The upper
/// orientation reuses the same arithmetic with the coordinate roles swapped.
pub trait Orientation {
    /// Orientation obtained by transposing.
    type Transpose: Orientation<Transpose = Self>;

    /// Whether coordinate (`i`, `j`) has a physical slot.
    fn is_stored(i: usize, j: usize) -> bool;
    /// Packed offset of a stored coordinate.
    ///
    /// Injective and exactly onto `[0, t * (t + 1) / 2)` over the stored
    /// half of a triangle of dimension `t`.
    ///
    /// # Panics
    ///
    /// When (`i`, `j`) lies in the implicit zero half: no physical slot
    /// exists there.
    fn index(i: usize, j: usize) -> usize;
    /// The dimension whose triangular number sizes the backing buffer.
    fn triangle_size(nr_rows: usize, nr_columns: usize) -> usize;
}

/// Entries on and below the main diagonal are stored.
#[derive(Debug)]
pub struct Lower;
/// Entries on and above the main diagonal are stored.
#[derive(Debug)]
pub struct Upper;

impl Orientation for Lower {
    type Transpose = Upper;

    fn is_stored(i: usize, j: usize) -> bool {
        j <= i
    }

    fn index(i: usize, j: usize) -> usize {
        assert!(
            j <= i,
            "({}, {}) lies in the implicit zero half, no physical slot exists",
            i, j,
        );

        j + i * (i + 1) / 2
    }

    fn triangle_size(nr_rows: usize, _nr_columns: usize) -> usize {
        nr_rows
    }
}

impl Orientation for Upper {
    type Transpose = Lower;

    fn is_stored(i: usize, j: usize) -> bool {
        i <= j
    }

    fn index(i: usize, j: usize) -> usize {
        Lower::index(j, i)
    }

    fn triangle_size(_nr_rows: usize, nr_columns: usize) -> usize {
        nr_columns
    }
}

/// Triangular matrix packed densely over its stored half.
///
/// The backing buffer is shared with transpose views: a view and its origin
/// address the same memory, so a write through either is visible through
/// both. That aliasing is the point of the constant-time transpose; `clone`
/// is the operation that copies the buffer.
///
/// There is no internal synchronization, and the shared-ownership backing
/// makes the type `!Send` and `!Sync`; concurrent access requires external
/// serialization.
#[derive(Debug)]
pub struct Triangular<F, O> {
    backing: Rc<RefCell<Vec<F>>>,
    nr_rows: usize,
    nr_columns: usize,

    orientation: PhantomData<O>,
}

/// Mutable on and below the main diagonal.
pub type LowerTriangular<F> = Triangular<F, Lower>;
/// Mutable on and above the main diagonal.
pub type UpperTriangular<F> = Triangular<F, Upper>;

impl<F: Element, O: Orientation> Triangular<F, O> {
    /// Create a zero matrix of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        let t = O::triangle_size(nr_rows, nr_columns);

        Self::wrap(vec![F::zero(); t * (t + 1) / 2], nr_rows, nr_columns)
    }

    fn wrap(backing: Vec<F>, nr_rows: usize, nr_columns: usize) -> Self {
        let t = O::triangle_size(nr_rows, nr_columns);
        debug_assert_eq!(backing.len(), t * (t + 1) / 2);

        Self {
            backing: Rc::new(RefCell::new(backing)),
            nr_rows,
            nr_columns,

            orientation: PhantomData,
        }
    }

    /// Project an arbitrary matrix onto the stored half.
    ///
    /// Copies `source`'s values over the stored triangle; values outside it
    /// are discarded. This is a lossy projection, not a copy.
    pub fn from_matrix(source: &impl Matrix<F>) -> Self {
        let result = Self::zeros(source.nr_rows(), source.nr_columns());
        {
            let mut backing = result.backing.borrow_mut();
            let coordinates = (0..result.nr_rows)
                .cartesian_product(0..result.nr_columns)
                .filter(|&(i, j)| O::is_stored(i, j));
            for (i, j) in coordinates {
                backing[O::index(i, j)] = source.get_unchecked(i, j);
            }
        }

        result
    }

    /// Set the value at coordinate (`i`, `j`).
    ///
    /// # Panics
    ///
    /// When the coordinate is outside the matrix shape, or lies in the
    /// implicit zero half. Those coordinates have no physical slot, and
    /// silently dropping the write would let the caller believe a real cell
    /// changed.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        assert!(
            i < self.nr_rows && j < self.nr_columns,
            "index ({}, {}) out of bounds for {} x {} matrix",
            i, j, self.nr_rows, self.nr_columns,
        );

        self.set_unchecked(i, j, value);
    }

    /// Set the value at coordinate (`i`, `j`) without bounds validation.
    ///
    /// The caller must have established `i < nr_rows` and `j < nr_columns`.
    /// A coordinate in the implicit zero half still panics: that is a
    /// structural violation, not a bounds question.
    pub fn set_unchecked(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        self.backing.borrow_mut()[O::index(i, j)] = value;
    }

    /// Transposed view over the same backing buffer.
    ///
    /// Constant-time and copy-free: the view has swapped dimensions and the
    /// dual addressing rule, nothing else. Transposing twice yields a view
    /// observably identical to the origin.
    pub fn transpose(&self) -> Triangular<F, O::Transpose> {
        Triangular {
            backing: Rc::clone(&self.backing),
            nr_rows: self.nr_columns,
            nr_columns: self.nr_rows,

            orientation: PhantomData,
        }
    }
}

impl<F: Element> Triangular<F, Lower> {
    /// Row `i` as a lazily assembled view.
    ///
    /// The first `min(i + 1, nr_columns)` entries are a live slice into the
    /// backing buffer, the remaining entries form a virtual zero tail that
    /// is never materialized.
    ///
    /// # Panics
    ///
    /// When `i` is out of bounds.
    pub fn row(&self, i: usize) -> Slice<'_, F> {
        assert!(
            i < self.nr_rows,
            "row index {} out of bounds for {} x {} matrix",
            i, self.nr_rows, self.nr_columns,
        );

        Slice {
            backing: self.backing.borrow(),
            offset: i * (i + 1) / 2,
            nr_stored: (i + 1).min(self.nr_columns),
            len: self.nr_columns,
        }
    }
}

impl<F: Element> Triangular<F, Upper> {
    /// Column `j` as a lazily assembled view.
    ///
    /// The dual of the lower orientation's `row`: the first
    /// `min(j + 1, nr_rows)` entries are a live slice into the backing
    /// buffer, followed by a virtual zero tail.
    ///
    /// # Panics
    ///
    /// When `j` is out of bounds.
    pub fn column(&self, j: usize) -> Slice<'_, F> {
        assert!(
            j < self.nr_columns,
            "column index {} out of bounds for {} x {} matrix",
            j, self.nr_rows, self.nr_columns,
        );

        Slice {
            backing: self.backing.borrow(),
            offset: j * (j + 1) / 2,
            nr_stored: (j + 1).min(self.nr_rows),
            len: self.nr_rows,
        }
    }
}

impl<F: Element, O: Orientation> Matrix<F> for Triangular<F, O> {
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

        self.get_unchecked(i, j)
    }

    fn get_unchecked(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        if O::is_stored(i, j) {
            self.backing.borrow()[O::index(i, j)].clone()
        } else {
            F::zero()
        }
    }
}

impl<F: Element, O: Orientation> PartialEq for Triangular<F, O> {
    /// Fast path between identically packed matrices: compare dimensions and
    /// packed contents directly. Views aliasing one buffer are equal without
    /// touching the data.
    fn eq(&self, other: &Self) -> bool {
        self.nr_rows == other.nr_rows
            && self.nr_columns == other.nr_columns
            && (Rc::ptr_eq(&self.backing, &other.backing)
                || *self.backing.borrow() == *other.backing.borrow())
    }
}

impl<F: Element, O: Orientation> Clone for Triangular<F, O> {
    /// Deep copy: the clone owns an independent backing buffer with
    /// identical contents. `transpose` is the operation that shares storage,
    /// never this one.
    fn clone(&self) -> Self {
        Self {
            backing: Rc::new(RefCell::new(self.backing.borrow().clone())),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,

            orientation: PhantomData,
        }
    }
}

/// Contiguous stored run of a triangular matrix, followed by a virtual zero
/// tail.
///
/// Holds a borrow of the shared backing buffer, so the matrix cannot be
/// mutated while the view is alive.
pub struct Slice<'a, F> {
    backing: Ref<'a, Vec<F>>,
    offset: usize,
    nr_stored: usize,
    len: usize,
}

impl<F: Element> Slice<'_, F> {
    /// Number of entries, zero tail included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at `index`.
    ///
    /// # Panics
    ///
    /// When `index` is out of bounds.
    pub fn get(&self, index: usize) -> F {
        assert!(
            index < self.len,
            "index {} out of bounds for slice of length {}",
            index, self.len,
        );

        self.value_at(index)
    }

    /// The value at `index` without bounds validation.
    ///
    /// The caller must have established `index < len`.
    pub fn get_unchecked(&self, index: usize) -> F {
        debug_assert!(index < self.len);

        self.value_at(index)
    }

    /// Iterate over all values, zero tail included.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        (0..self.len).map(move |index| self.value_at(index))
    }

    fn value_at(&self, index: usize) -> F {
        if index < self.nr_stored {
            self.backing[self.offset + index].clone()
        } else {
            F::zero()
        }
    }
}
