//! # Vector types
//!
//! The `Vector` trait defines the access contract shared by all vector types
//! in this module, regardless of back-end. Back-ends with a restricted value
//! domain participate through the same contract; they quantize on write and
//! report a limited mutation surface.

pub use bit::Bit as BitVector;
pub use dense::Dense as DenseVector;

mod bit;
mod dense;

/// Defines basic ways to read or change a vector, regardless of back-end.
pub trait Vector<F> {
    /// Number of items represented by the vector.
    fn len(&self) -> usize;

    /// Whether the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at `index`.
    ///
    /// # Panics
    ///
    /// When `index` is out of bounds.
    fn get(&self, index: usize) -> F;

    /// The value at `index` without bounds validation.
    ///
    /// The caller must have established `index < len`; behavior on other
    /// inputs is unspecified.
    fn get_unchecked(&self, index: usize) -> F;

    /// Set the value at `index`.
    ///
    /// Back-ends that cannot represent every value quantize `value` into
    /// their domain; see `is_fully_mutable`.
    ///
    /// # Panics
    ///
    /// When `index` is out of bounds.
    fn set(&mut self, index: usize, value: F);

    /// Whether `set` stores every value exactly.
    ///
    /// `false` for back-ends restricted to a sub-domain, which can only
    /// quantize written values.
    fn is_fully_mutable(&self) -> bool;
}
