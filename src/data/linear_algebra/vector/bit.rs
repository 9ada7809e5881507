//! # Bit vector
//!
//! Boolean vector packed one bit per element into 64-bit words, for compact
//! representation of vectors whose values are constrained to `{0.0, 1.0}`.
use std::fmt;

use itertools::Itertools;

use crate::data::linear_algebra::vector::{DenseVector, Vector};

/// Value of a set bit.
pub const BIT_ON: f64 = 1.0;
/// Value of a cleared bit.
pub const BIT_OFF: f64 = 0.0;
/// Written values at or above this threshold set a bit, all others clear it.
pub const BIT_THRESHOLD: f64 = 0.5;

const WORD_BITS: usize = u64::BITS as usize;

/// A boolean vector storing one bit per logical element.
///
/// Bits at index `len` and above within the last word are kept at zero by
/// every mutating path, which makes `PartialEq` on the raw words sound.
///
/// Two logically independent indices can share a backing word, so even
/// writes to "different" bits conflict at the word level; callers sharing a
/// vector across threads must serialize all access externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bit {
    words: Vec<u64>,
    len: usize,
}

impl Bit {
    /// Create a vector of `len` cleared bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Thresholded copy of an arbitrary vector.
    ///
    /// Each source value is quantized through the same rule as `set`.
    pub fn from_vector(source: &impl Vector<f64>) -> Self {
        let mut result = Self::new(source.len());
        for index in 0..source.len() {
            result.set(index, source.get_unchecked(index));
        }

        result
    }

    fn bit(&self, index: usize) -> bool {
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 != 0
    }

    /// Sum of all values.
    ///
    /// Because the domain is `{0.0, 1.0}`, this is the population count of
    /// the backing words, summed per word rather than per element.
    pub fn element_sum(&self) -> f64 {
        self.non_zero_count() as f64
    }

    /// Number of set bits.
    pub fn non_zero_count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Unpack into a fully mutable dense vector with the same logical values.
    ///
    /// The counterpart of `clone`, which preserves the packed representation.
    pub fn to_dense(&self) -> DenseVector<f64> {
        DenseVector::new(
            (0..self.len).map(|index| self.get_unchecked(index)).collect(),
            self.len,
        )
    }
}

impl Vector<f64> for Bit {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> f64 {
        assert!(
            index < self.len,
            "index {} out of bounds for vector of length {}",
            index, self.len,
        );

        if self.bit(index) { BIT_ON } else { BIT_OFF }
    }

    fn get_unchecked(&self, index: usize) -> f64 {
        debug_assert!(index < self.len);

        if self.bit(index) { BIT_ON } else { BIT_OFF }
    }

    /// Thresholded write: `value >= BIT_THRESHOLD` sets the bit, any other
    /// value (`NaN` included) clears it.
    fn set(&mut self, index: usize, value: f64) {
        assert!(
            index < self.len,
            "index {} out of bounds for vector of length {}",
            index, self.len,
        );

        let mask = 1_u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value >= BIT_THRESHOLD {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Bits can be toggled, but arbitrary values cannot be stored.
    fn is_fully_mutable(&self) -> bool {
        false
    }
}

impl FromIterator<f64> for Bit {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let values = iter.into_iter().collect::<Vec<_>>();
        let mut result = Self::new(values.len());
        for (index, value) in values.into_iter().enumerate() {
            result.set(index, value);
        }

        result
    }
}

impl fmt::Display for Bit {
    /// One `0` or `1` per logical index, e.g. `[1,0,1]`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}]",
            (0..self.len).map(|index| if self.bit(index) { '1' } else { '0' }).join(","),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::vector::{BitVector, DenseVector, Vector};

    #[test]
    fn new() {
        let v = BitVector::new(5);

        assert_eq!(v.len(), 5);
        assert!(!v.is_empty());
        assert_eq!(v.get(0), 0_f64);
        assert_eq!(v.get(4), 0_f64);
        assert_eq!(v.non_zero_count(), 0);
    }

    #[test]
    fn empty() {
        let v = BitVector::new(0);

        assert!(v.is_empty());
        assert_eq!(v.to_string(), "[]");
    }

    #[test]
    fn set_quantizes_through_the_threshold() {
        let mut v = BitVector::new(8);

        for (index, value) in [0_f64, 0.6, 0.4, 1_f64, 0.5, 0.499, -1_f64, f64::NAN]
            .into_iter()
            .enumerate()
        {
            v.set(index, value);
        }

        assert_eq!(v.get(0), 0_f64);
        assert_eq!(v.get(1), 1_f64);
        assert_eq!(v.get(2), 0_f64);
        assert_eq!(v.get(3), 1_f64);
        // The boundary value sets the bit.
        assert_eq!(v.get(4), 1_f64);
        assert_eq!(v.get(5), 0_f64);
        assert_eq!(v.get(6), 0_f64);
        assert_eq!(v.get(7), 0_f64);

        // Clearing a set bit
        v.set(3, 0.2);
        assert_eq!(v.get(3), 0_f64);
        assert_eq!(v.get_unchecked(1), 1_f64);
    }

    #[test]
    fn thresholded_construction() {
        let v = [0_f64, 0.6, 0.4, 1_f64, 0.5].into_iter().collect::<BitVector>();

        assert_eq!(v.len(), 5);
        assert_eq!(v.get(0), 0_f64);
        assert_eq!(v.get(1), 1_f64);
        assert_eq!(v.get(2), 0_f64);
        assert_eq!(v.get(3), 1_f64);
        assert_eq!(v.get(4), 1_f64);
        assert_eq!(v.element_sum(), 3_f64);
        assert_eq!(v.non_zero_count(), 3);
        assert_eq!(v.to_string(), "[0,1,0,1,1]");
    }

    #[test]
    fn from_vector() {
        let source = DenseVector::constant(0.7_f64, 3);
        let v = BitVector::from_vector(&source);

        assert_eq!(v.to_string(), "[1,1,1]");
    }

    #[test]
    fn counts_ignore_the_trailing_word_bits() {
        let mut v = BitVector::new(70);

        for index in 0..70 {
            v.set(index, 1_f64);
        }
        assert_eq!(v.non_zero_count(), 70);
        assert_eq!(v.element_sum(), 70_f64);
        // Only the six logical bits of the last word are set.
        assert_eq!(v.words.len(), 2);
        assert_eq!(v.words[1], 0b11_1111);

        v.set(69, 0_f64);
        v.set(64, 0_f64);
        assert_eq!(v.non_zero_count(), 68);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        let v = BitVector::new(5);

        v.get(5);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_set() {
        let mut v = BitVector::new(5);

        v.set(5, 1_f64);
    }

    #[test]
    fn clone_is_independent() {
        let original = [1_f64, 0_f64, 1_f64].into_iter().collect::<BitVector>();
        let mut copy = original.clone();

        assert_eq!(original, copy);

        copy.set(1, 1_f64);
        assert_eq!(original.get(1), 0_f64);
        assert_ne!(original, copy);

        let mut original = original;
        original.set(0, 0_f64);
        assert_eq!(copy.get(0), 1_f64);
    }

    #[test]
    fn to_dense_escapes_the_packed_domain() {
        let v = [1_f64, 0_f64, 1_f64].into_iter().collect::<BitVector>();
        let mut unpacked = v.to_dense();

        assert_eq!(unpacked.len(), 3);
        assert_eq!(unpacked.get(0), 1_f64);
        assert_eq!(unpacked.get(1), 0_f64);

        assert!(!v.is_fully_mutable());
        assert!(unpacked.is_fully_mutable());
        unpacked.set(1, 0.25_f64);
        assert_eq!(unpacked.get(1), 0.25_f64);
    }
}
