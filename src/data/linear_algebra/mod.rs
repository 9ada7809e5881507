//! # Linear algebra primitives
//!
//! Storage primitives that trade generality for space: only the entries that
//! can be non-zero are backed by memory, everything else is addressed
//! arithmetically.

pub mod matrix;
pub mod traits;
pub mod vector;
