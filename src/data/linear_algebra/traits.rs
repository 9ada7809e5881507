//! # Traits for elements of packed data structures
//!
//! Packed storage leaves part of the logical shape unbacked by memory, so it
//! needs a well-defined zero to return for those coordinates, and values are
//! handed out by clone rather than by reference because backing buffers can
//! be shared between views.
use std::fmt::{Debug, Display};

use num_traits::Zero;

/// Element of a `Vector` or `Matrix` type.
///
/// Coordinates without a physical slot read as `Zero::zero()`.
pub trait Element: Zero + Clone + PartialEq + Display + Debug {}

impl<T: Zero + Clone + PartialEq + Display + Debug> Element for T {}
