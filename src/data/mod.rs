//! # Storing packed containers in memory
//!
//! This module provides the data structures used to represent structured
//! matrices and vectors in minimal memory.

pub mod linear_algebra;
