//! # Packed linear-algebra storage
//!
//! Space- and access-efficient containers for structured numeric data: a
//! triangular matrix stored only over its non-zero half, and a boolean vector
//! stored one bit per element in machine words. Consumers interact with both
//! through the generic [`Matrix`](data::linear_algebra::matrix::Matrix) and
//! [`Vector`](data::linear_algebra::vector::Vector) read contracts, so the
//! packed representations are transparent to algorithms built on top of them.
#![warn(missing_docs)]

pub mod data;
