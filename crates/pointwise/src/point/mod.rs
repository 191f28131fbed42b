//! Scalar 2D point arithmetic.
//!
//! Purpose
//! - One small value type, `Point2`, with componentwise add/subtract, scalar
//!   scale, and squared magnitude. Everything is total; there is no failure mode.
//! - Uniform random points on closed intervals (`rand`).
//!
//! The batched layer (`crate::batch`) does not call into this module's
//! arithmetic; it only relies on the memory layout of `Point2`.

pub mod rand;
mod types;

pub use types::{CheckCfg, Interval, Point2};

#[cfg(test)]
mod tests;
