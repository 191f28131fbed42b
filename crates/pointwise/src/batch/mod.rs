//! Batched arithmetic over point sequences.
//!
//! Purpose
//! - Add, subtract, scale, per-axis scale-then-offset, and squared norm over
//!   whole `[Point2]` slices with one vectorized kernel call each.
//!
//! Model
//! - A slice of `n` points is viewed as `2n` interleaved scalars (`flat`) and
//!   handed to an `f64x4` kernel (`kernel`); results are viewed back as points.
//! - `ops` holds the free functions, `ext` the same surface as methods, and
//!   `rand` the random sequence helpers.
//! - This layer never calls the scalar `Point2` operators.

pub mod ext;
pub mod flat;
pub mod kernel;
pub mod ops;
pub mod rand;

pub use ext::PointSliceExt;
pub use flat::{as_flat, as_flat_mut};
pub use ops::{
    checked_elementwise_add, checked_elementwise_add_assign, checked_elementwise_sub,
    checked_elementwise_sub_assign, elementwise_add, elementwise_add_assign, elementwise_sub,
    elementwise_sub_assign, identity, magnitude_squared_sum, scale_in_place, scale_then_add,
    scale_then_add_in_place, scale_then_sub, scale_then_sub_in_place, scaled,
};
