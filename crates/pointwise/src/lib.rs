//! Batched 2D point arithmetic.
//!
//! Layers
//! - `point`: the `Point2` value type and its scalar arithmetic, plus uniform
//!   random points on closed intervals.
//! - `batch`: the same arithmetic over whole point slices, dispatched as one
//!   SIMD kernel call on the slice viewed as interleaved `f64`s.
//!
//! All operations are synchronous and pure apart from the random helpers.
//! Binary batch operations on slices of different lengths panic; use the
//! `checked_*` forms to get a `BatchError` instead.

pub mod batch;
pub mod error;
pub mod point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use batch::PointSliceExt;
pub use error::BatchError;
pub use point::{CheckCfg, Interval, Point2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::batch::rand::{
        random_sequence, random_sequence_with, random_sequence_xy, random_sequence_xy_with,
        replay_sequence,
    };
    pub use crate::batch::{
        checked_elementwise_add, checked_elementwise_sub, elementwise_add, elementwise_add_assign,
        elementwise_sub, elementwise_sub_assign, magnitude_squared_sum, scale_in_place,
        scale_then_add, scale_then_add_in_place, scale_then_sub, scale_then_sub_in_place, scaled,
        PointSliceExt,
    };
    pub use crate::point::rand::{
        random_point, random_point_with, random_point_xy, random_point_xy_with, ReplayToken,
    };
    pub use crate::{BatchError, CheckCfg, Interval, Point2};
}
