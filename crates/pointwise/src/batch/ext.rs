//! Method-call surface for point slices.

use super::ops;
use crate::error::BatchError;
use crate::point::Point2;

/// Batched arithmetic as methods on `[Point2]` (and so on `Vec<Point2>`).
///
/// Thin wrappers over `batch::ops`; the same panics and short-circuits apply.
pub trait PointSliceExt {
    fn add_elementwise(&self, other: &[Point2]) -> Vec<Point2>;
    fn sub_elementwise(&self, other: &[Point2]) -> Vec<Point2>;
    fn add_assign_elementwise(&mut self, other: &[Point2]);
    fn sub_assign_elementwise(&mut self, other: &[Point2]);
    fn try_add_elementwise(&self, other: &[Point2]) -> Result<Vec<Point2>, BatchError>;
    fn try_sub_elementwise(&self, other: &[Point2]) -> Result<Vec<Point2>, BatchError>;
    fn scale_in_place(&mut self, s: f64);
    fn scaled(&self, s: f64) -> Vec<Point2>;
    fn magnitude_squared_sum(&self) -> f64;
    fn scale_then_add(&self, s: Point2, q: Point2) -> Vec<Point2>;
    fn scale_then_sub(&self, s: Point2, q: Point2) -> Vec<Point2>;
    fn scale_then_add_in_place(&mut self, s: Point2, q: Point2);
    fn scale_then_sub_in_place(&mut self, s: Point2, q: Point2);
}

impl PointSliceExt for [Point2] {
    #[track_caller]
    fn add_elementwise(&self, other: &[Point2]) -> Vec<Point2> {
        ops::elementwise_add(self, other)
    }
    #[track_caller]
    fn sub_elementwise(&self, other: &[Point2]) -> Vec<Point2> {
        ops::elementwise_sub(self, other)
    }
    #[track_caller]
    fn add_assign_elementwise(&mut self, other: &[Point2]) {
        ops::elementwise_add_assign(self, other)
    }
    #[track_caller]
    fn sub_assign_elementwise(&mut self, other: &[Point2]) {
        ops::elementwise_sub_assign(self, other)
    }
    fn try_add_elementwise(&self, other: &[Point2]) -> Result<Vec<Point2>, BatchError> {
        ops::checked_elementwise_add(self, other)
    }
    fn try_sub_elementwise(&self, other: &[Point2]) -> Result<Vec<Point2>, BatchError> {
        ops::checked_elementwise_sub(self, other)
    }
    fn scale_in_place(&mut self, s: f64) {
        ops::scale_in_place(self, s)
    }
    fn scaled(&self, s: f64) -> Vec<Point2> {
        ops::scaled(self, s)
    }
    fn magnitude_squared_sum(&self) -> f64 {
        ops::magnitude_squared_sum(self)
    }
    fn scale_then_add(&self, s: Point2, q: Point2) -> Vec<Point2> {
        ops::scale_then_add(self, s, q)
    }
    fn scale_then_sub(&self, s: Point2, q: Point2) -> Vec<Point2> {
        ops::scale_then_sub(self, s, q)
    }
    fn scale_then_add_in_place(&mut self, s: Point2, q: Point2) {
        ops::scale_then_add_in_place(self, s, q)
    }
    fn scale_then_sub_in_place(&mut self, s: Point2, q: Point2) {
        ops::scale_then_sub_in_place(self, s, q)
    }
}
