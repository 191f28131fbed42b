//! Flat scalar views of point slices.
//!
//! A `[Point2]` of length `n` is viewed as a `[f64]` of length `2n` in
//! `x₀, y₀, x₁, y₁, …` order. The cast is a `bytemuck` slice cast, valid
//! because `Point2` is `#[repr(C)]` with two `f64` fields and no padding
//! (enforced by its `Pod` derive).

use crate::point::Point2;

#[inline]
pub fn as_flat(points: &[Point2]) -> &[f64] {
    bytemuck::cast_slice(points)
}

#[inline]
pub fn as_flat_mut(points: &mut [Point2]) -> &mut [f64] {
    bytemuck::cast_slice_mut(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_view_interleaves_coordinates() {
        let pts = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        assert_eq!(as_flat(&pts), &[1.0, 2.0, 3.0, 4.0]);
        assert!(as_flat(&[]).is_empty());
    }

    #[test]
    fn mutable_view_writes_through() {
        let mut pts = vec![Point2::ZERO; 2];
        as_flat_mut(&mut pts)[3] = 9.0;
        assert_eq!(pts[1], Point2::new(0.0, 9.0));
    }
}
