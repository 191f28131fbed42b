//! Scalar 2D point type, closed intervals, and comparison tolerances.
//!
//! - `Point2`: two back-to-back `f64` coordinates; `Pod` so slices can be
//!   viewed as flat scalar buffers (see `batch::flat`).
//! - `Interval`: validated closed interval used by the random helpers.
//! - `CheckCfg`: centralizes the tolerance used when comparing batched and
//!   scalar results.

use bytemuck::{Pod, Zeroable};
use nalgebra::Vector2;
use std::ops::RangeInclusive;

/// A point (or vector) in R² with `f64` coordinates.
///
/// Layout: `#[repr(C)]`, no padding. A `[Point2]` of length `n` has exactly the
/// bytes of a `[f64]` of length `2n` in `x, y, x, y, …` order; the `Pod`
/// derive fails to compile if that ever stops being true.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// `x² + y²`.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Componentwise product; `s` acts as a per-axis scale.
    #[inline]
    pub fn mul_componentwise(self, s: Point2) -> Self {
        Self {
            x: self.x * s.x,
            y: self.y * s.y,
        }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Self::Output {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::AddAssign for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Point2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Self::Output {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::SubAssign for Point2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Point2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Neg for Point2 {
    type Output = Point2;
    #[inline]
    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::ops::Mul<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul<Point2> for f64 {
    type Output = Point2;
    #[inline]
    fn mul(self, rhs: Point2) -> Self::Output {
        rhs.scale(self)
    }
}

impl std::ops::MulAssign<f64> for Point2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl From<Point2> for Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        p.to_vector()
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point2::new(x, y)
    }
}

impl From<Point2> for [f64; 2] {
    #[inline]
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2::new(x, y)
    }
}

/// Closed interval `[lo, hi]` with `lo <= hi` and a finite width `hi - lo`
/// (which implies finite bounds).
///
/// Invariant holds by construction, so sampling from it never fails: uniform
/// float sampling scales by `hi - lo` and would overflow on a wider range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// `None` if `lo > hi`, either bound is NaN, or `hi - lo` overflows.
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Option<Self> {
        if lo <= hi && (hi - lo).is_finite() {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    /// `[-r, r]`; `None` for negative `r` or `r > f64::MAX / 2`.
    #[inline]
    pub fn symmetric(r: f64) -> Option<Self> {
        Self::new(-r, r)
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }
    #[inline]
    pub fn as_range(&self) -> RangeInclusive<f64> {
        self.lo..=self.hi
    }
}

impl TryFrom<RangeInclusive<f64>> for Interval {
    type Error = RangeInclusive<f64>;

    fn try_from(range: RangeInclusive<f64>) -> Result<Self, Self::Error> {
        Interval::new(*range.start(), *range.end()).ok_or(range)
    }
}

/// Tolerances for comparing batched results against the scalar mapping.
///
/// Element-wise results are bit-exact; only the lane-wise sum reduction
/// reorders additions and so may round differently.
#[derive(Clone, Copy, Debug)]
pub struct CheckCfg {
    pub eps_abs: f64,
    pub eps_rel: f64,
}

impl Default for CheckCfg {
    fn default() -> Self {
        Self {
            eps_abs: 1e-12,
            eps_rel: 1e-12,
        }
    }
}

impl CheckCfg {
    /// `|a - b| <= eps_abs + eps_rel * max(|a|, |b|)`.
    #[inline]
    pub fn close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps_abs + self.eps_rel * a.abs().max(b.abs())
    }

    #[inline]
    pub fn close_points(&self, a: Point2, b: Point2) -> bool {
        self.close(a.x, b.x) && self.close(a.y, b.y)
    }
}
