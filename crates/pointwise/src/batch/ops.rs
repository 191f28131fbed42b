//! Point-sequence operations over the flat kernels.
//!
//! Conventions
//! - Binary operations require equal lengths. The plain forms panic on a
//!   mismatch (a caller bug, never truncated or padded); the `checked_*`
//!   forms return `BatchError::LengthMismatch` instead.
//! - Empty operands short-circuit: an empty result, an untouched receiver, or
//!   `0.0`, without calling into a kernel.
//! - Every operation issues exactly one kernel call over the flat view.

use super::flat::{as_flat, as_flat_mut};
use super::kernel;
use crate::error::BatchError;
use crate::point::Point2;

#[inline]
fn same_len(a: &[Point2], b: &[Point2]) -> Result<(), BatchError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(BatchError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

/// Fatal form of the length precondition.
#[inline]
#[track_caller]
fn assert_same_len(a: &[Point2], b: &[Point2]) {
    if let Err(e) = same_len(a, b) {
        panic!("{e}");
    }
}

/// Identity for sequence addition: the empty sequence.
#[inline]
pub fn identity() -> Vec<Point2> {
    Vec::new()
}

/// `c[i] = a[i] + b[i]`.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[track_caller]
pub fn elementwise_add(a: &[Point2], b: &[Point2]) -> Vec<Point2> {
    assert_same_len(a, b);
    binary_new(a, b, kernel::add)
}

/// `c[i] = a[i] - b[i]`.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[track_caller]
pub fn elementwise_sub(a: &[Point2], b: &[Point2]) -> Vec<Point2> {
    assert_same_len(a, b);
    binary_new(a, b, kernel::sub)
}

/// `a[i] += b[i]`, writing into `a`'s own buffer.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[track_caller]
pub fn elementwise_add_assign(a: &mut [Point2], b: &[Point2]) {
    assert_same_len(a, b);
    binary_assign(a, b, kernel::add_assign);
}

/// `a[i] -= b[i]`, writing into `a`'s own buffer.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[track_caller]
pub fn elementwise_sub_assign(a: &mut [Point2], b: &[Point2]) {
    assert_same_len(a, b);
    binary_assign(a, b, kernel::sub_assign);
}

pub fn checked_elementwise_add(a: &[Point2], b: &[Point2]) -> Result<Vec<Point2>, BatchError> {
    same_len(a, b)?;
    Ok(binary_new(a, b, kernel::add))
}

pub fn checked_elementwise_sub(a: &[Point2], b: &[Point2]) -> Result<Vec<Point2>, BatchError> {
    same_len(a, b)?;
    Ok(binary_new(a, b, kernel::sub))
}

pub fn checked_elementwise_add_assign(a: &mut [Point2], b: &[Point2]) -> Result<(), BatchError> {
    same_len(a, b)?;
    binary_assign(a, b, kernel::add_assign);
    Ok(())
}

pub fn checked_elementwise_sub_assign(a: &mut [Point2], b: &[Point2]) -> Result<(), BatchError> {
    same_len(a, b)?;
    binary_assign(a, b, kernel::sub_assign);
    Ok(())
}

fn binary_new(a: &[Point2], b: &[Point2], k: fn(&[f64], &[f64], &mut [f64])) -> Vec<Point2> {
    if a.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Point2::ZERO; a.len()];
    k(as_flat(a), as_flat(b), as_flat_mut(&mut out));
    out
}

fn binary_assign(a: &mut [Point2], b: &[Point2], k: fn(&mut [f64], &[f64])) {
    if a.is_empty() {
        return;
    }
    k(as_flat_mut(a), as_flat(b));
}

/// Multiply every coordinate by `s`. No-op on an empty slice.
pub fn scale_in_place(a: &mut [Point2], s: f64) {
    if a.is_empty() {
        return;
    }
    kernel::scale_assign(as_flat_mut(a), s);
}

/// New sequence `s * a`.
pub fn scaled(a: &[Point2], s: f64) -> Vec<Point2> {
    let mut out = a.to_vec();
    scale_in_place(&mut out, s);
    out
}

/// `Σ (x_i² + y_i²)`: the squared norm of the whole sequence as one vector.
/// `0.0` for an empty slice.
pub fn magnitude_squared_sum(a: &[Point2]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    kernel::sum_of_squares(as_flat(a))
}

/// `c[i] = (s.x * a[i].x + q.x, s.y * a[i].y + q.y)`.
///
/// `s` is a per-axis scale, not a uniform one.
pub fn scale_then_add(a: &[Point2], s: Point2, q: Point2) -> Vec<Point2> {
    affine_new(a, s, q, kernel::mul_add)
}

/// `c[i] = (s.x * a[i].x - q.x, s.y * a[i].y - q.y)`.
pub fn scale_then_sub(a: &[Point2], s: Point2, q: Point2) -> Vec<Point2> {
    affine_new(a, s, q, kernel::mul_sub)
}

/// In-place form of [`scale_then_add`].
pub fn scale_then_add_in_place(a: &mut [Point2], s: Point2, q: Point2) {
    affine_assign(a, s, q, kernel::mul_add_assign);
}

/// In-place form of [`scale_then_sub`].
pub fn scale_then_sub_in_place(a: &mut [Point2], s: Point2, q: Point2) {
    affine_assign(a, s, q, kernel::mul_sub_assign);
}

type AffineKernel = fn(&[f64], &[f64], &[f64], &mut [f64]);
type AffineAssignKernel = fn(&[f64], &mut [f64], &[f64]);

/// Broadcast `s` and `q` to `a.len()` points; the buffers live for this call only.
#[inline]
fn broadcast(n: usize, s: Point2, q: Point2) -> (Vec<Point2>, Vec<Point2>) {
    (vec![s; n], vec![q; n])
}

fn affine_new(a: &[Point2], s: Point2, q: Point2, k: AffineKernel) -> Vec<Point2> {
    if a.is_empty() {
        return Vec::new();
    }
    let (sa, qa) = broadcast(a.len(), s, q);
    let mut out = vec![Point2::ZERO; a.len()];
    k(as_flat(&sa), as_flat(a), as_flat(&qa), as_flat_mut(&mut out));
    out
}

fn affine_assign(a: &mut [Point2], s: Point2, q: Point2, k: AffineAssignKernel) {
    if a.is_empty() {
        return;
    }
    let (sa, qa) = broadcast(a.len(), s, q);
    k(as_flat(&sa), as_flat_mut(a), as_flat(&qa));
}
