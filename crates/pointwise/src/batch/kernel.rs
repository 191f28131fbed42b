//! Vectorized kernels over flat `f64` buffers.
//!
//! Each kernel makes a single pass over the whole buffer in `f64x4` lanes
//! (two points per lane) and finishes the remainder with scalar code. Lane
//! chunks are obtained with a `bytemuck` cast to `[[f64; 4]]`, so loads and
//! stores are plain array copies with no alignment requirement.
//!
//! All multi-operand kernels require equal lengths and panic otherwise; the
//! point-level callers in `batch::ops` check first and report in point units.
//!
//! Lane bodies and the scalar tail perform the same IEEE operations in the same
//! order (multiply, then add), so an element's result does not depend on where
//! it sits in the buffer. No kernel fuses multiply and add.

use wide::f64x4;

const LANES: usize = 4;

#[inline]
fn lane_split(len: usize) -> usize {
    len - len % LANES
}

#[inline]
fn lanes(v: &[f64]) -> &[[f64; LANES]] {
    bytemuck::cast_slice(v)
}

#[inline]
fn lanes_mut(v: &mut [f64]) -> &mut [[f64; LANES]] {
    bytemuck::cast_slice_mut(v)
}

#[inline]
fn check_len(what: &str, a: usize, b: usize) {
    assert_eq!(a, b, "{what}: flat buffers of unequal length");
}

fn binary(
    a: &[f64],
    b: &[f64],
    out: &mut [f64],
    simd: impl Fn(f64x4, f64x4) -> f64x4,
    scalar: impl Fn(f64, f64) -> f64,
) {
    check_len("binary kernel", a.len(), b.len());
    check_len("binary kernel", a.len(), out.len());
    let k = lane_split(a.len());
    let (a_head, a_tail) = a.split_at(k);
    let (b_head, b_tail) = b.split_at(k);
    let (o_head, o_tail) = out.split_at_mut(k);
    for ((o, x), y) in lanes_mut(o_head).iter_mut().zip(lanes(a_head)).zip(lanes(b_head)) {
        *o = simd(f64x4::new(*x), f64x4::new(*y)).to_array();
    }
    for ((o, &x), &y) in o_tail.iter_mut().zip(a_tail).zip(b_tail) {
        *o = scalar(x, y);
    }
}

fn binary_assign(
    acc: &mut [f64],
    b: &[f64],
    simd: impl Fn(f64x4, f64x4) -> f64x4,
    scalar: impl Fn(f64, f64) -> f64,
) {
    check_len("binary kernel", acc.len(), b.len());
    let k = lane_split(acc.len());
    let (a_head, a_tail) = acc.split_at_mut(k);
    let (b_head, b_tail) = b.split_at(k);
    for (x, y) in lanes_mut(a_head).iter_mut().zip(lanes(b_head)) {
        *x = simd(f64x4::new(*x), f64x4::new(*y)).to_array();
    }
    for (x, &y) in a_tail.iter_mut().zip(b_tail) {
        *x = scalar(*x, y);
    }
}

/// `out[i] = f(s[i], a[i], q[i])` over three inputs.
fn ternary(
    s: &[f64],
    a: &[f64],
    q: &[f64],
    out: &mut [f64],
    simd: impl Fn(f64x4, f64x4, f64x4) -> f64x4,
    scalar: impl Fn(f64, f64, f64) -> f64,
) {
    check_len("ternary kernel", s.len(), a.len());
    check_len("ternary kernel", s.len(), q.len());
    check_len("ternary kernel", s.len(), out.len());
    let k = lane_split(a.len());
    let (s_head, s_tail) = s.split_at(k);
    let (a_head, a_tail) = a.split_at(k);
    let (q_head, q_tail) = q.split_at(k);
    let (o_head, o_tail) = out.split_at_mut(k);
    let heads = lanes(s_head).iter().zip(lanes(a_head)).zip(lanes(q_head));
    for (o, ((sv, av), qv)) in lanes_mut(o_head).iter_mut().zip(heads) {
        *o = simd(f64x4::new(*sv), f64x4::new(*av), f64x4::new(*qv)).to_array();
    }
    let tails = s_tail.iter().zip(a_tail).zip(q_tail);
    for (o, ((&sv, &av), &qv)) in o_tail.iter_mut().zip(tails) {
        *o = scalar(sv, av, qv);
    }
}

/// `a[i] = f(s[i], a[i], q[i])`, with `a` updated in place.
fn ternary_assign(
    s: &[f64],
    a: &mut [f64],
    q: &[f64],
    simd: impl Fn(f64x4, f64x4, f64x4) -> f64x4,
    scalar: impl Fn(f64, f64, f64) -> f64,
) {
    check_len("ternary kernel", s.len(), a.len());
    check_len("ternary kernel", s.len(), q.len());
    let k = lane_split(a.len());
    let (s_head, s_tail) = s.split_at(k);
    let (a_head, a_tail) = a.split_at_mut(k);
    let (q_head, q_tail) = q.split_at(k);
    let heads = lanes(s_head).iter().zip(lanes(q_head));
    for (av, (sv, qv)) in lanes_mut(a_head).iter_mut().zip(heads) {
        *av = simd(f64x4::new(*sv), f64x4::new(*av), f64x4::new(*qv)).to_array();
    }
    for (av, (&sv, &qv)) in a_tail.iter_mut().zip(s_tail.iter().zip(q_tail)) {
        *av = scalar(sv, *av, qv);
    }
}

/// `out = a + b`.
pub fn add(a: &[f64], b: &[f64], out: &mut [f64]) {
    binary(a, b, out, |x, y| x + y, |x, y| x + y);
}

/// `out = a - b`.
pub fn sub(a: &[f64], b: &[f64], out: &mut [f64]) {
    binary(a, b, out, |x, y| x - y, |x, y| x - y);
}

/// `acc += b`.
pub fn add_assign(acc: &mut [f64], b: &[f64]) {
    binary_assign(acc, b, |x, y| x + y, |x, y| x + y);
}

/// `acc -= b`.
pub fn sub_assign(acc: &mut [f64], b: &[f64]) {
    binary_assign(acc, b, |x, y| x - y, |x, y| x - y);
}

/// `acc *= s` for a single scalar `s`.
pub fn scale_assign(acc: &mut [f64], s: f64) {
    let sv = f64x4::splat(s);
    let k = lane_split(acc.len());
    let (head, tail) = acc.split_at_mut(k);
    for x in lanes_mut(head) {
        *x = (f64x4::new(*x) * sv).to_array();
    }
    for x in tail {
        *x *= s;
    }
}

/// `out = s * a + q`, rounded after the product and after the sum.
pub fn mul_add(s: &[f64], a: &[f64], q: &[f64], out: &mut [f64]) {
    ternary(s, a, q, out, |s, a, q| s * a + q, |s, a, q| s * a + q);
}

/// `out = s * a - q`.
pub fn mul_sub(s: &[f64], a: &[f64], q: &[f64], out: &mut [f64]) {
    ternary(s, a, q, out, |s, a, q| s * a - q, |s, a, q| s * a - q);
}

/// `a = s * a + q`.
pub fn mul_add_assign(s: &[f64], a: &mut [f64], q: &[f64]) {
    ternary_assign(s, a, q, |s, a, q| s * a + q, |s, a, q| s * a + q);
}

/// `a = s * a - q`.
pub fn mul_sub_assign(s: &[f64], a: &mut [f64], q: &[f64]) {
    ternary_assign(s, a, q, |s, a, q| s * a - q, |s, a, q| s * a - q);
}

/// `Σ a[i]²`; `0.0` for an empty buffer.
pub fn sum_of_squares(a: &[f64]) -> f64 {
    let k = lane_split(a.len());
    let (head, tail) = a.split_at(k);
    let mut acc = f64x4::splat(0.0);
    for x in lanes(head) {
        let v = f64x4::new(*x);
        acc = acc + v * v;
    }
    acc.to_array().iter().sum::<f64>() + tail.iter().map(|x| x * x).sum::<f64>()
}
