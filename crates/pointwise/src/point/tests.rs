use super::*;
use nalgebra::{vector, Vector2};

#[test]
fn add_and_subtract_componentwise() {
    let p = Point2::new(1.5, -2.0);
    let q = Point2::new(0.25, 4.0);
    assert_eq!(p + q, Point2::new(1.75, 2.0));
    assert_eq!(p - q, Point2::new(1.25, -6.0));

    let mut r = p;
    r += q;
    assert_eq!(r, p + q);
    r -= q;
    assert_eq!(r, p);
    assert_eq!(-p, Point2::new(-1.5, 2.0));
}

#[test]
fn scale_forms_agree() {
    let p = Point2::new(3.0, -0.5);
    let s = -1.25;
    let expected = Point2::new(3.0 * s, -0.5 * s);
    assert_eq!(p.scale(s), expected);
    assert_eq!(p * s, expected);
    assert_eq!(s * p, expected);
    let mut m = p;
    m *= s;
    assert_eq!(m, expected);
}

#[test]
fn magnitude_squared_matches_nalgebra() {
    let p = Point2::new(3.0, 4.0);
    assert_eq!(p.magnitude_squared(), 25.0);
    assert_eq!(Point2::ZERO.magnitude_squared(), 0.0);
    let v: Vector2<f64> = p.into();
    assert!((v.norm_squared() - p.magnitude_squared()).abs() < 1e-12);
}

#[test]
fn conversions_roundtrip_fields() {
    let p = Point2::from(vector![0.5, -7.0]);
    assert_eq!(p, Point2::new(0.5, -7.0));
    assert_eq!(<[f64; 2]>::from(p), [0.5, -7.0]);
    assert_eq!(Point2::from((1.0, 2.0)), Point2::new(1.0, 2.0));
    assert_eq!(Point2::from([1.0, 2.0]), Point2::new(1.0, 2.0));
    assert_eq!(Point2::default(), Point2::ZERO);
}

#[test]
fn componentwise_product_is_per_axis() {
    let p = Point2::new(2.0, 5.0);
    assert_eq!(p.mul_componentwise(Point2::new(3.0, -1.0)), Point2::new(6.0, -5.0));
}

#[test]
fn layout_is_two_packed_f64() {
    assert_eq!(std::mem::size_of::<Point2>(), 2 * std::mem::size_of::<f64>());
    assert_eq!(std::mem::align_of::<Point2>(), std::mem::align_of::<f64>());
}

#[test]
fn interval_validation() {
    assert!(Interval::new(0.0, 1.0).is_some());
    assert!(Interval::new(1.0, 1.0).is_some());
    assert!(Interval::new(1.0, 0.0).is_none());
    assert!(Interval::new(f64::NAN, 1.0).is_none());
    assert!(Interval::new(0.0, f64::INFINITY).is_none());
    assert!(Interval::symmetric(-1.0).is_none());

    // Finite bounds whose width overflows are rejected.
    assert!(Interval::new(-f64::MAX, f64::MAX).is_none());
    assert!(Interval::new(f64::MAX, f64::INFINITY).is_none());
    assert!(Interval::symmetric(f64::MAX).is_none());
    let widest = Interval::symmetric(f64::MAX / 2.0).unwrap();
    assert_eq!(widest.hi() - widest.lo(), f64::MAX);

    let i = Interval::try_from(-2.0..=3.0).unwrap();
    assert_eq!((i.lo(), i.hi()), (-2.0, 3.0));
    assert!(i.contains(-2.0) && i.contains(3.0) && !i.contains(3.0001));
    assert!(Interval::try_from(3.0..=-2.0).is_err());
}

#[test]
fn check_cfg_tolerances() {
    let cfg = CheckCfg::default();
    assert!(cfg.close(1.0, 1.0 + 1e-13));
    assert!(!cfg.close(1.0, 1.0 + 1e-9));
    assert!(cfg.close_points(Point2::new(1e6, 0.0), Point2::new(1e6 + 1e-7, 0.0)));
}
