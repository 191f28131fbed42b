//! Random point sequences.

use crate::point::rand::{random_point_xy_with, ReplayToken};
use crate::point::{Interval, Point2};
use rand::Rng;

/// `count` points, both coordinates uniform on `range`. Empty for `count == 0`.
pub fn random_sequence(count: usize, range: Interval) -> Vec<Point2> {
    random_sequence_xy_with(&mut rand::thread_rng(), count, range, range)
}

/// `count` points, `x` uniform on `x_range` and `y` on `y_range`.
pub fn random_sequence_xy(count: usize, x_range: Interval, y_range: Interval) -> Vec<Point2> {
    random_sequence_xy_with(&mut rand::thread_rng(), count, x_range, y_range)
}

pub fn random_sequence_with<R: Rng>(rng: &mut R, count: usize, range: Interval) -> Vec<Point2> {
    random_sequence_xy_with(rng, count, range, range)
}

pub fn random_sequence_xy_with<R: Rng>(
    rng: &mut R,
    count: usize,
    x_range: Interval,
    y_range: Interval,
) -> Vec<Point2> {
    if count == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| random_point_xy_with(rng, x_range, y_range))
        .collect()
}

/// Reproducible sequence for a replay token.
pub fn replay_sequence(tok: ReplayToken, count: usize, range: Interval) -> Vec<Point2> {
    random_sequence_with(&mut tok.to_std_rng(), count, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_empty() {
        let r = Interval::new(0.0, 1.0).unwrap();
        assert!(random_sequence(0, r).is_empty());
        assert!(random_sequence_xy(0, r, r).is_empty());
    }

    #[test]
    fn exact_count() {
        let r = Interval::new(-3.0, 3.0).unwrap();
        assert_eq!(random_sequence(17, r).len(), 17);
        assert_eq!(random_sequence_xy(5, r, r).len(), 5);
    }

    #[test]
    fn replay_is_deterministic() {
        let r = Interval::new(-1.0, 1.0).unwrap();
        let tok = ReplayToken::new(9, 0);
        assert_eq!(replay_sequence(tok, 32, r), replay_sequence(tok, 32, r));
        assert_ne!(replay_sequence(tok, 32, r), replay_sequence(tok.next(), 32, r));
    }
}
