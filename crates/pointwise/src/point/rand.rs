//! Uniform random points on closed intervals.
//!
//! Model
//! - Each coordinate is an independent uniform draw from a closed `Interval`;
//!   both endpoints are admissible outputs.
//! - The plain helpers use `rand::thread_rng()`. The `_with` variants take any
//!   `Rng`, and `ReplayToken` gives reproducible, indexable streams.

use super::types::{Interval, Point2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    /// Deterministic RNG for this `(seed, index)` pair.
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer; distinct indices give unrelated streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn sample<R: Rng>(rng: &mut R, range: Interval) -> f64 {
    rng.gen_range(range.as_range())
}

/// Both coordinates drawn independently from `range`.
pub fn random_point(range: Interval) -> Point2 {
    random_point_with(&mut rand::thread_rng(), range)
}

/// `x` from `x_range`, `y` from `y_range`, independently.
pub fn random_point_xy(x_range: Interval, y_range: Interval) -> Point2 {
    random_point_xy_with(&mut rand::thread_rng(), x_range, y_range)
}

pub fn random_point_with<R: Rng>(rng: &mut R, range: Interval) -> Point2 {
    random_point_xy_with(rng, range, range)
}

pub fn random_point_xy_with<R: Rng>(
    rng: &mut R,
    x_range: Interval,
    y_range: Interval,
) -> Point2 {
    let x = sample(rng, x_range);
    let y = sample(rng, y_range);
    Point2::new(x, y)
}
