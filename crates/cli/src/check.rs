//! Batched-vs-scalar consistency check and timing runs.

use pointwise::batch::rand::replay_sequence;
use pointwise::batch::{
    checked_elementwise_add, elementwise_add, elementwise_sub, magnitude_squared_sum,
    scale_in_place, scale_then_add, scale_then_sub,
};
use pointwise::point::rand::ReplayToken;
use pointwise::{CheckCfg, Interval, Point2};
use serde::Serialize;
use std::time::Instant;

/// Inputs shared by `check` and `bench`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RunParams {
    pub count: usize,
    pub seed: u64,
    pub radius: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct OpDeviation {
    pub op: &'static str,
    pub max_abs_dev: f64,
    pub ok: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckReport {
    pub params: RunParams,
    pub ops: Vec<OpDeviation>,
    pub mismatch_rejected: bool,
}

impl CheckReport {
    pub fn all_ok(&self) -> bool {
        self.mismatch_rejected && self.ops.iter().all(|o| o.ok)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct OpTiming {
    pub op: &'static str,
    pub batched_ns: u128,
    pub scalar_ns: u128,
}

struct Inputs {
    a: Vec<Point2>,
    b: Vec<Point2>,
    s: Point2,
    q: Point2,
    k: f64,
}

fn inputs(p: RunParams) -> Option<Inputs> {
    let range = Interval::symmetric(p.radius)?;
    let tok = ReplayToken::new(p.seed, 0);
    let a = replay_sequence(tok, p.count, range);
    let b = replay_sequence(tok.next(), p.count, range);
    let extra = replay_sequence(tok.next().next(), 3, range);
    Some(Inputs {
        a,
        b,
        s: extra[0],
        q: extra[1],
        k: extra[2].x,
    })
}

/// Max-norm deviation over all points; `ok` uses the tolerance in `cfg`.
fn compare(
    op: &'static str,
    got: &[Point2],
    want: impl Iterator<Item = Point2>,
    cfg: &CheckCfg,
) -> OpDeviation {
    let mut dev = 0.0_f64;
    let mut ok = true;
    for (g, w) in got.iter().zip(want) {
        dev = dev.max((g.x - w.x).abs()).max((g.y - w.y).abs());
        ok &= cfg.close_points(*g, w);
    }
    tracing::info!(op, max_abs_dev = dev, ok, "op_checked");
    OpDeviation {
        op,
        max_abs_dev: dev,
        ok,
    }
}

/// Run every batched op on seeded inputs and compare to the scalar mapping.
///
/// Returns `None` if `[-radius, radius]` is not a valid `Interval`.
pub fn run_check(p: RunParams, cfg: &CheckCfg) -> Option<CheckReport> {
    let Inputs { a, b, s, q, k } = inputs(p)?;
    let mut ops = Vec::with_capacity(6);

    let c = elementwise_add(&a, &b);
    let want = a.iter().zip(&b).map(|(x, y)| *x + *y);
    ops.push(compare("elementwise_add", &c, want, cfg));

    let c = elementwise_sub(&a, &b);
    let want = a.iter().zip(&b).map(|(x, y)| *x - *y);
    ops.push(compare("elementwise_sub", &c, want, cfg));

    let mut c = a.clone();
    scale_in_place(&mut c, k);
    ops.push(compare("scale_in_place", &c, a.iter().map(|x| x.scale(k)), cfg));

    let c = scale_then_add(&a, s, q);
    let want = a.iter().map(|x| x.mul_componentwise(s) + q);
    ops.push(compare("scale_then_add", &c, want, cfg));

    let c = scale_then_sub(&a, s, q);
    let want = a.iter().map(|x| x.mul_componentwise(s) - q);
    ops.push(compare("scale_then_sub", &c, want, cfg));

    let want: f64 = a.iter().map(|x| x.magnitude_squared()).sum();
    let got = magnitude_squared_sum(&a);
    let ok = cfg.close(got, want);
    tracing::info!(got, want, ok, "magnitude_squared_sum_checked");
    ops.push(OpDeviation {
        op: "magnitude_squared_sum",
        max_abs_dev: (got - want).abs(),
        ok,
    });

    let longer = [b.as_slice(), &[Point2::ZERO]].concat();
    let mismatch_rejected = checked_elementwise_add(&a, &longer).is_err();
    tracing::info!(mismatch_rejected, "length_precondition_checked");

    Some(CheckReport {
        params: p,
        ops,
        mismatch_rejected,
    })
}

fn time_reps<T>(reps: u32, mut f: impl FnMut() -> T) -> u128 {
    let start = Instant::now();
    for _ in 0..reps {
        std::hint::black_box(f());
    }
    start.elapsed().as_nanos() / u128::from(reps.max(1))
}

/// Mean wall-clock time per call, batched vs scalar mapping.
pub fn run_bench(p: RunParams, reps: u32) -> Option<Vec<OpTiming>> {
    let Inputs { a, b, s, q, k } = inputs(p)?;
    let mut out = Vec::with_capacity(4);

    out.push(OpTiming {
        op: "elementwise_add",
        batched_ns: time_reps(reps, || elementwise_add(&a, &b)),
        scalar_ns: time_reps(reps, || {
            a.iter().zip(&b).map(|(x, y)| *x + *y).collect::<Vec<_>>()
        }),
    });
    out.push(OpTiming {
        op: "scale_in_place",
        batched_ns: time_reps(reps, || {
            let mut c = a.clone();
            scale_in_place(&mut c, k);
            c
        }),
        scalar_ns: time_reps(reps, || {
            let mut c = a.clone();
            c.iter_mut().for_each(|x| *x *= k);
            c
        }),
    });
    out.push(OpTiming {
        op: "magnitude_squared_sum",
        batched_ns: time_reps(reps, || magnitude_squared_sum(&a)),
        scalar_ns: time_reps(reps, || a.iter().map(|x| x.magnitude_squared()).sum::<f64>()),
    });
    out.push(OpTiming {
        op: "scale_then_add",
        batched_ns: time_reps(reps, || scale_then_add(&a, s, q)),
        scalar_ns: time_reps(reps, || {
            a.iter()
                .map(|x| x.mul_componentwise(s) + q)
                .collect::<Vec<_>>()
        }),
    });
    for t in &out {
        tracing::info!(op = t.op, batched_ns = t.batched_ns, scalar_ns = t.scalar_ns, "op_timed");
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(count: usize) -> RunParams {
        RunParams {
            count,
            seed: 17,
            radius: 10.0,
        }
    }

    #[test]
    fn check_passes_with_default_tolerance() {
        let report = run_check(params(257), &CheckCfg::default()).unwrap();
        assert_eq!(report.ops.len(), 6);
        assert!(report.mismatch_rejected);
        assert!(report.all_ok(), "{report:?}");
        // Every element-wise op is bit-exact against the scalar operators;
        // only the squared-magnitude reduction may differ.
        for op in &report.ops[..5] {
            assert_eq!(op.max_abs_dev, 0.0, "{}", op.op);
        }
    }

    #[test]
    fn check_handles_empty_inputs() {
        let report = run_check(params(0), &CheckCfg::default()).unwrap();
        assert!(report.all_ok());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let p = RunParams {
            radius: -1.0,
            ..params(4)
        };
        assert!(run_check(p, &CheckCfg::default()).is_none());
        assert!(run_bench(p, 1).is_none());
        let huge = RunParams {
            radius: f64::MAX,
            ..params(4)
        };
        assert!(run_check(huge, &CheckCfg::default()).is_none());
    }

    #[test]
    fn bench_reports_every_op() {
        let t = run_bench(params(64), 2).unwrap();
        let names: Vec<_> = t.iter().map(|o| o.op).collect();
        assert_eq!(
            names,
            ["elementwise_add", "scale_in_place", "magnitude_squared_sum", "scale_then_add"]
        );
    }
}
