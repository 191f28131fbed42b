use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pointwise::CheckCfg;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod check;
mod provenance;

use check::{run_bench, run_check, RunParams};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Consistency checks and timings for batched point arithmetic")]
struct Cmd {
    /// Optional free-form label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compare every batched op against the scalar operators on seeded inputs
    Check {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Coordinates are drawn from [-radius, radius]
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        eps_abs: Option<f64>,
        #[arg(long)]
        eps_rel: Option<f64>,
        /// Write the JSON report here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Time batched ops against mapping the scalar operators
    Bench {
        #[arg(long, default_value_t = 100_000)]
        count: usize,
        #[arg(long, default_value_t = 50)]
        reps: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            count,
            seed,
            radius,
            eps_abs,
            eps_rel,
            out,
        } => {
            let defaults = CheckCfg::default();
            let cfg = CheckCfg {
                eps_abs: eps_abs.unwrap_or(defaults.eps_abs),
                eps_rel: eps_rel.unwrap_or(defaults.eps_rel),
            };
            let params = RunParams {
                count,
                seed,
                radius,
            };
            check(params, cfg, out, cmd.tag)
        }
        Action::Bench { count, reps, seed } => {
            let params = RunParams {
                count,
                seed,
                radius: 1.0,
            };
            bench(params, reps, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn check(params: RunParams, cfg: CheckCfg, out: Option<String>, tag: Option<String>) -> Result<()> {
    tracing::info!(
        count = params.count,
        seed = params.seed,
        radius = params.radius,
        tag = ?tag,
        "check"
    );
    let Some(report) = run_check(params, &cfg) else {
        bail!("radius must be in [0, f64::MAX / 2], got {}", params.radius);
    };
    let doc = serde_json::to_value(&report)?;
    match &out {
        Some(out) => {
            let out_path = Path::new(out);
            provenance::ensure_parent(out_path)?;
            std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {out}"))?;
            let mut payload = provenance::Payload::new(serde_json::json!({
                "cmd": "check",
                "run": params,
                "eps_abs": cfg.eps_abs,
                "eps_rel": cfg.eps_rel,
            }));
            payload.tag = tag;
            let prov = provenance::write_sidecar(out_path, payload)?;
            tracing::info!(out, provenance = %prov.display(), "check_written");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    if !report.all_ok() {
        let failed: Vec<_> = report.ops.iter().filter(|o| !o.ok).map(|o| o.op).collect();
        bail!(
            "batched results deviate from scalar mapping: {failed:?} (mismatch rejected: {})",
            report.mismatch_rejected
        );
    }
    Ok(())
}

fn bench(params: RunParams, reps: u32, tag: Option<String>) -> Result<()> {
    if reps == 0 {
        bail!("--reps must be > 0");
    }
    tracing::info!(count = params.count, reps, tag = ?tag, "bench");
    let Some(timings) = run_bench(params, reps) else {
        bail!("invalid bench params");
    };
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": pointwise::VERSION,
        "tag": tag,
        "params": { "run": params, "reps": reps },
        "timings": timings,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": pointwise::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
