use std::time::Instant;

use anyhow::{bail, Context, Result};
use mm_gen::{MatrixGenerator, UniformGenerator};
use mm_matrix::{MatmulBackend, NaiveBackend};
use mm_strassen::{MatrixMultiplier, StrassenConfig};
use tracing::info;

use crate::cli::MultiplyArgs;

pub fn run(args: MultiplyArgs) -> Result<()> {
    let env = StrassenConfig::from_env().context("reading MM_* environment")?;
    let config = resolve_config(&args, env);
    let multiplier = MatrixMultiplier::new(config).context("invalid multiplier configuration")?;

    let mut gen = UniformGenerator::new(args.seed, args.low, args.high)
        .context("invalid element range")?;
    let (a, b) = gen.generate_pair(args.size);
    info!(
        n = args.size,
        seed = args.seed,
        policy = %multiplier.config().size_policy,
        leaf_size = multiplier.config().leaf_size,
        parallel_depth = multiplier.config().parallel_depth,
        "multiplying random i64 matrices"
    );

    let start = Instant::now();
    let c = multiplier
        .multiply(&a, &b)
        .with_context(|| format!("multiplying {0}x{0} matrices", args.size))?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1e3, "strassen finished");

    if args.verify {
        let start = Instant::now();
        let expected = NaiveBackend::new().matmul(&a, &b)?;
        info!(elapsed_ms = start.elapsed().as_secs_f64() * 1e3, "naive reference finished");
        if c != expected {
            bail!("strassen product differs from the naive reference");
        }
        info!("product verified against the naive triple loop");
    }

    if args.print {
        println!("A = {}", a);
        println!("B = {}", b);
        println!("C = {}", c);
    }
    Ok(())
}

/// Explicit flags layered on top of the environment-derived `base`.
fn resolve_config(args: &MultiplyArgs, base: StrassenConfig) -> StrassenConfig {
    let mut config = base;
    if let Some(policy) = args.policy {
        config = config.with_size_policy(policy);
    }
    if let Some(leaf_size) = args.leaf_size {
        config = config.with_leaf_size(leaf_size);
    }
    if let Some(depth) = args.parallel_depth {
        config = config.with_parallel_depth(depth);
    }
    config
}
