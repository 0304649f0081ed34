use anyhow::{Context, Result};
use log::info;

use alpharank::tasks::Experiment;

/// Environment hook for deterministic runs; absent means OS entropy.
const SEED_VAR: &str = "ALPHARANK_SEED";

fn main() -> Result<()> {
    env_logger::init();

    let mut experiment = Experiment::default();
    if let Ok(raw) = std::env::var(SEED_VAR) {
        let seed: u64 = raw
            .parse()
            .with_context(|| format!("{SEED_VAR} must be an unsigned 64-bit integer, got {raw:?}"))?;
        info!("running with fixed seed {seed}");
        experiment = experiment.with_seed(seed);
    }

    let ranking = experiment.run()?;
    print!("{ranking}");
    Ok(())
}
