use std::env::{self, VarError};

use anyhow::{bail, Context, Result};
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use nano_neuron::prelude::*;

const CONFIG_VAR: &str = "NANO_NEURON_CONFIG";
const SEED_VAR: &str = "NANO_NEURON_SEED";

/// Reads an optional variable; set but not valid unicode is an error.
fn optional_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => bail!("{name} is not valid unicode: {value:?}"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match optional_var(CONFIG_VAR)? {
        Some(path) => TrainingConfig::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => TrainingConfig::default(),
    };
    info!("config: {config:?}");

    let mut rng = match optional_var(SEED_VAR)? {
        Some(seed) => {
            let seed = seed
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {seed:?}"))?;
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let report = run(&config, &mut rng)?;
    println!("{report}");
    Ok(())
}
