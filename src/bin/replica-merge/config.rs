use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use log::{debug, info};
use replica_merge::ReconcileConfig;

use crate::args::Args;

/// Reads the settings from `path` if given, then applies the command line
/// overrides.
pub fn load(args: &Args) -> Result<ReconcileConfig> {
    let mut config = match &args.config {
        Some(path) => load_from_file(path)?,
        None => {
            debug!("No configuration file given");
            ReconcileConfig::default()
        }
    };

    if let Some(agent) = &args.left_agent {
        config.left_agent.clone_from(agent);
    }

    if let Some(agent) = &args.right_agent {
        config.right_agent.clone_from(agent);
    }

    debug!("Using {config:?}");

    Ok(config)
}

fn load_from_file(path: &Path) -> Result<ReconcileConfig> {
    info!("Loading configuration from '{}'", path.display());

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot load configuration from {}", path.display()))?;

    serde_yaml::from_str(&contents).context("Failed to parse configuration")
}
