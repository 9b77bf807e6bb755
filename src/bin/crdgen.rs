//! # CRD Generator
//!
//! Prints the `TestResource` CustomResourceDefinition as YAML.
//!
//! ```bash
//! cargo run --bin crdgen > config/crd/testresource.yaml
//! cargo run --bin crdgen -- --output config/crd/testresource.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use kube::CustomResourceExt;
use reconciler_conditions::config::ControllerConfig;
use reconciler_conditions::observability;
use reconciler_conditions::TestResource;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "crdgen", about = "Generate the TestResource CRD", version)]
struct Args {
    /// Write the CRD to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    observability::init(&ControllerConfig::from_env())?;

    let yaml = serde_yaml::to_string(&TestResource::crd()).context("Failed to serialize CRD")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, yaml)
                .with_context(|| format!("Failed to write CRD to {}", path.display()))?;
            info!("Wrote TestResource CRD to {}", path.display());
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
