//! Subcommand implementations

pub mod path;
pub mod render;

use crate::cli::StyleArgs;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use sumi_core::StyleParameters;

/// Load the preset (if any) and lay the individual flags over it
pub fn resolve_params(style: &StyleArgs) -> Result<StyleParameters> {
    let base = match &style.params {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open preset {}", path.display()))?;
            let preset: StyleParameters = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Invalid preset {}", path.display()))?;
            log::debug!("Loaded parameter preset from {}", path.display());
            preset
        },
        None => StyleParameters::default(),
    };
    Ok(style.overlay(base))
}
