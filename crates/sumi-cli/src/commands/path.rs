//! Path command implementation
//!
//! Parses one path-data string, runs the transform chain over it and prints
//! the result as absolute path data.

use crate::cli::PathArgs;
use anyhow::Result;
use std::io::{self, Write};
use sumi_core::{Path, Seed, StyleParameters};
use sumi_parse::parse_path_data;
use sumi_transform::apply_transforms;

pub fn run(args: &PathArgs) -> Result<()> {
    let params = super::resolve_params(&args.style)?;
    let out = transform_path_data(&args.data, &params, Seed::new(args.seed));
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}

/// Parse, transform and serialize one path-data string
pub fn transform_path_data(data: &str, params: &StyleParameters, seed: Seed) -> Path {
    let path = parse_path_data(data);
    if path.is_empty() {
        log::warn!("Path data {data:?} draws nothing");
    }
    apply_transforms(&path, &params.clamped(), seed)
}
