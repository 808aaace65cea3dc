pub mod inspect;
pub mod split;

use std::path::Path;

use anyhow::{Context, Result};
use icsplit_core::config::{ceiling_bytes, SplitConfig};

/// Effective byte ceiling: CLI flag over config file over built-in default.
fn resolve_ceiling(max_size: Option<f64>, config: &SplitConfig) -> Result<usize> {
    let mb = max_size.unwrap_or(config.max_size_mb);
    if mb <= 0.0 {
        anyhow::bail!("--max-size must be positive, got {mb}");
    }
    Ok(ceiling_bytes(mb))
}

/// Read the input file and derive the output stem from its name.
fn read_input(input: &Path) -> Result<(String, String)> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("calendar")
        .to_string();

    Ok((content, stem))
}
