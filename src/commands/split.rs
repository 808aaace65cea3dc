use std::path::{Path, PathBuf};

use anyhow::Result;
use icsplit_core::config::SplitConfig;
use icsplit_core::split;

use crate::render::Render;

pub fn run(input: &Path, max_size: Option<f64>, output_dir: Option<PathBuf>) -> Result<()> {
    let config = SplitConfig::load()?;
    let ceiling = super::resolve_ceiling(max_size, &config)?;
    let (content, stem) = super::read_input(input)?;

    let plan = split::plan(&content, ceiling)?;
    if plan.is_empty() {
        println!("No events found in {}", input.display());
        return Ok(());
    }

    let dir = resolve_output_dir(input, output_dir, &config);
    let report = plan.write(&dir, &stem)?;

    for file in &report.files {
        println!("{}", file.render());
    }

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            println!("{}", warning.render());
        }
    }

    println!(
        "\nSplit {} events into {} files",
        report.total_events,
        report.files.len()
    );

    Ok(())
}

/// Flag over config over the input file's own directory.
fn resolve_output_dir(input: &Path, flag: Option<PathBuf>, config: &SplitConfig) -> PathBuf {
    flag.or_else(|| config.resolved_output_dir())
        .or_else(|| {
            input.parent().map(|p| {
                if p.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    p.to_path_buf()
                }
            })
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
