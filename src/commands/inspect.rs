use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use icsplit_core::config::SplitConfig;
use icsplit_core::split;
use icsplit_core::writer::chunk_filename;

use crate::render::{format_size, Render};

pub fn run(input: &Path, max_size: Option<f64>) -> Result<()> {
    let config = SplitConfig::load()?;
    let ceiling = super::resolve_ceiling(max_size, &config)?;
    let (content, stem) = super::read_input(input)?;

    let plan = split::plan(&content, ceiling)?;
    if plan.is_empty() {
        println!("No events found in {}", input.display());
        return Ok(());
    }

    for (year, chunks) in plan.years() {
        let events: usize = chunks.iter().map(|c| c.len()).sum();
        println!(
            "{} {}",
            year.bold(),
            format!("({} events, {} parts)", events, chunks.len()).dimmed()
        );

        for (i, chunk) in chunks.iter().enumerate() {
            let name = chunk_filename(&stem, *year, i + 1);
            let line = format!(
                "  {}  {} events  {}",
                name,
                chunk.len(),
                format_size(chunk.size())
            );
            if chunk.exceeds(plan.ceiling()) {
                println!("{}", line.yellow());
            } else {
                println!("{}", line);
            }
        }
        println!();
    }

    if !plan.warnings().is_empty() {
        for warning in plan.warnings() {
            println!("{}", warning.render());
        }
        println!();
    }

    println!(
        "{} events across {} years, {} parts total",
        plan.total_events(),
        plan.years().len(),
        plan.years().iter().map(|(_, c)| c.len()).sum::<usize>()
    );

    Ok(())
}
