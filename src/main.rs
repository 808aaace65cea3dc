mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "icsplit")]
#[command(about = "Split an oversized .ics export into per-year files that fit import size limits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an .ics file into per-year, size-bounded parts
    Split {
        /// The .ics file to split
        input: PathBuf,

        /// Maximum size of each output file in MB
        #[arg(long)]
        max_size: Option<f64>,

        /// Where to write the parts (defaults to the input file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Show the parts a split would produce without writing anything
    Inspect {
        /// The .ics file to inspect
        input: PathBuf,

        /// Maximum size of each output file in MB
        #[arg(long)]
        max_size: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            max_size,
            output_dir,
        } => commands::split::run(&input, max_size, output_dir),
        Commands::Inspect { input, max_size } => commands::inspect::run(&input, max_size),
    }
}
