use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rep_miner::{run_extraction, ExtractOptions};

#[derive(Parser)]
#[command(name = "rep-miner")]
#[command(author, version, about = "Fast Rust extractor for legacy Business Objects report definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract migration records from .rep/.wid report files
    Extract {
        /// Report files and/or directories to scan
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path for the JSON batch outcome (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            inputs,
            output,
            verbose,
        } => {
            let to_stdout = output.is_none();
            let options = ExtractOptions {
                inputs,
                output_path: output,
                verbose,
            };

            let outcome = run_extraction(options)?;

            if to_stdout {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }

            if !outcome.failures.is_empty() {
                eprintln!("{} file(s) failed extraction:", outcome.failures.len());
                for failure in &outcome.failures {
                    eprintln!("  {}: {}", failure.file_name, failure.error);
                }
            }
        }
    }

    Ok(())
}
