mod commands;
mod input;
mod output;
mod render;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculate::CalculateArgs;
use commands::export::ExportArgs;
use commands::history::{DeleteArgs, ShowArgs};
use commands::targets::TargetsArgs;

/// Quarterly relationship-manager bonus calculations
#[derive(Parser)]
#[command(
    name = "rmb",
    version,
    about = "Quarterly relationship-manager bonus calculations",
    long_about = "A CLI for computing quarterly relationship-manager bonuses with \
                  decimal precision. Derives grade targets, computes achievement \
                  rates and weighted scores, applies penalty rules, and keeps a \
                  local history of saved calculations with HTML/CSV export."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Path of the calculation history file
    #[arg(long, default_value = "bonus-records.json", global = true)]
    store: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List the grade profile table
    Grades,
    /// Derive quarterly targets for a grade and recognition ratio
    Targets(TargetsArgs),
    /// Run a full bonus calculation
    Calculate(CalculateArgs),
    /// List saved calculation records
    History,
    /// Show one saved record in full
    Show(ShowArgs),
    /// Delete a saved record
    Delete(DeleteArgs),
    /// Export a saved record as HTML or CSV
    Export(ExportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Grades => commands::grades::run_grades(),
        Commands::Targets(args) => commands::targets::run_targets(args),
        Commands::Calculate(args) => commands::calculate::run_calculate(args, &cli.store),
        Commands::History => commands::history::run_history(&cli.store),
        Commands::Show(args) => commands::history::run_show(args, &cli.store),
        Commands::Delete(args) => commands::history::run_delete(args, &cli.store),
        Commands::Export(args) => commands::export::run_export(args, &cli.store),
        Commands::Version => {
            println!("rmb {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
