use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mealwise::session::{Session, SessionOptions};

mod cli;

/// mealwise - personalized meal plans and grocery lists
#[derive(Parser)]
#[command(name = "mealwise")]
#[command(about = "Personalized meal planning with consolidated grocery lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Seed for reproducible plans
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// User profile JSON (overrides config file)
    #[arg(long, global = true)]
    user: Option<PathBuf>,

    /// Recipe catalog JSON (overrides config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// First day of the plan, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    start: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print a meal plan
    Plan,
    /// List swap candidates for one day of a generated plan
    Alternatives {
        /// Day index in the plan, starting at 0
        #[arg(long)]
        day: usize,
    },
    /// Generate a plan and print its grocery list
    Groceries,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealwise::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealwise::observability::init_observability(
        &config.observability.log_level,
        &config.observability.format,
    )?;

    let mut session = Session::open(
        &config,
        SessionOptions {
            seed: cli.seed,
            user: cli.user,
            catalog: cli.catalog,
            start: cli.start,
        },
    )?;

    match cli.command {
        Commands::Plan => cli::plan::run(&mut session, cli.json),
        Commands::Alternatives { day } => cli::alternatives::run(&mut session, day, cli.json),
        Commands::Groceries => cli::groceries::run(&mut session, cli.json),
    }
}
