//! League table CLI
//!
//! Reads a file of match result lines and prints the ranked standings.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use lr_core::{RankingEngine, ScoringRules};

#[derive(Parser)]
#[command(name = "lr_cli")]
#[command(about = "Compute league standings from a file of match results", long_about = None)]
struct Cli {
    /// Input file path, one result per line ("Lions 3, Snakes 3")
    input: PathBuf,

    /// Points awarded for a win
    #[arg(long, default_value_t = ScoringRules::STANDARD.win)]
    win_points: u64,

    /// Points awarded for a draw
    #[arg(long, default_value_t = ScoringRules::STANDARD.draw)]
    draw_points: u64,

    /// Points awarded for a loss
    #[arg(long, default_value_t = ScoringRules::STANDARD.loss)]
    loss_points: u64,

    /// Print the standings as a JSON document instead of text rows
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = RankingEngine::new(ScoringRules {
        win: cli.win_points,
        draw: cli.draw_points,
        loss: cli.loss_points,
    });

    let file = lr_cli::resolve_input_file(&cli.input)?;
    let reader = BufReader::new(file);

    let ranked = lr_cli::print_rankings(
        reader,
        &engine,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        cli.json,
    )?;

    // The report already went to stderr; signal the failure to scripts.
    if !ranked {
        process::exit(1);
    }
    Ok(())
}
