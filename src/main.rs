//! Escape Room Puzzle Solver - CLI
//!
//! Classifies and solves escape-room puzzles, printing the full report as
//! indented JSON to stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use escape_solver::{
    commands::{run_examples, run_guide, run_solve},
    core::HintLevel,
    output::report_to_json,
};

#[derive(Parser)]
#[command(
    name = "escape_solver",
    about = "Escape room puzzle solver: classify, decode, and hint",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The puzzle text to analyze
    puzzle: Option<String>,

    /// Optional context about the room or previous solutions
    context: Option<String>,

    /// Hint level: hint (default), nudge, full
    hint_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the canned demo puzzles
    Examples,

    /// Print the combination-lock strategy guide
    Guide,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Examples) => run_examples().map_err(|e| anyhow::anyhow!(e)),
        Some(Commands::Guide) => run_guide().map_err(|e| anyhow::anyhow!(e)),
        None => {
            let Some(puzzle) = cli.puzzle else {
                println!("Usage: escape_solver '<puzzle>' [context] [hint_level]");
                println!("Example: escape_solver 'KHOOR ZRUOG' '' 'full'");
                std::process::exit(1);
            };
            let context = cli.context.unwrap_or_default();
            let level = HintLevel::from_name(cli.hint_level.as_deref().unwrap_or("hint"));

            let report = run_solve(&puzzle, &context, level)?;
            println!("{}", report_to_json(&report)?);
            Ok(())
        }
    }
}
