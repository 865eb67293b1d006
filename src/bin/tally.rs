//! Tally Binary
//!
//! Reads deals line by line and reports how often player 1 wins.

use clap::Parser;
use pokerhands::cli::Args;
use pokerhands::cli::CLI;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    pokerhands::log(args.level());
    CLI::from(args).run()
}
