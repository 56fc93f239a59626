// src/bin/walkrank.rs
use clap::Parser;
use colored::Colorize;

use walkrank_core::cli::{handlers, Cli};
use walkrank_core::exit::WalkrankExit;

fn main() -> WalkrankExit {
    let cli = Cli::parse();
    match handlers::run(&cli) {
        Ok(()) => WalkrankExit::Success,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            WalkrankExit::from(&e)
        }
    }
}
