//! CLI entry point for evaluating a single building entry loss

use clap::Parser;
use p2109::io::cli::Cli;

fn main() -> p2109::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
