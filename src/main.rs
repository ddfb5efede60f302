//! CLI entry point for the speedcubing flashcard drill

use clap::Parser;
use cubedrill::catalog::Catalog;
use cubedrill::io::cli::Cli;

fn main() -> cubedrill::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let catalog = Catalog::new();
    let storage = cli.storage()?;
    let random = cli.random_source();

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    cli.run(&catalog, storage, random, &mut input, &mut output)
}
