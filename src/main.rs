//! CLI entry point: carve a maze, search it and replay the token's moves

use clap::Parser;
use env_logger::Env;
use mazetrail::io::cli::{Cli, Runner};

fn main() -> mazetrail::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let runner = Runner::new(cli);
    runner.run()?;
    Ok(())
}
