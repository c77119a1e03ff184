//! CLI entry point for the room-and-corridor map generator

use clap::Parser;
use roomcarve::io::cli::{Cli, MapProcessor};

fn main() -> roomcarve::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = MapProcessor::new(cli);
    processor.process().map(|_| ())
}
