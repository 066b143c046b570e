//! CLI entry point for autostereogram generation

use clap::Parser;
use stereotile::io::cli::{Cli, FileProcessor};
use stereotile::io::logging::init_logging;

fn main() -> stereotile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
