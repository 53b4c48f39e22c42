//! CLI entry point for printing Factorio blueprints as ASCII art

use blueprintart::io::cli::{BlueprintProcessor, Cli};
use blueprintart::io::logging;
use clap::Parser;

fn main() -> blueprintart::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity());
    let processor = BlueprintProcessor::new(cli);
    processor.process()
}
