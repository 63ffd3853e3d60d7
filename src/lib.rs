extern crate parser;
extern crate logger;

use std::path::Path;

use parser::Cli;

#[macro_use]
extern crate log;

use anyhow::Result;

/// Fixed location of the individual metadata table.
pub const INDIVIDUALS_PATH: &str = "data/individuals";

/// Fixed location of the output classification tables.
pub const OUTPUT_DIR: &str = "data/ploidy";

/// Unpack the command line arguments and run the classification pipeline.
pub fn run(cli: Cli) -> Result<()> {
    info!("Classifying males against the reference daughters of generation '{}'", classify::REFERENCE_GENERATION);
    classify::run(
        Path::new(INDIVIDUALS_PATH),
        &cli.summary,
        Path::new(OUTPUT_DIR),
    )
}
