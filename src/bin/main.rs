use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

use anyhow::Result;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;


/// Parse command line arguments and run `ploidy_rs::run()`
fn main() -> Result<()> {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = if cli.quiet {0} else {cli.verbose + 1};
    logger::Logger::init(verbosity);

    // ----------------------------- Serialize command line arguments
    if let Err(e) = cli.serialize(std::path::Path::new(ploidy_rs::OUTPUT_DIR)) {
        error!("{:?}", e);
        process::exit(1);
    };

    // ----------------------------- Run the classification pipeline.
    if let Err(e) = ploidy_rs::run(cli) {
        error!("{:?}", e);
        process::exit(1);
    };

    Ok(())
}
