use std::path::{Path, PathBuf};

use located_error::LocatedError;

use clap::Parser;
use serde::{Serialize, Deserialize};
use log::debug;
use anyhow::Result;

mod error;
pub use error::ParserError;


#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="ploidy-rs", version, about, long_about = None)]
/// ploidy-rs: classify haploid and diploid males from inbreeding coefficients
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use the --quiet/-q flag to disable them.
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is
    /// off. Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Path to the per-individual variant-call summary table.
    ///
    /// Tab-separated table carrying at least an 'INDV' column (individual identifier, matched
    /// against the metadata table's 'Name') and an 'F' column (inbreeding coefficient), as
    /// produced by 'vcftools --het'.{n}
    ///
    /// Note that the individual metadata table is expected at its fixed location
    /// 'data/individuals', and that one output table per parameter combination is written within
    /// 'data/ploidy'.
    #[clap(parse(from_os_str))]
    pub summary: PathBuf,
}

impl Cli {
    /// Serialize command line arguments within a `.yaml` file.
    ///
    /// # Behavior
    /// - File naming follows the convention '{current time}-classify.yaml'. current time follows
    ///   the format `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written at the root of the provided output directory. The directory is created
    ///   beforehand if missing.
    ///
    /// # Errors
    /// Sends an unrecoverable error if `serde_yaml` fails to parse `Self` to a string, or if the
    /// output file cannot be written.
    pub fn serialize(&self, output_dir: &Path) -> Result<()> {
        use error::ParserError::SerializeArgs;

        // Parse arguments to yaml and print to console.
        let serialized = serde_yaml::to_string(&self)
            .map_err(|err| SerializeArgs(err.to_string()))?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file  = output_dir.join(format!("{current_time}-classify.yaml"));

        std::fs::create_dir_all(output_dir)
            .with_loc(|| format!("While attempting to create output directory '{}'", output_dir.display()))?;
        std::fs::write(&output_file, serialized)
            .with_loc(|| format!("Unable to serialize arguments into '{}'", output_file.display()))
    }
}
