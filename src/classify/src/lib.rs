pub mod join;
pub use join::inner_join;

pub mod stats;
pub use stats::{FamilyStats, ReferenceStats, Variance};

pub mod classifier;
pub use classifier::{classify, Classification, ClassifiedIndividual, ClassifyParams, Transform};

pub mod sweep;
pub use sweep::run_sweep;

use std::path::Path;

use anyhow::Result;
use log::info;

use ploidy_io::read::{PedigreeReader, SummaryReader};

/// Generation whose daughters calibrate each family's classification
/// threshold.
pub const REFERENCE_GENERATION: &str = "F4";

/// Run the full classification pipeline: load both input tables, join them,
/// compute per-family reference statistics, then sweep the parameter grid.
pub fn run(individuals: &Path, summary: &Path, output_dir: &Path) -> Result<()> {
    info!("Reading individual metadata table...");
    let pedigree = PedigreeReader::new(individuals)?;

    info!("Reading variant-call summary table...");
    let summary = SummaryReader::new(summary)?;

    info!("Joining tables...");
    let cohort = inner_join(pedigree.records, &summary.records);

    info!("Computing per-family reference statistics...");
    let reference = ReferenceStats::from_cohort(&cohort, REFERENCE_GENERATION);

    info!("Running classification sweep...");
    run_sweep(&cohort, &reference, output_dir)?;
    Ok(())
}
