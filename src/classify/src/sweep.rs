use std::path::{Path, PathBuf};

use anyhow::Result;
use located_error::LocatedError;
use log::{debug, info};

use pedigree::Cohort;
use ploidy_io::{parse, write::TableWriter};

use crate::classifier::{self, ClassifyParams, Transform, OUTPUT_HEADER};
use crate::stats::ReferenceStats;

/// Threshold multipliers explored by the sweep.
pub const MULTIPLIERS: [u32; 4] = [1, 2, 3, 4];

/// Standard-deviation transforms explored by the sweep.
pub const TRANSFORMS: [Transform; 3] = [Transform::Identity, Transform::Sqrt, Transform::Square];

/// Run one classification pass per (multiplier, transform) combination, and
/// write one output table per pass within `output_dir`. Each pass reads the
/// same cohort and reference statistics, and owns its output file.
///
/// Returns the paths of every written table.
pub fn run_sweep(cohort: &Cohort, reference: &ReferenceStats, output_dir: &Path) -> Result<Vec<PathBuf>> {
    parse::create_output_directory(output_dir)?;

    let mut written = Vec::with_capacity(MULTIPLIERS.len() * TRANSFORMS.len());
    for multiplier in MULTIPLIERS {
        for transform in TRANSFORMS {
            let params         = ClassifyParams { multiplier: f64::from(multiplier), transform };
            let classification = classifier::classify(cohort, reference, &params);

            let path = output_dir.join(params.file_label());
            debug!("Writing classification table '{}'", path.display());

            let mut writer = TableWriter::new(Some(&path))
                .with_loc(|| format!("While preparing output table '{}'", path.display()))?;
            writer.write_table(OUTPUT_HEADER, &classification.records)
                .with_loc(|| format!("While writing output table '{}'", path.display()))?;

            written.push(path);
        }
    }

    info!("{} classification table(s) written within '{}'", written.len(), output_dir.display());
    Ok(written)
}
