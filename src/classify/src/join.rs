use ahash::AHashMap;
use log::{debug, info, warn};

use pedigree::{Cohort, Individual};
use ploidy_io::read::{PedigreeRecord, SummaryRecord};

/// Inner join of the individual metadata table and the variant-call summary
/// table, on `Name == INDV`. Only individuals present within both tables
/// survive; the result keeps the metadata table's row order.
///
/// Join keys are assumed unique per table (not validated). Should the summary
/// table repeat an identifier, the last row wins.
pub fn inner_join(records: Vec<PedigreeRecord>, summary: &[SummaryRecord]) -> Cohort {
    let mut coefficients: AHashMap<&str, f64> = AHashMap::with_capacity(summary.len());
    for record in summary {
        coefficients.insert(record.name.as_str(), record.f);
    }
    let n_summary = coefficients.len();
    let n_records = records.len();

    let joined: Vec<Individual> = records.into_iter()
        .filter_map(|record| {
            let f = *coefficients.get(record.name.as_str())?;
            Some(Individual {
                name      : record.name,
                sex       : record.sex,
                generation: record.generation,
                family    : record.family,
                f,
            })
        })
        .collect();

    match joined.is_empty() {
        true  => warn!("No overlapping identifiers between the metadata and summary tables. Output tables will be empty."),
        false => info!("{} individual(s) joined", joined.len()),
    }
    debug!("{} metadata row(s) and {} summary row(s) left unmatched",
        n_records - joined.len(), n_summary - joined.len()
    );

    Cohort::from(joined)
}
