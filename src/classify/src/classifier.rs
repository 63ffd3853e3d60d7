use std::fmt::{self, Display, Formatter};

use log::warn;

use pedigree::{Cohort, Individual, Ploidy};

use crate::stats::{FamilyStats, ReferenceStats};

/// Header of every output classification table. Pretty-print separators are
/// converted to tabs by the table writer.
pub const OUTPUT_HEADER: &str = "Name - Sex - Generation - Family - F - Ploidy";

/// Optional monotonic transform applied to a family's reference standard
/// deviation before scaling it by the threshold multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Sqrt,
    Square,
}

impl Transform {
    #[must_use]
    pub fn apply(&self, std_dev: f64) -> f64 {
        match self {
            Self::Identity => std_dev,
            Self::Sqrt     => std_dev.sqrt(),
            Self::Square   => std_dev * std_dev,
        }
    }

    /// Output-file suffix of the transform. The raw standard deviation carries
    /// no suffix.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity => "",
            Self::Sqrt     => "sqrt",
            Self::Square   => "square",
        }
    }
}

/// One parameter combination of the sweep.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyParams {
    pub multiplier: f64,
    pub transform : Transform,
}

impl ClassifyParams {
    /// Classification threshold of a family:
    /// `mean + multiplier * transform(std_dev)`.
    #[must_use]
    pub fn threshold(&self, stats: &FamilyStats) -> f64 {
        stats.mean + self.multiplier * self.transform.apply(stats.std_dev)
    }

    /// Label encoding the parameter combination. Doubles as the output
    /// filename of the corresponding sweep run (e.g. "m1", "m1sqrt", "m2square").
    #[must_use]
    pub fn file_label(&self) -> String {
        format!("m{}{}", self.multiplier, self.transform.label())
    }
}

/// An output row: a joined individual, augmented with its called ploidy.
/// `ploidy` is `None` for every non-male row, and for males belonging to a
/// family without reference statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedIndividual {
    pub individual: Individual,
    pub ploidy    : Option<Ploidy>,
}

impl Display for ClassifiedIndividual {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ind    = &self.individual;
        let ploidy = self.ploidy.map_or_else(|| "NA".to_string(), |p| p.to_string());
        write!(f, "{} - {} - {} - {} - {} - {}",
            ind.name, ind.sex, ind.generation, ind.family, ind.f, ploidy
        )
    }
}

/// Outcome of a single classification pass.
#[derive(Debug)]
pub struct Classification {
    pub records: Vec<ClassifiedIndividual>,
    /// Families of skipped males, sorted and deduplicated.
    pub unclassified_families: Vec<String>,
    pub skipped_males: usize,
}

/// Label every male of the cohort as Haploid or Diploid, by comparing its
/// inbreeding coefficient against its family's threshold.
///
/// Pure function of its inputs: the cohort and reference statistics are left
/// untouched, and each sweep run receives its own independent output.
///
/// Males belonging to a family absent from `reference` cannot be classified:
/// they are kept within the output with an empty ploidy, and reported through
/// a single warning per pass.
#[must_use]
pub fn classify(cohort: &Cohort, reference: &ReferenceStats, params: &ClassifyParams) -> Classification {
    let mut records               = Vec::with_capacity(cohort.len());
    let mut unclassified_families = Vec::new();
    let mut skipped_males         = 0;

    for individual in cohort.iter() {
        let ploidy = match individual.sex.is_male() {
            false => None,
            true  => match reference.get(individual.family.as_str()) {
                Some(stats) => Some(Ploidy::from_coefficient(individual.f, params.threshold(stats))),
                None => {
                    skipped_males += 1;
                    unclassified_families.push(individual.family.clone());
                    None
                },
            },
        };
        records.push(ClassifiedIndividual { individual: individual.clone(), ploidy });
    }

    unclassified_families.sort_unstable();
    unclassified_families.dedup();
    if skipped_males > 0 {
        warn!("[{}] {skipped_males} male(s) could not be classified: no reference statistics for families {unclassified_families:?}",
            params.file_label()
        );
    }

    Classification { records, unclassified_families, skipped_males }
}
