use std::ops::Deref;

use crate::{Individual, Sex};

/// The joined record set of a run. Constructed once from the inner join of the
/// pedigree metadata table and the variant-call summary table, then treated as
/// read-only by every classification pass.
#[derive(Debug, Clone, Default)]
pub struct Cohort(Vec<Individual>);

impl Deref for Cohort {
    type Target = Vec<Individual>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Individual>> for Cohort {
    fn from(individuals: Vec<Individual>) -> Self {
        Self(individuals)
    }
}

impl Cohort {
    /// Iterate over the reference daughters of the cohort, i.e. every female
    /// individual belonging to the provided reference generation.
    pub fn reference_daughters<'a>(&'a self, generation: &'a str) -> impl Iterator<Item = &'a Individual> {
        self.iter().filter(move |ind| ind.sex == Sex::Female && ind.generation == generation)
    }
}
