use std::ops::Deref;

use ahash::AHashMap;
use itertools::Itertools;
use log::warn;

use pedigree::Cohort;

// One pass mean and standard deviation accumulator (Welford's method).
#[derive(Debug, Default)]
pub struct Variance {
    meansum    : f64,
    std_dev_sum: f64,
    n          : usize,
}

impl Variance {
    pub fn update(&mut self, value: f64) {
        if self.n == 0 {
            self.meansum = value
        };
        self.n += 1;
        let stepsum  = value - self.meansum;
        let stepmean = ((self.n - 1) as f64 * stepsum) / self.n as f64;
        self.meansum     += stepmean;
        self.std_dev_sum += stepmean * stepsum;
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.meansum
    }

    /// Sample standard deviation (n-1 denominator). `None` when fewer than two
    /// values were accumulated, where the estimate is undefined.
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        match self.n {
            0 | 1 => None,
            n     => Some((self.std_dev_sum / (n as f64 - 1.0)).sqrt()),
        }
    }
}

/// Reference statistic of one family: mean and sample standard deviation of
/// the inbreeding coefficient across its reference daughters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyStats {
    pub mean   : f64,
    pub std_dev: f64,
    pub n      : usize,
}

/// Mapping from family keys to their reference statistics.
///
/// Families with fewer than two reference daughters carry an undefined
/// standard deviation and are deliberately absent from the mapping. Callers
/// must treat the missing entry explicitly.
#[derive(Debug, Default)]
pub struct ReferenceStats(AHashMap<String, FamilyStats>);

impl Deref for ReferenceStats {
    type Target = AHashMap<String, FamilyStats>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ReferenceStats {
    /// Compute the per-family reference statistics of a cohort, over every
    /// female individual belonging to `reference_generation`.
    #[must_use]
    pub fn from_cohort(cohort: &Cohort, reference_generation: &str) -> Self {
        let grouped = cohort.reference_daughters(reference_generation)
            .into_group_map_by(|ind| ind.family.as_str());

        let mut stats     = AHashMap::with_capacity(grouped.len());
        let mut undefined = Vec::new();
        for (family, daughters) in grouped {
            let mut variance = Variance::default();
            for daughter in daughters {
                variance.update(daughter.f);
            }
            match variance.std_dev() {
                Some(std_dev) => {
                    stats.insert(family.to_string(), FamilyStats { mean: variance.mean(), std_dev, n: variance.n() });
                },
                None => undefined.push(family),
            }
        }

        if !undefined.is_empty() {
            undefined.sort_unstable();
            warn!("The standard deviation is undefined for families carrying fewer than two reference \
                   daughters. No threshold can be computed for families: {undefined:?}");
        }
        Self(stats)
    }
}
