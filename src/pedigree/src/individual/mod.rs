use crate::Sex;

/// A fully joined individual of the cross experiment.
/// # Fields:
/// - `name`      : unique identifier of the individual, shared between the
///                 pedigree metadata table and the variant-call summary table.
/// - `sex`       : sex of the individual, as recorded within the pedigree.
/// - `generation`: categorical generation label (e.g. "F4").
/// - `family`    : categorical family grouping key.
/// - `f`         : inbreeding coefficient, sourced from the variant-call
///                 summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub name      : String,
    pub sex       : Sex,
    pub generation: String,
    pub family    : String,
    pub f         : f64,
}

impl Individual {
    #[must_use]
    pub fn new(name: &str, sex: Sex, generation: &str, family: &str, f: f64) -> Self {
        Self {
            name      : name.to_string(),
            sex,
            generation: generation.to_string(),
            family    : family.to_string(),
            f,
        }
    }
}
