use std::fmt::{self, Formatter, Display};

/// Binary chromosomal copy count of a male individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ploidy {
    Diploid,
    Haploid,
}

impl Ploidy {
    /// Call the ploidy of a male from its inbreeding coefficient and the
    /// threshold calibrated on its family's reference daughters. Values lying
    /// exactly on the threshold are called Haploid.
    #[must_use]
    pub fn from_coefficient(f: f64, threshold: f64) -> Self {
        match f >= threshold {
            true  => Self::Haploid,
            false => Self::Diploid,
        }
    }
}

impl Display for Ploidy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Diploid => "Diploid",
            Self::Haploid => "Haploid",
        })
    }
}
