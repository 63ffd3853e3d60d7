use std::{fmt::{self, Formatter, Display}, str::FromStr, result::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Unknown
}

impl Sex {
    #[must_use]
    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }

    #[must_use]
    pub fn is_female(&self) -> bool {
        matches!(self, Self::Female)
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "m" | "male"   => Self::Male,
            "f" | "female" => Self::Female,
            _              => Self::Unknown,
        })
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Male    => "M",
            Self::Female  => "F",
            Self::Unknown => "NA"
        })
    }
}
