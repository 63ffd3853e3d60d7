pub mod sex;
pub use sex::Sex;

pub mod ploidy;
pub use ploidy::Ploidy;

mod individual;
pub use individual::Individual;

mod cohort;
pub use cohort::Cohort;
