mod pedigree_reader;
pub use pedigree_reader::{PedigreeReader, PedigreeRecord, PedigreeReaderError};

mod summary_reader;
pub use summary_reader::{SummaryReader, SummaryRecord, SummaryReaderError};
