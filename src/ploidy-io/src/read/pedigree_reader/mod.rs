use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use pedigree::Sex;

use log::warn;
use anyhow::Result;
use located_error::LocatedError;

mod error;
pub use error::PedigreeReaderError;

/// Columns required within the individual metadata table header.
pub const PEDIGREE_COLUMNS: [&str; 4] = ["Name", "Sex", "Generation", "Family"];

/// One row of the individual metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedigreeRecord {
    pub name      : String,
    pub sex       : Sex,
    pub generation: String,
    pub family    : String,
}

/// Individual metadata table reader.
/// ### File characteristics:
/// - Tab-separated fields, first line is a header.
/// - Required columns: `Name` `Sex` `Generation` `Family`. Column order is
///   discovered from the header; additional columns are ignored.
/// - `Sex` values are expected as 'M'/'F'. Any other token is kept as
///   [`Sex::Unknown`] and reported as a warning.
#[derive(Debug, Clone)]
pub struct PedigreeReader {
    pub source_file: PathBuf,
    pub records    : Vec<PedigreeRecord>,
}

impl PedigreeReader {
    /// Instantiate a reader from an individual metadata table.
    /// # Arguments:
    /// - `path`: path leading to the tab-separated metadata table.
    pub fn new(path: &Path) -> Result<Self> {
        let source = File::open(path)
            .with_loc(|| format!("Failed to open individual metadata table '{}'", path.display()))?;
        let records = Self::parse(BufReader::new(source))
            .with_loc(|| format!("While parsing individual metadata table '{}'", path.display()))?;
        Ok(Self { source_file: path.to_path_buf(), records })
    }

    /// Parse the provided individual metadata table into a vector of records.
    pub fn parse(source: impl BufRead) -> Result<Vec<PedigreeRecord>, PedigreeReaderError> {
        use PedigreeReaderError::{EmptyTable, ShortRow};

        let mut lines  = source.lines();
        let header     = lines.next().ok_or(EmptyTable)??;
        let header_idx = Self::index_header(&header)?;
        let [name_idx, sex_idx, generation_idx, family_idx] = header_idx;

        let mut records = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue
            }
            let lineno = idx + 2; // 1-based, counting the header.
            let fields: Vec<&str> = line.split('\t').collect();
            let field  = |col: usize| fields.get(col).copied().ok_or(ShortRow { line: lineno });

            let sex_field = field(sex_idx)?;
            let sex = Sex::from_str(sex_field).unwrap_or(Sex::Unknown);
            if sex == Sex::Unknown {
                warn!("Line {lineno}: unrecognized Sex token '{sex_field}'. This individual will never be classified.");
            }

            records.push(PedigreeRecord {
                name      : field(name_idx)?.to_string(),
                sex,
                generation: field(generation_idx)?.to_string(),
                family    : field(family_idx)?.to_string(),
            });
        }
        Ok(records)
    }

    /// Locate each required column within the table header.
    fn index_header(header: &str) -> Result<[usize; 4], PedigreeReaderError> {
        let columns: Vec<&str> = header.split('\t').collect();
        let mut indices = [0; 4];
        for (slot, wanted) in indices.iter_mut().zip(PEDIGREE_COLUMNS) {
            *slot = columns.iter()
                .position(|col| *col == wanted)
                .ok_or(PedigreeReaderError::MissingColumn(wanted))?;
        }
        Ok(indices)
    }
}
