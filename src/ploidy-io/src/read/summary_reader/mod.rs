use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Result;
use located_error::LocatedError;

mod error;
pub use error::SummaryReaderError;

/// Columns required within the variant-call summary table header.
pub const SUMMARY_COLUMNS: [&str; 2] = ["INDV", "F"];

/// One row of the variant-call summary table: an individual identifier and its
/// inbreeding coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub name: String,
    pub f   : f64,
}

/// Variant-call summary statistics table reader (e.g. the output of
/// `vcftools --het`).
/// ### File characteristics:
/// - Tab-separated fields, first line is a header.
/// - Required columns: `INDV` (individual identifier, matched against the
///   metadata table's `Name`) and `F` (inbreeding coefficient). Column order
///   is discovered from the header; additional columns are ignored.
#[derive(Debug, Clone)]
pub struct SummaryReader {
    pub source_file: PathBuf,
    pub records    : Vec<SummaryRecord>,
}

impl SummaryReader {
    /// Instantiate a reader from a variant-call summary table.
    /// # Arguments:
    /// - `path`: path leading to the tab-separated summary table.
    pub fn new(path: &Path) -> Result<Self> {
        let source = File::open(path)
            .with_loc(|| format!("Failed to open variant-call summary table '{}'", path.display()))?;
        let records = Self::parse(BufReader::new(source))
            .with_loc(|| format!("While parsing variant-call summary table '{}'", path.display()))?;
        Ok(Self { source_file: path.to_path_buf(), records })
    }

    /// Parse the provided summary table into a vector of records.
    pub fn parse(source: impl BufRead) -> Result<Vec<SummaryRecord>, SummaryReaderError> {
        use SummaryReaderError::{EmptyTable, MissingColumn, ParseCoefficient, ShortRow};

        let mut lines = source.lines();
        let header    = lines.next().ok_or(EmptyTable)??;
        let columns: Vec<&str> = header.split('\t').collect();

        let find_column = |wanted: &'static str| {
            columns.iter().position(|col| *col == wanted).ok_or(MissingColumn(wanted))
        };
        let name_idx = find_column("INDV")?;
        let f_idx    = find_column("F")?;

        let mut records = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue
            }
            let lineno = idx + 2; // 1-based, counting the header.
            let fields: Vec<&str> = line.split('\t').collect();
            let field  = |col: usize| fields.get(col).copied().ok_or(ShortRow { line: lineno });

            let f_field = field(f_idx)?;
            let f = f_field.parse::<f64>().map_err(|source| ParseCoefficient {
                line: lineno, value: f_field.to_string(), source
            })?;

            records.push(SummaryRecord { name: field(name_idx)?.to_string(), f });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TABLE: &str = "INDV\tO(HOM)\tE(HOM)\tN_SITES\tF\n\
                         ACH04\t7672\t6816.9\t9331\t0.34014\n\
                         ACH05\t6534\t6502.3\t9331\t0.01123\n";

    #[test]
    fn parse_nominal_table() -> Result<()> {
        let records = SummaryReader::parse(Cursor::new(TABLE))?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SummaryRecord { name: "ACH04".to_string(), f: 0.34014 });
        assert_eq!(records[1], SummaryRecord { name: "ACH05".to_string(), f: 0.01123 });
        Ok(())
    }

    #[test]
    fn extra_columns_are_ignored() -> Result<()> {
        let table = "F\tINDV\n-0.25\tACH04\n";
        let records = SummaryReader::parse(Cursor::new(table))?;
        assert_eq!(records[0].f, -0.25);
        Ok(())
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = "INDV\tN_SITES\nACH04\t9331\n";
        let result = SummaryReader::parse(Cursor::new(table));
        assert!(matches!(result, Err(SummaryReaderError::MissingColumn("F"))));
    }

    #[test]
    fn invalid_coefficient_carries_the_line_number() {
        let table = "INDV\tF\nACH04\t0.25\nACH05\tNaN-ish\n";
        let result = SummaryReader::parse(Cursor::new(table));
        match result {
            Err(SummaryReaderError::ParseCoefficient { line, value, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "NaN-ish");
            },
            other => panic!("Expected a ParseCoefficient error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("/nonexistent/summary");
        let err = SummaryReader::new(path).expect_err("Opening a missing file must fail");
        assert!(format!("{err}").contains("/nonexistent/summary"));
    }
}
