use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryReaderError {
    #[error("Table is empty. Expected a tab-separated header line")]
    EmptyTable,

    #[error("Missing required column '{0}' within the table header")]
    MissingColumn(&'static str),

    #[error("Line {line}: row carries fewer fields than the table header")]
    ShortRow{line: usize},

    #[error("Line {line}: failed to parse inbreeding coefficient '{value}'")]
    ParseCoefficient{line: usize, value: String, #[source] source: std::num::ParseFloatError},

    #[error("Failed to read from table")]
    IOError(#[from] std::io::Error),
}
