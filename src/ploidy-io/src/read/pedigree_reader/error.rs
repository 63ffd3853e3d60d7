use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedigreeReaderError {
    #[error("Table is empty. Expected a tab-separated header line")]
    EmptyTable,

    #[error("Missing required column '{0}' within the table header")]
    MissingColumn(&'static str),

    #[error("Line {line}: row carries fewer fields than the table header")]
    ShortRow{line: usize},

    #[error("Failed to read from table")]
    IOError(#[from] std::io::Error),
}
