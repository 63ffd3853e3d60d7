use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to serialize command line arguments. got [{0}]")]
    SerializeArgs(String),
}
