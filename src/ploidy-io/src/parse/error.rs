use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to create output directory")]
    CreateOutputDirectory(#[source] std::io::Error),
}
