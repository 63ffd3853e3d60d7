use std::{fs, path::Path};

use located_error::LocatedError;

use log::trace;
use anyhow::Result;

mod error;
use error::ParseError;

/// Attempt to create an output directory (and any missing parent) and return
/// an error if it failed.
pub fn create_output_directory(path: &Path) -> Result<()> {
    use ParseError::CreateOutputDirectory;
    let loc_msg = || format!("While attempting to create output directory '{}'", path.display());
    fs::create_dir_all(path).map_err(CreateOutputDirectory).with_loc(loc_msg)?;
    trace!("Output directory: {}", path.display());
    Ok(())
}
