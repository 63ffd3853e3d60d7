use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;
use regex::Regex;
use lazy_static::lazy_static;

use located_error::LocatedError;

mod error;
pub use error::WriterError;

/// THE field separator used for this table writer.
pub const WRITER_SEPARATOR: &str = "\t";

/// A generic delimited-table writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct TableWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> TableWriter<'a> {
    /// Instantiate a new `TableWriter`, linked to a file.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the
    /// proper UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<TableWriter<'a>> {
        use WriterError::IOError;
        Ok(TableWriter { source: match path {
            Some(path) => {
                let file = File::create(path).map_err(IOError).loc("While creating file")?;
                BufWriter::new(Box::new(file))
            },
            None => {
                BufWriter::new(Box::new(std::io::stdout()))
            }
        }})
    }

    /// Write a full table: one header line, then one line per row.
    ///
    /// # Errors
    /// - If any line fails to get written within the file.
    pub fn write_table<T, I>(&mut self, header: &str, rows: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        self.write_iter([header])?;
        self.write_iter(rows)
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    ///
    /// # Behavior
    ///
    /// For each item of the iterator, `write_iter` will search for the regular
    /// expression `[ ]+-[ ]+` and replace matches with `\t`. This effectively
    /// removes "Pretty-print" from the output.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written within the file.
    ///
    /// # Panics
    /// - if parsing the regex required to delete pretty-print characters fails.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        // Remove pretty print trailing and leading whitespace
        lazy_static! {
            static ref RE: Regex = Regex::new(r"[ ]+-[ ]+").expect("Failed to parse regex.");
        }
        for obj in iter {
            let line = RE.replace_all(&format!("{obj}\n"), WRITER_SEPARATOR).into_owned();
            self.source.write_all(line.as_bytes())
                .map_err(WriterError::IOError)
                .loc("While writing contents into file")?;
        }

        self.source.flush().loc("While flushing buffer contents of Writer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("m1");
        let mut writer = TableWriter::new(Some(&path))?;

        writer.write_iter(["ACH04 - F - F4 - A"])?;

        let got = std::fs::read_to_string(&path)?;
        assert_eq!(got, "ACH04\tF\tF4\tA\n");
        Ok(())
    }

    #[test]
    fn write_table_prepends_the_header() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("m2sqrt");
        let mut writer = TableWriter::new(Some(&path))?;

        writer.write_table("Name - Sex", ["ACH04 - F", "ACH05 - M"])?;

        let got = std::fs::read_to_string(&path)?;
        assert_eq!(got, "Name\tSex\nACH04\tF\nACH05\tM\n");
        Ok(())
    }

    #[test]
    fn negative_floats_survive_separator_replacement() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("m1square");
        let mut writer = TableWriter::new(Some(&path))?;

        writer.write_iter([format!("ACH06 - {}", -0.25)])?;

        let got = std::fs::read_to_string(&path)?;
        assert_eq!(got, "ACH06\t-0.25\n");
        Ok(())
    }
}
