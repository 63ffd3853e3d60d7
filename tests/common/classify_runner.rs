use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Test harness running the full classification pipeline over inline
/// tab-separated fixtures, within a temporary directory.
pub struct ClassifyRunner {
    _tmpdir   : TempDir, // Keeps the fixtures alive for the test's duration.
    output_dir: PathBuf,
}

pub struct ClassifyRunnerBuilder {
    individuals: String,
    summary    : String,
}

impl ClassifyRunnerBuilder {
    pub fn new() -> Self {
        Self {
            individuals: String::from("Name\tSex\tGeneration\tFamily\n"),
            summary    : String::from("INDV\tO(HOM)\tE(HOM)\tN_SITES\tF\n"),
        }
    }

    /// Append one row to the individual metadata fixture.
    pub fn individual(mut self, name: &str, sex: &str, generation: &str, family: &str) -> Self {
        self.individuals.push_str(&format!("{name}\t{sex}\t{generation}\t{family}\n"));
        self
    }

    /// Append one row to the variant-call summary fixture.
    pub fn coefficient(mut self, name: &str, f: f64) -> Self {
        self.summary.push_str(&format!("{name}\t0\t0.0\t0\t{f}\n"));
        self
    }

    /// Append a fully joined individual: one metadata row plus one matching
    /// summary row.
    pub fn joined(self, name: &str, sex: &str, generation: &str, family: &str, f: f64) -> Self {
        self.individual(name, sex, generation, family).coefficient(name, f)
    }

    /// Materialize the fixtures and run the whole pipeline.
    pub fn run(self) -> Result<ClassifyRunner> {
        let tmpdir      = tempfile::tempdir()?;
        let individuals = tmpdir.path().join("individuals");
        let summary     = tmpdir.path().join("summary");
        let output_dir  = tmpdir.path().join("ploidy");

        std::fs::write(&individuals, &self.individuals)?;
        std::fs::write(&summary, &self.summary)?;

        classify::run(&individuals, &summary, &output_dir)?;
        Ok(ClassifyRunner { _tmpdir: tmpdir, output_dir })
    }
}

impl ClassifyRunner {
    /// Filenames of every output table, sorted.
    pub fn output_labels(&self) -> Result<Vec<String>> {
        let mut labels: Vec<String> = std::fs::read_dir(&self.output_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        labels.sort();
        Ok(labels)
    }

    /// Parse one output table into rows of tab-separated fields, header
    /// included.
    pub fn read_table(&self, label: &str) -> Result<Vec<Vec<String>>> {
        let contents = std::fs::read_to_string(self.output_dir.join(label))?;
        Ok(contents.lines()
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect())
    }

    /// Fetch the `Ploidy` column value of one individual within one output
    /// table.
    pub fn ploidy_of(&self, label: &str, name: &str) -> Result<String> {
        let table = self.read_table(label)?;
        let row = table[1..].iter()
            .find(|row| row[0] == name)
            .unwrap_or_else(|| panic!("Missing individual '{name}' within table '{label}'"));
        Ok(row.last().expect("Empty output row").clone())
    }
}
