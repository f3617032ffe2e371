use std::path::{Component, Path, PathBuf};

use exemplar_core::{Dataset, DatasetError};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset name `{0}` is not a plain file name")]
    Name(String),

    #[error("dataset `{0}` is not a .csv file")]
    Extension(String),

    #[error("dataset file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    Row { line: usize, reason: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// A directory of CSV datasets addressed by file name.
///
/// Each file has a header row followed by rows whose first two columns are
/// x and y. Further columns are ignored. The file name becomes the dataset's
/// name, which also keys its path search memo table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Creates a data directory rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the dataset stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a plain `.csv` file name, the file
    /// does not exist or cannot be read, a row has fewer than two columns or
    /// an unparsable number, or the resulting series is not a valid dataset.
    pub fn load(&self, name: &str) -> Result<Dataset, LoadError> {
        let mut components = Path::new(name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(LoadError::Name(name.to_owned()));
        }

        if Path::new(name).extension().is_none_or(|ext| ext != "csv") {
            return Err(LoadError::Extension(name.to_owned()));
        }

        let path = self.root.join(name);
        if !path.is_file() {
            return Err(LoadError::NotFound(path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)?;

        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            // The header occupies line 1.
            let line = row + 2;

            if record.len() < 2 {
                return Err(LoadError::Row {
                    line,
                    reason: format!("expected at least 2 columns, found {}", record.len()),
                });
            }
            xs.push(parse(&record[0], line)?);
            ys.push(parse(&record[1], line)?);
        }

        debug!(dataset = name, points = xs.len(), "loaded dataset");
        Ok(Dataset::new(name, xs, ys)?)
    }
}

fn parse(field: &str, line: usize) -> Result<f64, LoadError> {
    field.parse().map_err(|_| LoadError::Row {
        line,
        reason: format!("`{field}` is not a number"),
    })
}
