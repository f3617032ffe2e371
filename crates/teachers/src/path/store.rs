use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use super::MemoTable;

/// Errors that can occur when loading or saving a memo table.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("memo file i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("memo file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Persists memo tables keyed by dataset name.
///
/// The path search loads a table once before it starts and saves it once
/// when it finishes; nothing is written while the search runs. Stores do not
/// coordinate concurrent searches: callers must not run two searches for the
/// same key at the same time.
pub trait MemoStore {
    /// Loads the table stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored table exists but cannot be read.
    fn load(&mut self, key: &str) -> Result<Option<MemoTable>, StoreError>;

    /// Stores `table` under `key`, replacing any previous table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be written.
    fn save(&mut self, key: &str, table: &MemoTable) -> Result<(), StoreError>;
}

/// Keeps memo tables in memory for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: HashMap<String, MemoTable>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MemoTable> {
        self.tables.get(key)
    }
}

impl MemoStore for InMemoryStore {
    fn load(&mut self, key: &str) -> Result<Option<MemoTable>, StoreError> {
        Ok(self.tables.get(key).cloned())
    }

    fn save(&mut self, key: &str, table: &MemoTable) -> Result<(), StoreError> {
        self.tables.insert(key.to_owned(), table.clone());
        Ok(())
    }
}

/// Keeps one JSON file per dataset name in a directory.
///
/// Writes go to a temporary file in the same directory that is then renamed
/// over the target, so a reader never sees a partially written table.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds the table for `key`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced so that a dataset
    /// name can never escape the store directory.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{stem}.memo.json"))
    }
}

impl MemoStore for FileStore {
    fn load(&mut self, key: &str) -> Result<Option<MemoTable>, StoreError> {
        let path = self.path_for(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let table = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), "loaded memo table");
        Ok(Some(table))
    }

    fn save(&mut self, key: &str, table: &MemoTable) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(&mut writer, table)?;
            writer.flush()?;
        }
        tmp.persist(&path).map_err(|e| e.error)?;

        debug!(path = %path.display(), populated = table.populated(), "saved memo table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::path::Entry;

    fn table() -> MemoTable {
        let mut table = MemoTable::new(3, "mse");
        table.set(0, 1, Entry::Chain { next: 2, distance: 0.75 });
        table
    }

    #[test]
    fn in_memory_round_trip() {
        let mut store = InMemoryStore::new();
        assert!(store.load("d").unwrap().is_none());

        store.save("d", &table()).unwrap();

        assert_eq!(store.load("d").unwrap(), Some(table()));
        assert!(store.load("other").unwrap().is_none());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("memo"));

        assert!(store.load("series.csv").unwrap().is_none());
        store.save("series.csv", &table()).unwrap();

        assert!(store.path_for("series.csv").exists());
        assert_eq!(store.load("series.csv").unwrap(), Some(table()));
    }

    #[test]
    fn file_save_replaces_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.save("d", &MemoTable::new(2, "mse")).unwrap();
        store.save("d", &table()).unwrap();

        assert_eq!(store.load("d").unwrap(), Some(table()));
    }

    #[test]
    fn keys_cannot_escape_directory() {
        let store = FileStore::new("/memo");
        let path = store.path_for("../etc/passwd");
        assert_eq!(path, PathBuf::from("/memo/.._etc_passwd.memo.json"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        std::fs::write(store.path_for("bad"), "not json").unwrap();

        assert!(matches!(store.load("bad"), Err(StoreError::Format(_))));
    }
}
