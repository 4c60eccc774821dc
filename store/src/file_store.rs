//! Whole-file JSON persistence.
//!
//! Each resource lives in one pretty-printed JSON array file. Every mutation
//! rewrites the file in full; there is no partial-write recovery. A missing
//! file means an empty store, not an error.

use std::{
    fs,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;

pub struct JsonStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R> JsonStore<R>
where
    R: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record, in file order.
    pub fn load_all(&self) -> Result<Vec<R>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrites the backing file with the full record sequence.
    pub fn save_all(&self, records: &[R]) -> Result<(), StoreError> {
        fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::records::Quote;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store: JsonStore<Quote> = JsonStore::new(dir.path().join("quotes.json"));

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store: JsonStore<Quote> = JsonStore::new(dir.path().join("quotes.json"));

        let quotes = vec![
            Quote {
                id: 1,
                quote: "Stay curious.".into(),
            },
            Quote {
                id: 2,
                quote: "Ship it.".into(),
            },
        ];
        store.save_all(&quotes).unwrap();

        assert_eq!(store.load_all().unwrap(), quotes);
    }

    #[test]
    fn save_of_loaded_records_leaves_file_unchanged() {
        let dir = tempdir().unwrap();
        let store: JsonStore<Quote> = JsonStore::new(dir.path().join("quotes.json"));

        store
            .save_all(&[Quote {
                id: 1,
                quote: "Stay curious.".into(),
            }])
            .unwrap();

        let before = fs::read_to_string(store.path()).unwrap();
        store.save_all(&store.load_all().unwrap()).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, "not json").unwrap();

        let store: JsonStore<Quote> = JsonStore::new(&path);
        assert!(matches!(
            store.load_all(),
            Err(StoreError::Malformed(_))
        ));
    }
}
