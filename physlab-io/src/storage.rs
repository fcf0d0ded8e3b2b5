//! Key-value persistence of measurement collections
//!
//! A collection is stored as one JSON array under [`STORAGE_KEY`]. The
//! backend decides where the bytes live: [`MemoryBackend`] for tests and
//! sessions, [`FileBackend`] for one `<key>.json` file per key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use physlab_core::{Persistence, PersistenceError};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{IoError, IoResult};

/// Key the resistance worksheet is stored under
pub const STORAGE_KEY: &str = "physics_lab_measurements";

/// String-keyed blob storage
pub trait KeyValueStore {
    /// Stored value, `None` when the key is absent
    fn get(&self, key: &str) -> IoResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> IoResult<()>;

    /// Forget `key`; absent keys are not an error
    fn remove(&mut self, key: &str) -> IoResult<()>;
}

/// In-memory store; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryBackend {
    fn get(&self, key: &str) -> IoResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| IoError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> IoResult<()> {
        let mut entries = self.entries.lock().map_err(|_| IoError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> IoResult<()> {
        let mut entries = self.entries.lock().map_err(|_| IoError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Directory of `<key>.json` files
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Store under `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> IoResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> IoResult<()> {
        fs::create_dir_all(&self.dir)?;
        // Replaced atomically through a sibling temp file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> IoResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// JSON [`Persistence`] over any [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct JsonPersistence<B, R> {
    backend: B,
    key: String,
    _record: PhantomData<fn() -> R>,
}

impl<B: KeyValueStore, R> JsonPersistence<B, R> {
    /// Persist under [`STORAGE_KEY`]
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Persist under a custom key
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            _record: PhantomData,
        }
    }

    /// Key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B, R> JsonPersistence<B, R>
where
    B: KeyValueStore,
    R: Serialize + DeserializeOwned,
{
    fn read(&self) -> IoResult<Vec<R>> {
        let Some(json) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let rows: Vec<R> = serde_json::from_str(&json)?;
        debug!("loaded {} rows from {}", rows.len(), self.key);
        Ok(rows)
    }

    fn write(&mut self, rows: &[R]) -> IoResult<()> {
        let json = serde_json::to_string(rows)?;
        self.backend.set(&self.key, &json)
    }
}

impl<B, R> Persistence<R> for JsonPersistence<B, R>
where
    B: KeyValueStore,
    R: Serialize + DeserializeOwned,
{
    fn load(&mut self) -> Result<Vec<R>, PersistenceError> {
        self.read().map_err(|e| {
            warn!("unreadable data under {}: {}", self.key, e);
            PersistenceError::from(e)
        })
    }

    fn save(&mut self, rows: &[R]) -> Result<(), PersistenceError> {
        Ok(self.write(rows)?)
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        Ok(self.backend.remove(&self.key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physlab_core::{AcousticMeasurement, ResistanceMeasurement};

    #[test]
    fn memory_backend_clones_share_entries() {
        let mut a = MemoryBackend::new();
        let b = a.clone();

        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));

        a.remove("k").unwrap();
        a.remove("k").unwrap();
        assert_eq!(b.get("k").unwrap(), None);
    }

    #[test]
    fn absent_key_loads_nothing() {
        let mut persistence = JsonPersistence::<_, ResistanceMeasurement>::new(MemoryBackend::new());
        assert_eq!(persistence.load().unwrap(), Vec::new());
    }

    #[test]
    fn corrupt_data_is_a_serialization_error() {
        let mut backend = MemoryBackend::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();

        let mut persistence = JsonPersistence::<_, ResistanceMeasurement>::new(backend);
        assert!(matches!(
            persistence.load(),
            Err(PersistenceError::Serialization { .. })
        ));
    }

    #[test]
    fn resistance_rows_use_snake_case_names() {
        let backend = MemoryBackend::new();
        let mut persistence = JsonPersistence::<_, ResistanceMeasurement>::new(backend.clone());
        let row = ResistanceMeasurement::from_inputs(1, Some(27.0), Some(100.0));

        persistence.save(&[row]).unwrap();

        let json = backend.get(STORAGE_KEY).unwrap().unwrap();
        assert!(json.contains("\"temperature_c\":27.0"));
        assert!(json.contains("\"ln_conductance\""));
        assert!(json.contains("\"ionization_energy\":null"));
        assert_eq!(persistence.load().unwrap(), [row]);
    }

    #[test]
    fn acoustic_rows_use_camel_case_names() {
        let backend = MemoryBackend::new();
        let mut persistence =
            JsonPersistence::<_, AcousticMeasurement>::with_key(backend.clone(), "acoustic");
        let row = AcousticMeasurement::from_inputs(1, Some(0.0), Some(10.0), Some(0.5), Some(10.0));

        persistence.save(&[row]).unwrap();

        let json = backend.get("acoustic").unwrap().unwrap();
        assert!(json.contains("\"deltaI\":0.5"));
        assert!(json.contains("\"pathLength\":10.0"));
        assert_eq!(persistence.load().unwrap(), [row]);
    }

    #[test]
    fn clear_removes_the_key() {
        let backend = MemoryBackend::new();
        let mut persistence = JsonPersistence::<_, ResistanceMeasurement>::new(backend.clone());
        persistence
            .save(&[ResistanceMeasurement::from_inputs(1, Some(20.0), Some(5.0))])
            .unwrap();

        persistence.clear().unwrap();

        assert_eq!(backend.get(STORAGE_KEY).unwrap(), None);
    }
}
