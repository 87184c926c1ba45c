use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::StoreError;

/// String key/value storage, shaped like browser local storage.
///
/// Options loading and the settings panel only talk to this trait, so they
/// run against [`MemoryStore`] in tests and [`JsonFileStore`] from the CLI.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

// ── MemoryStore ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// ── JsonFileStore ─────────────────────────────────────────────────────────

/// Key/value store persisted as a flat JSON object of strings.
///
/// Mutations stay in memory until [`flush`](Self::flush).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl JsonFileStore {
    /// Loads `path`. A missing or blank file yields an empty store.
    ///
    /// # Errors
    /// I/O failures other than not-found, malformed JSON, or a non-object top level.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("settings file {} not found, starting empty", path.display());
                String::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let mut entries = BTreeMap::new();
        if !text.trim().is_empty() {
            let value: Value = match serde_json::from_str(&text) {
                Ok(v) => v,
                Err(source) => return Err(StoreError::Json { path, source }),
            };
            let Value::Object(map) = value else {
                return Err(StoreError::NotAnObject { path });
            };
            for (key, value) in map {
                let value = match value {
                    Value::String(s) => s,
                    other => {
                        log::warn!("settings key {key:?} holds non-string {other}, kept as JSON");
                        other.to_string()
                    }
                };
                entries.insert(key, value);
            }
        }

        log::debug!("loaded {} settings from {}", entries.len(), path.display());
        Ok(Self { path, entries, dirty: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes pending changes. The file is replaced via a sibling temp file.
    ///
    /// # Errors
    /// Any I/O failure creating the directory, writing or renaming.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        let io_err = |source: io::Error| StoreError::Io { path: self.path.clone(), source };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let text = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text + "\n").map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        log::debug!("wrote {} settings to {}", self.entries.len(), self.path.display());
        self.dirty = false;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.entries.get(key).map(String::as_str) != Some(value) {
            self.entries.insert(key.to_string(), value.to_string());
            self.dirty = true;
        }
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.dirty = true;
        }
    }
}
