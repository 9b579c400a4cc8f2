//! Persistence store: atomic load/save of the single save record.
//!
//! RULE: Only store.rs touches durable storage.
//! The session hands records in and gets records out; it never sees files.
//!
//! Reads never fail from the caller's point of view: `load()` collapses every
//! `LoadError` to the default record. `try_load()` keeps the branch explicit
//! for callers and tests that need to tell the cases apart.
//!
//! Writes go to a sibling temp file first and are renamed over the target,
//! so a crash mid-write leaves either the old file or the new one, never a
//! torn one.

use crate::{
    error::{LoadError, StoreError},
    record::SaveRecord,
    types::DEFAULT_SAVE_FILE,
};
use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

pub trait SaveStore {
    /// Read and validate the stored record.
    fn try_load(&self) -> Result<SaveRecord, LoadError>;

    /// Overwrite the stored record with `record`.
    fn save(&self, record: &SaveRecord) -> Result<(), StoreError>;

    /// Read the stored record, substituting defaults on any failure.
    fn load(&self) -> SaveRecord {
        match self.try_load() {
            Ok(record) => record,
            Err(LoadError::Missing) => {
                log::info!("store: no save found, starting fresh");
                SaveRecord::default()
            }
            Err(e) => {
                log::warn!("store: {e}; starting from defaults");
                SaveRecord::default()
            }
        }
    }
}

// ── JSON file ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_SAVE_FILE);
        self.path.with_file_name(format!("{file_name}.tmp"))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::open(DEFAULT_SAVE_FILE)
    }
}

impl SaveStore for JsonFileStore {
    fn try_load(&self) -> Result<SaveRecord, LoadError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(LoadError::Missing),
            Err(e) => return Err(LoadError::Io(e)),
        };
        let record = SaveRecord::from_json(&text)?;
        log::debug!("store: loaded {}", self.path.display());
        Ok(record)
    }

    fn save(&self, record: &SaveRecord) -> Result<(), StoreError> {
        let json = record.to_json()?;
        write_atomic(&self.path, &self.temp_path(), json.as_bytes())?;
        log::debug!("store: saved {}", self.path.display());
        Ok(())
    }
}

fn write_atomic(path: &Path, tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let written = fs::File::create(tmp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(error) = written.and_then(|_| fs::rename(tmp_path, path)) {
        let _ = fs::remove_file(tmp_path);
        return Err(error);
    }
    Ok(())
}

// ── In memory ──────────────────────────────────────────────────

/// Keeps the serialized record in memory. Used in tests and when no
/// durable location is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    json: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw contents, valid or not.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self { json: RefCell::new(Some(text.into())) }
    }

    pub fn contents(&self) -> Option<String> {
        self.json.borrow().clone()
    }
}

impl SaveStore for MemoryStore {
    fn try_load(&self) -> Result<SaveRecord, LoadError> {
        match self.json.borrow().as_deref() {
            Some(text) => SaveRecord::from_json(text),
            None => Err(LoadError::Missing),
        }
    }

    fn save(&self, record: &SaveRecord) -> Result<(), StoreError> {
        *self.json.borrow_mut() = Some(record.to_json()?);
        Ok(())
    }
}
