use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, MemoryStore, StoreValue};
use crate::error::{Error, Result};

const DIALOGS_FILE: &str = "AllAnavDialogs.json";

#[derive(Serialize, Deserialize, Debug, Default)]
struct StoreFile {
    updated_at: String,
    values: IndexMap<String, StoreValue>,
}

/// Dialog settings persisted as a JSON document, one per host profile.
///
/// Every `set` and `delete` rewrites the whole file, so a crash leaves the
/// file as it was after the last completed operation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    pub fn base_storage_dir() -> Result<PathBuf> {
        let proj = directories::ProjectDirs::from("com", "ecogy", "places-sync")
            .ok_or_else(|| Error::InvalidPath("cannot get project dir".to_string()))?;
        Ok(proj.data_local_dir().to_path_buf())
    }

    pub fn profile_path(profile: &str) -> Result<PathBuf> {
        Ok(Self::base_storage_dir()?.join(profile).join(DIALOGS_FILE))
    }

    /// Opens the store at `path`. A missing file is an empty store; the file
    /// is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::StoreRead(format!("{}: {}", path.display(), e)))?;
            let file: StoreFile = serde_json::from_str(&content)
                .map_err(|e| Error::StoreRead(format!("{}: {}", path.display(), e)))?;
            MemoryStore::from_pairs(file.values)
        } else {
            MemoryStore::new()
        };
        log::debug!("opened dialog store {} ({} keys)", path.display(), inner.len());
        Ok(Self { path, inner })
    }

    pub fn open_profile(profile: &str) -> Result<Self> {
        Self::open(Self::profile_path(profile)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &MemoryStore) -> Result<()> {
        let dir = self.path.parent().ok_or_else(|| {
            Error::InvalidPath(format!("store without parent: {}", self.path.display()))
        })?;
        fs::create_dir_all(dir)?;

        let file = StoreFile {
            updated_at: chrono::Utc::now().to_rfc3339(),
            values: values.values().clone(),
        };
        let tmp = self.path.with_extension("tmp.part");
        fs::write(&tmp, serde_json::to_string_pretty(&file)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Writes `next` to disk and only then makes it the current state, so a
    /// failed write leaves memory matching the file.
    fn commit(&mut self, key: &str, next: MemoryStore) -> Result<()> {
        self.persist(&next).map_err(|e| Error::StoreWrite {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.inner = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn keys(&self) -> Result<Vec<String>> {
        self.inner.keys()
    }

    fn get(&self, key: &str) -> Result<Option<StoreValue>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: StoreValue) -> Result<()> {
        let mut next = self.inner.clone();
        next.set(key, value)?;
        self.commit(key, next)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if self.inner.get(key)?.is_none() {
            return Ok(());
        }
        let mut next = self.inner.clone();
        next.delete(key)?;
        self.commit(key, next)
    }
}
