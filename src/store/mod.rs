use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod file;
pub mod memory;

#[cfg(test)]
mod tests;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// A value as the host stores it. The host has no schema, so readers decide
/// what a key is supposed to hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StoreValue {
    Int(i64),
    Text(String),
}

impl StoreValue {
    pub fn text(value: impl Into<String>) -> Self {
        StoreValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(s) => Some(s),
            StoreValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            StoreValue::Int(n) => Some(*n),
            StoreValue::Text(_) => None,
        }
    }
}

/// The flat key/value namespace owned by the host's file dialogs.
///
/// `delete` on an absent key succeeds: someone else may have removed it
/// between our read and our write.
pub trait KeyValueStore {
    fn keys(&self) -> Result<Vec<String>>;
    fn get(&self, key: &str) -> Result<Option<StoreValue>>;
    fn set(&mut self, key: &str, value: StoreValue) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Every key with its value, in enumeration order. Keys that vanish
    /// between `keys` and `get` are skipped.
    fn snapshot(&self) -> Result<Vec<(String, StoreValue)>> {
        let mut pairs = Vec::new();
        for key in self.keys()? {
            if let Some(value) = self.get(&key)? {
                pairs.push((key, value));
            }
        }
        Ok(pairs)
    }
}
