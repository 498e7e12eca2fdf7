use indexmap::IndexMap;

use super::{KeyValueStore, StoreValue};
use crate::error::Result;

/// Insertion-ordered store kept entirely in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStore {
    values: IndexMap<String, StoreValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, StoreValue)>,
        K: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn values(&self) -> &IndexMap<String, StoreValue> {
        &self.values
    }
}

impl KeyValueStore for MemoryStore {
    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }

    fn get(&self, key: &str) -> Result<Option<StoreValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: StoreValue) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.values.shift_remove(key);
        Ok(())
    }
}
