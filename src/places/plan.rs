use crate::{
    error::{Error, Result},
    store::{KeyValueStore, StoreValue},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Delete(String),
    Set(String, StoreValue),
}

impl StoreOp {
    pub fn key(&self) -> &str {
        match self {
            StoreOp::Delete(key) | StoreOp::Set(key, _) => key,
        }
    }
}

/// Outcome of planning one synchronization: the exact deletes and sets to
/// run, plus where the shortcut landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    /// Prune pass, run first.
    pub deletes: Vec<StoreOp>,
    /// Rewrite pass, terminator last.
    pub sets: Vec<StoreOp>,
    pub shortcut_position: u32,
    pub entry_count: u32,
}

impl WritePlan {
    pub fn ops(&self) -> impl Iterator<Item = &StoreOp> {
        self.deletes.iter().chain(self.sets.iter())
    }

    /// Runs every operation in order, stopping at the first failure.
    /// Operations already applied are left in place.
    pub fn apply<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        for op in self.ops() {
            let outcome = match op {
                StoreOp::Delete(key) => store.delete(key),
                StoreOp::Set(key, value) => store.set(key, value.clone()),
            };
            outcome.map_err(|e| match e {
                Error::StoreWrite { .. } => e,
                other => Error::StoreWrite {
                    key: op.key().to_string(),
                    reason: other.to_string(),
                },
            })?;
        }
        log::debug!(
            "applied {} deletes and {} sets",
            self.deletes.len(),
            self.sets.len()
        );
        Ok(())
    }
}
