use std::collections::HashMap;

use super::{
    codec::{self, PlaceField},
    entry::{DropReason, Dropped, PlaceEntry},
    plan::{StoreOp, WritePlan},
};
use crate::{
    error::Result,
    store::{KeyValueStore, StoreValue},
};

/// Label this tool's own entry is identified by.
pub const SHORTCUT_LABEL: &str = "Google Drive";

/// The places list as read back from the store, re-ranked from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repaired {
    pub entries: Vec<PlaceEntry>,
    pub dropped: Vec<Dropped>,
}

/// Reads the places list out of a store snapshot.
///
/// Base keys are taken in enumeration order and that order becomes the list
/// order. The digits in a key only locate its `Display`/`Ext` siblings. Empty
/// paths are skipped, missing siblings read as empty, and integer values drop
/// the entry.
pub fn read_places(snapshot: &[(String, StoreValue)]) -> Repaired {
    let by_key: HashMap<&str, &StoreValue> =
        snapshot.iter().map(|(k, v)| (k.as_str(), v)).collect();

    let mut repaired = Repaired::default();
    for (key, value) in snapshot {
        let Some(place_key) = codec::decode(key) else {
            continue;
        };
        if place_key.field != PlaceField::Path {
            continue;
        }
        let source_position = place_key.position;

        let path = match value {
            StoreValue::Text(path) if path.is_empty() => continue,
            StoreValue::Text(path) => path.clone(),
            StoreValue::Int(_) => {
                repaired.dropped.push(not_text(source_position, key));
                continue;
            }
        };

        let sibling = |field: PlaceField| -> std::result::Result<String, Dropped> {
            let sibling_key = codec::encode(source_position, field);
            match by_key.get(sibling_key.as_str()) {
                None => Ok(String::new()),
                Some(StoreValue::Text(s)) => Ok(s.clone()),
                Some(StoreValue::Int(_)) => Err(not_text(source_position, &sibling_key)),
            }
        };
        let (display, extension) = match (sibling(PlaceField::Display), sibling(PlaceField::Ext)) {
            (Ok(display), Ok(extension)) => (display, extension),
            (Err(dropped), _) | (_, Err(dropped)) => {
                repaired.dropped.push(dropped);
                continue;
            }
        };

        repaired.entries.push(PlaceEntry {
            position: repaired.entries.len() as u32,
            path,
            display,
            extension,
        });
    }

    for dropped in &repaired.dropped {
        log::warn!(
            "dropping place {} from the list: {:?}",
            dropped.source_position,
            dropped.reason
        );
    }
    repaired
}

fn not_text(source_position: u32, key: &str) -> Dropped {
    Dropped {
        source_position,
        reason: DropReason::NotText {
            key: key.to_string(),
        },
    }
}

/// Deletes for every places key in the snapshot, kept or not.
pub fn prune_ops(snapshot: &[(String, StoreValue)]) -> Vec<StoreOp> {
    snapshot
        .iter()
        .filter(|(key, _)| codec::is_place_key(key))
        .map(|(key, _)| StoreOp::Delete(key.clone()))
        .collect()
}

/// Folds `target` into the list under `label` and returns the final entries
/// with the shortcut's position. The first entry carrying `label` is updated
/// in place; further ones are removed.
pub fn upsert(mut entries: Vec<PlaceEntry>, target: &str, label: &str) -> (Vec<PlaceEntry>, u32) {
    let existing = entries.iter().position(|e| e.display == label);
    let index = match existing {
        Some(index) => {
            entries[index].path = target.to_string();
            index
        }
        None => {
            entries.push(PlaceEntry::new(0, target, label));
            entries.len() - 1
        }
    };

    let mut seen = false;
    entries.retain(|e| {
        if e.display != label {
            return true;
        }
        let keep = !seen;
        seen = true;
        keep
    });

    for (rank, entry) in entries.iter_mut().enumerate() {
        entry.position = rank as u32;
    }
    (entries, index as u32)
}

/// Sets for every entry plus the empty terminator after the last one.
pub fn rewrite_ops(entries: &[PlaceEntry]) -> Vec<StoreOp> {
    let mut ops = Vec::with_capacity(entries.len() * 3 + 1);
    for entry in entries {
        ops.push(StoreOp::Set(
            codec::encode(entry.position, PlaceField::Path),
            StoreValue::text(&entry.path),
        ));
        ops.push(StoreOp::Set(
            codec::encode(entry.position, PlaceField::Display),
            StoreValue::text(&entry.display),
        ));
        ops.push(StoreOp::Set(
            codec::encode(entry.position, PlaceField::Ext),
            StoreValue::text(&entry.extension),
        ));
    }
    ops.push(StoreOp::Set(
        codec::encode(entries.len() as u32, PlaceField::Path),
        StoreValue::text(""),
    ));
    ops
}

/// Plans a full synchronization without touching the store.
pub fn plan(snapshot: &[(String, StoreValue)], target: &str, label: &str) -> WritePlan {
    let repaired = read_places(snapshot);
    let (entries, shortcut_position) = upsert(repaired.entries, target, label);
    WritePlan {
        deletes: prune_ops(snapshot),
        sets: rewrite_ops(&entries),
        shortcut_position,
        entry_count: entries.len() as u32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub position: u32,
    pub entry_count: u32,
}

/// Keeps this tool's shortcut in the places list of an injected store.
#[derive(Debug)]
pub struct Synchronizer<S> {
    store: S,
    label: String,
}

impl<S: KeyValueStore> Synchronizer<S> {
    pub fn new(store: S) -> Self {
        Self::with_label(store, SHORTCUT_LABEL)
    }

    pub fn with_label(store: S, label: impl Into<String>) -> Self {
        Self {
            store,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn places(&self) -> Result<Repaired> {
        Ok(read_places(&self.store.snapshot()?))
    }

    pub fn plan(&self, target: &str) -> Result<WritePlan> {
        Ok(plan(&self.store.snapshot()?, target, &self.label))
    }

    pub fn synchronize(&mut self, target: &str) -> Result<SyncOutcome> {
        let plan = self.plan(target)?;
        plan.apply(&mut self.store)?;
        log::info!(
            "{} set to {} at position {} of {}",
            self.label,
            target,
            plan.shortcut_position,
            plan.entry_count
        );
        Ok(SyncOutcome {
            position: plan.shortcut_position,
            entry_count: plan.entry_count,
        })
    }
}
