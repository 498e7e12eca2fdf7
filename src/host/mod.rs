use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    places::{SyncOutcome, Synchronizer},
    shortcut::{ensure_target_dir, resolve_target_dir, ShortcutConfig},
    store::KeyValueStore,
};


/// What the synchronizer needs from the running CAD session.
pub trait HostSession {
    /// Full path of the active drawing, if there is one.
    fn active_document(&self) -> Option<PathBuf>;
    /// Shows a line to the user on the host's command line.
    fn message(&self, text: &str);
}

/// Resolves the shortcut folder for `document`, creates it and folds it into
/// the places list. `Ok(None)` when setup has not run yet.
pub fn sync_document<S: KeyValueStore>(
    sync: &mut Synchronizer<S>,
    document: &Path,
) -> Result<Option<SyncOutcome>> {
    let Some(config) = ShortcutConfig::load(sync.store())? else {
        log::debug!("shortcut not configured, skipping");
        return Ok(None);
    };
    let target = resolve_target_dir(&config.base_path, document, config.depth)?;
    ensure_target_dir(&target)?;
    sync.synchronize(&target.to_string_lossy()).map(Some)
}

/// Runs right before the host opens a file dialog. Never fails: a broken
/// shortcut must not keep the dialog from opening.
pub fn on_enter_modal<S: KeyValueStore, H: HostSession + ?Sized>(
    sync: &mut Synchronizer<S>,
    session: &H,
) -> Option<SyncOutcome> {
    let document = session.active_document()?;
    match sync_document(sync, &document) {
        Ok(outcome) => outcome,
        Err(Error::InvalidPath(reason)) => {
            session.message(&format!("Invalid Path {reason}"));
            None
        }
        Err(e) => {
            log::warn!("places sync skipped: {e}");
            None
        }
    }
}
