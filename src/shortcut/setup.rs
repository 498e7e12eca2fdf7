use std::path::PathBuf;

use super::ShortcutConfig;
use crate::{
    error::{Error, Result},
    store::KeyValueStore,
};

/// Validates what the user typed and stores it. Nothing is written unless
/// both the path and the depth are valid.
pub fn configure<S: KeyValueStore + ?Sized>(
    store: &mut S,
    raw_path: &str,
    raw_depth: &str,
) -> Result<ShortcutConfig> {
    let path = expand_home(raw_path.trim());
    if path.as_os_str().is_empty() || !(path.is_dir() || path.is_file()) {
        return Err(Error::InvalidPath(raw_path.to_string()));
    }
    let depth = raw_depth
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidDepth(raw_depth.to_string()))?;

    let config = ShortcutConfig::new(path.to_string_lossy(), depth);
    config.save(store)?;
    log::info!(
        "shortcut base set to {} at depth {}",
        config.base_path,
        config.depth
    );
    Ok(config)
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(raw),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}
