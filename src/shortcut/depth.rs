use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use crate::error::{Error, Result};

/// Joins onto `base` the names of the `depth` folders enclosing `document`,
/// outermost first. With `depth` 0 the base is returned as is. `.` and `..`
/// in `document` are folded away before walking.
///
/// `C:\Shortcuts`, `C:\Projects\Acme\Job42\drawing.dwg`, 2 gives
/// `C:\Shortcuts\Acme\Job42`.
pub fn resolve_target_dir(base: &str, document: &Path, depth: u32) -> Result<PathBuf> {
    if base.trim().is_empty() {
        return Err(Error::InvalidPath("base path is empty".to_string()));
    }
    if !document.is_absolute() {
        return Err(Error::InvalidPath(format!(
            "document path is not absolute: {}",
            document.display()
        )));
    }

    let normalized = normalize(document);
    let mut current = normalized.parent().ok_or_else(|| {
        Error::InvalidPath(format!("document has no folder: {}", document.display()))
    })?;
    // Grows only as far as real ancestors go; `depth` is user input
    let mut names = Vec::new();
    for _ in 0..depth {
        let name = current.file_name().ok_or_else(|| {
            Error::InvalidPath(format!(
                "depth {} climbs past the root of {}",
                depth,
                document.display()
            ))
        })?;
        names.push(name);
        current = current.parent().unwrap_or(current);
    }

    let mut target = PathBuf::from(base);
    for name in names.into_iter().rev() {
        target.push(name);
    }
    Ok(target)
}

/// Lexically drops `.` and resolves `..` against the preceding folder.
/// `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

pub fn ensure_target_dir(target: &Path) -> Result<()> {
    if !target.exists() {
        log::debug!("creating {}", target.display());
        fs::create_dir_all(target)?;
    }
    Ok(())
}
