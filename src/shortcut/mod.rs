use crate::{
    error::{Error, Result},
    store::{KeyValueStore, StoreValue},
};

pub mod depth;
pub mod setup;


pub use depth::{ensure_target_dir, resolve_target_dir};
pub use setup::configure;

pub const BASE_PATH_KEY: &str = "Google Drive";
pub const DEPTH_KEY: &str = "Google Drive Depth";

/// Where shortcuts point: `base_path` plus the names of the `depth` nearest
/// folders around the active drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutConfig {
    pub base_path: String,
    pub depth: u32,
}

impl ShortcutConfig {
    pub fn new(base_path: impl Into<String>, depth: u32) -> Self {
        Self {
            base_path: base_path.into(),
            depth,
        }
    }

    /// `None` until setup has stored both keys.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        let (Some(base), Some(depth)) = (store.get(BASE_PATH_KEY)?, store.get(DEPTH_KEY)?) else {
            return Ok(None);
        };
        let base_path = base
            .as_text()
            .ok_or_else(|| Error::InvalidPath(format!("{BASE_PATH_KEY} is not text")))?
            .to_string();
        let depth = match depth.as_int() {
            Some(n) => u32::try_from(n).map_err(|_| Error::InvalidDepth(n.to_string()))?,
            None => {
                let raw = depth.as_text().unwrap_or_default();
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| Error::InvalidDepth(raw.to_string()))?
            }
        };
        Ok(Some(Self { base_path, depth }))
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.set(BASE_PATH_KEY, StoreValue::text(&self.base_path))?;
        store.set(DEPTH_KEY, StoreValue::Int(i64::from(self.depth)))?;
        Ok(())
    }
}
