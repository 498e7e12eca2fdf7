use serde::Serialize;

/// One row of the dialog's places sidebar, rebuilt from three sibling keys.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaceEntry {
    pub position: u32,
    pub path: String,  // ex: "G:\\My Drive\\Acme\\Job42"
    pub display: String, // ex: "Google Drive"
    pub extension: String,
}

impl PlaceEntry {
    pub fn new(position: u32, path: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            position,
            path: path.into(),
            display: display.into(),
            extension: String::new(),
        }
    }
}

/// Why a places key was left out of the repaired list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The value under `key` was an integer where text was expected.
    NotText { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropped {
    pub source_position: u32,
    pub reason: DropReason,
}
