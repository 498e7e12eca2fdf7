use once_cell::sync::Lazy;
use regex::Regex;

/// Literal every places-list key starts with.
pub const KEY_PREFIX: &str = "PlacesOrder";

static PLACE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PlacesOrder(0|[1-9][0-9]*)(Display|Ext)?$").expect("valid place key pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceField {
    Path,
    Display,
    Ext,
}

impl PlaceField {
    fn suffix(self) -> &'static str {
        match self {
            PlaceField::Path => "",
            PlaceField::Display => "Display",
            PlaceField::Ext => "Ext",
        }
    }
}

/// A decoded places-list key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceKey {
    pub position: u32,
    pub field: PlaceField,
}

impl PlaceKey {
    pub fn new(position: u32, field: PlaceField) -> Self {
        Self { position, field }
    }

    pub fn encode(&self) -> String {
        encode(self.position, self.field)
    }
}

pub fn encode(position: u32, field: PlaceField) -> String {
    format!("{KEY_PREFIX}{position}{}", field.suffix())
}

/// Recognizes a key of the places family. Anything else, including keys
/// with leading zeros or trailing text after the suffix, is `None`.
pub fn decode(key: &str) -> Option<PlaceKey> {
    let caps = PLACE_KEY.captures(key)?;
    let position = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let field = match caps.get(2).map(|m| m.as_str()) {
        None => PlaceField::Path,
        Some("Display") => PlaceField::Display,
        Some("Ext") => PlaceField::Ext,
        Some(_) => return None,
    };
    Some(PlaceKey { position, field })
}

pub fn is_place_key(key: &str) -> bool {
    decode(key).is_some()
}
