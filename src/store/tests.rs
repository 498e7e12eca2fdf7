use tempfile::TempDir;

use super::{JsonFileStore, KeyValueStore, MemoryStore, StoreValue};

#[test]
fn test_memory_store_keeps_insertion_order() -> Result<(), anyhow::Error> {
    let mut store = MemoryStore::new();
    store.set("b", StoreValue::text("1"))?;
    store.set("a", StoreValue::text("2"))?;
    store.set("c", StoreValue::Int(3))?;

    // Overwriting keeps the slot
    store.set("b", StoreValue::text("updated"))?;
    assert_eq!(store.keys()?, vec!["b", "a", "c"]);

    // Deleting closes the gap without reordering the rest
    store.delete("a")?;
    assert_eq!(store.keys()?, vec!["b", "c"]);
    assert_eq!(store.get("b")?, Some(StoreValue::text("updated")));
    Ok(())
}

#[test]
fn test_delete_of_absent_key_is_not_an_error() -> Result<(), anyhow::Error> {
    let mut store = MemoryStore::new();
    store.delete("never-there")?;
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn test_snapshot_pairs_keys_with_values() -> Result<(), anyhow::Error> {
    let store = MemoryStore::from_pairs([
        ("PlacesOrder0", StoreValue::text("C:\\A")),
        ("Google Drive Depth", StoreValue::Int(2)),
    ]);
    let snapshot = store.snapshot()?;
    assert_eq!(
        snapshot,
        vec![
            ("PlacesOrder0".to_string(), StoreValue::text("C:\\A")),
            ("Google Drive Depth".to_string(), StoreValue::Int(2)),
        ]
    );
    Ok(())
}

#[test]
fn test_store_value_json_shape() -> Result<(), anyhow::Error> {
    let values: Vec<StoreValue> = serde_json::from_str(r#"[3, "three", ""]"#)?;
    assert_eq!(
        values,
        vec![StoreValue::Int(3), StoreValue::text("three"), StoreValue::text("")]
    );
    assert_eq!(values[0].as_int(), Some(3));
    assert_eq!(values[0].as_text(), None);
    assert_eq!(values[1].as_text(), Some("three"));
    Ok(())
}

#[test]
fn test_file_store_missing_file_is_empty() -> Result<(), anyhow::Error> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("profile").join("dialogs.json");

    let store = JsonFileStore::open(&path)?;
    assert!(store.keys()?.is_empty());
    // Opening never creates the file
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_file_store_persists_across_reopen() -> Result<(), anyhow::Error> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("profile").join("dialogs.json");

    {
        let mut store = JsonFileStore::open(&path)?;
        store.set("PlacesOrder0", StoreValue::text("D:\\X"))?;
        store.set("Google Drive Depth", StoreValue::Int(2))?;
        store.set("PlacesOrder0Display", StoreValue::text("Google Drive"))?;
        store.delete("Google Drive Depth")?;
    }

    let reopened = JsonFileStore::open(&path)?;
    assert_eq!(reopened.keys()?, vec!["PlacesOrder0", "PlacesOrder0Display"]);
    assert_eq!(
        reopened.get("PlacesOrder0Display")?,
        Some(StoreValue::text("Google Drive"))
    );
    assert!(!path.with_extension("tmp.part").exists());
    Ok(())
}

#[test]
fn test_file_store_rejects_garbage() -> Result<(), anyhow::Error> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dialogs.json");
    std::fs::write(&path, "not json")?;

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, crate::error::Error::StoreRead(_)), "{err}");
    Ok(())
}

#[test]
fn test_file_store_failed_write_leaves_memory_unchanged() -> Result<(), anyhow::Error> {
    let temp_dir = TempDir::new()?;
    // A regular file where the store's folder should be
    let blocker = temp_dir.path().join("profile");
    std::fs::write(&blocker, "")?;
    let mut store = JsonFileStore::open(blocker.join("dialogs.json"))?;

    let err = store.set("PlacesOrder0", StoreValue::text("C:\\Drive")).unwrap_err();
    assert!(matches!(err, crate::error::Error::StoreWrite { .. }), "{err}");
    assert_eq!(store.get("PlacesOrder0")?, None);
    assert!(store.keys()?.is_empty());
    Ok(())
}

#[test]
fn test_file_store_failed_delete_keeps_the_key() -> Result<(), anyhow::Error> {
    let temp_dir = TempDir::new()?;
    let folder = temp_dir.path().join("profile");
    let path = folder.join("dialogs.json");
    let mut store = JsonFileStore::open(&path)?;
    store.set("PlacesOrder0", StoreValue::text("C:\\Drive"))?;

    std::fs::remove_dir_all(&folder)?;
    std::fs::write(&folder, "")?;

    let err = store.delete("PlacesOrder0").unwrap_err();
    assert!(matches!(err, crate::error::Error::StoreWrite { .. }), "{err}");
    assert_eq!(store.get("PlacesOrder0")?, Some(StoreValue::text("C:\\Drive")));
    Ok(())
}
