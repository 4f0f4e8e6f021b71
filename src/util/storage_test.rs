use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::with_entries([("token", "t")]);
    store.remove("name");
    assert_eq!(store.len(), 1);
}

#[test]
fn reference_delegates_to_store() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("name", "Ann").unwrap();
    assert_eq!(store.get("name").as_deref(), Some("Ann"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_unavailable_outside_browser() {
    let store = BrowserStore;
    assert_eq!(store.get("token"), None);
    assert_eq!(store.set("token", "t"), Err(StorageError::Unavailable));
}
