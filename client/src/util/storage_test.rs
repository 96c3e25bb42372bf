use super::*;

#[test]
fn memory_storage_set_then_get() {
    let mut store = MemoryStorage::new();
    store.set("token", "abc");
    assert_eq!(store.get("token"), Some("abc".to_owned()));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_set_overwrites() {
    let mut store = MemoryStorage::new();
    store.set("username", "alice");
    store.set("username", "bob");
    assert_eq!(store.get("username"), Some("bob".to_owned()));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let mut store = MemoryStorage::new();
    store.remove("token");
    assert!(store.is_empty());
}

#[test]
fn memory_storage_remove_clears_value() {
    let mut store = MemoryStorage::new();
    store.set("token", "abc");
    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_outside_browser() {
    let mut store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
