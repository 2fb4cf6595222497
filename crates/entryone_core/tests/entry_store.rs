use entryone_core::{Category, Entry, EntryStore, StoreError};

fn entry(id: &str) -> Entry {
    Entry {
        id: id.to_string(),
        title: "title".to_string(),
        person_name: "person".to_string(),
        role: String::new(),
        category: Category::Beginning,
        artifact: None,
        external_link: String::new(),
        date: None,
    }
}

#[test]
fn builtin_store_holds_six_valid_entries() {
    let store = EntryStore::builtin();
    assert_eq!(store.len(), 6);

    let maya = store.get("1").unwrap();
    assert_eq!(maya.person_name, "Maya Richardson");
    assert_eq!(maya.category, Category::Pivot);

    // Every built-in entry carries a usable date for the sort variant.
    assert!(store.entries().iter().all(|entry| entry.date.is_some()));
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = EntryStore::new(vec![entry("1"), entry("2"), entry("1")]).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId("1".to_string()));
}

#[test]
fn new_reports_position_of_invalid_entry() {
    let mut bad = entry("2");
    bad.title = String::new();
    let err = EntryStore::new(vec![entry("1"), bad]).unwrap_err();
    match err {
        StoreError::Validation { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn get_finds_entries_by_id() {
    let store = EntryStore::new(vec![entry("a"), entry("b")]).unwrap();
    assert!(store.get("b").is_some());
    assert!(store.get("z").is_none());
}
