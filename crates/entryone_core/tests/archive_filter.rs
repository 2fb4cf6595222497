use entryone_core::{
    filter_entries, sorted_by_date_desc, Category, CategoryFilter, EntryStore, ViewState,
};

fn ids(entries: &[&entryone_core::Entry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.clone()).collect()
}

#[test]
fn no_filters_return_whole_store_in_order() {
    let store = EntryStore::builtin();
    let view = ViewState::new();

    let matches = filter_entries(store, &view);
    assert_eq!(ids(&matches), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn result_is_a_subsequence_preserving_store_order() {
    let store = EntryStore::builtin();
    let mut view = ViewState::new();
    view.search_query = "the".to_string();

    let matches = filter_entries(store, &view);
    assert!(!matches.is_empty());

    let store_ids: Vec<&str> = store
        .entries()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    let mut last_pos = 0;
    for entry in &matches {
        let pos = store_ids
            .iter()
            .position(|id| *id == entry.id)
            .expect("match must come from the store");
        assert!(pos >= last_pos, "store order not preserved");
        last_pos = pos;
    }
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let store = EntryStore::builtin();
    let mut view = ViewState::new();

    view.search_query = "MAYA".to_string();
    assert_eq!(ids(&filter_entries(store, &view)), ["1"]);

    // Role text matches too.
    view.search_query = "ceramicist".to_string();
    assert_eq!(ids(&filter_entries(store, &view)), ["1"]);

    view.search_query = "walk".to_string();
    assert_eq!(ids(&filter_entries(store, &view)), ["3"]);
}

#[test]
fn unmatched_query_yields_empty_result() {
    let store = EntryStore::builtin();
    let mut view = ViewState::new();
    view.search_query = "xyz".to_string();

    assert!(filter_entries(store, &view).is_empty());
}

#[test]
fn category_filter_narrows_and_all_is_identity() {
    let store = EntryStore::builtin();
    let mut view = ViewState::new();

    view.category_filter = CategoryFilter::Only(Category::Pivot);
    assert_eq!(ids(&filter_entries(store, &view)), ["1", "5"]);

    // All + search equals search alone.
    view.search_query = "the".to_string();
    view.category_filter = CategoryFilter::All;
    let all_filtered = ids(&filter_entries(store, &view));
    view.category_filter = CategoryFilter::All;
    view.search_query = "the".to_string();
    assert_eq!(ids(&filter_entries(store, &view)), all_filtered);
}

#[test]
fn search_and_category_combine_with_and_semantics() {
    let store = EntryStore::builtin();
    let mut view = ViewState::new();
    view.search_query = "morning".to_string();
    view.category_filter = CategoryFilter::Only(Category::QuietWin);

    // Both "morning" titles exist, but only entry 6 is a quiet win.
    assert_eq!(ids(&filter_entries(store, &view)), ["6"]);
}

#[test]
fn date_sort_orders_most_recent_first() {
    let store = EntryStore::builtin();
    let view = ViewState::new();

    let sorted = sorted_by_date_desc(filter_entries(store, &view));
    assert_eq!(ids(&sorted), ["6", "5", "4", "3", "2", "1"]);
}
