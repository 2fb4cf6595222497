//! Pure filter and sort over the entry store.
//!
//! # Responsibility
//! - Select entries matching the session's search text and category filter.
//! - Provide the date-sorted variant of the result.
//!
//! # Invariants
//! - Filtering preserves store order; the result is always a subsequence of
//!   the store.
//! - These functions perform no I/O and are cheap enough to re-run on every
//!   keystroke at archive scale (single- to low-double-digit entries).

use crate::model::entry::Entry;
use crate::model::view::{CategoryFilter, ViewState};
use crate::store::EntryStore;
use std::cmp::Ordering;

/// Selects the entries matching the session's search text and category
/// filter, in store order.
///
/// An entry matches when the category filter is [`CategoryFilter::All`] or
/// equals the entry's category, and the search text (case-insensitive,
/// plain substring, not tokenized) occurs in its title, person name or
/// role. An empty search matches everything. Zero matches yield an empty
/// list, never an error.
pub fn filter_entries<'s>(store: &'s EntryStore, view: &ViewState) -> Vec<&'s Entry> {
    let needle = view.search_query.to_lowercase();
    store
        .entries()
        .iter()
        .filter(|entry| matches_category(entry, view.category_filter))
        .filter(|entry| matches_search(entry, &needle))
        .collect()
}

fn matches_category(entry: &Entry, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => entry.category == category,
    }
}

/// `needle` must already be lowercased.
fn matches_search(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.title.to_lowercase().contains(needle)
        || entry.person_name.to_lowercase().contains(needle)
        || entry.role.to_lowercase().contains(needle)
}

/// Orders a filtered result by date, most recent first.
///
/// Entries without a date sort after all dated entries; relative store
/// order is preserved within every tie (stable sort). Dates are compared
/// lexicographically, which equals chronological order for the validated
/// `YYYY-MM-DD` shape.
pub fn sorted_by_date_desc<'s>(mut matches: Vec<&'s Entry>) -> Vec<&'s Entry> {
    matches.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    matches
}
