//! Journal session use-case service.
//!
//! # Responsibility
//! - Own one entry store and one view state for the lifetime of a session.
//! - Provide the mutation and query entry points a UI layer calls.
//!
//! # Invariants
//! - The store is never mutated through this service; only view state moves.
//! - Every query re-evaluates the filter synchronously; nothing is cached.

use crate::archive::filter::{filter_entries, sorted_by_date_desc};
use crate::model::entry::{Category, Entry};
use crate::model::view::{CategoryFilter, NavSection, ViewState};
use crate::render::page::{render_page, PageView};
use crate::store::EntryStore;
use log::{debug, info};

/// Session facade over one store and one view state.
pub struct JournalService {
    store: EntryStore,
    view: ViewState,
}

impl JournalService {
    /// Starts a fresh session over the given archive.
    pub fn new(store: EntryStore) -> Self {
        let view = ViewState::new();
        info!(
            "event=session_start module=service status=ok session={} entries={}",
            view.session_id,
            store.len()
        );
        Self { store, view }
    }

    /// Starts a fresh session over the built-in archive.
    pub fn with_builtin_archive() -> Self {
        Self::new(EntryStore::builtin().clone())
    }

    /// Opens the journal cover immediately, skipping the animation.
    ///
    /// Returns whether a transition happened; the latch is one-way, so any
    /// call after the first is a no-op.
    pub fn open_cover(&mut self) -> bool {
        let opened = self.view.open();
        if opened {
            info!(
                "event=cover_opened module=service status=ok session={} animated=false",
                self.view.session_id
            );
        }
        opened
    }

    /// Begins the animated cover transition. The caller owns the cosmetic
    /// delay and calls [`JournalService::finish_opening`] when it elapses;
    /// an abandoned delay (navigation away) simply leaves the latch
    /// mid-transition with no correctness consequence.
    pub fn begin_opening(&mut self) -> bool {
        let started = self.view.begin_opening();
        if started {
            info!(
                "event=cover_opening module=service status=ok session={}",
                self.view.session_id
            );
        }
        started
    }

    /// Completes the animated cover transition.
    pub fn finish_opening(&mut self) {
        let was_open = self.view.is_open();
        self.view.finish_opening();
        if !was_open && self.view.is_open() {
            info!(
                "event=cover_opened module=service status=ok session={} animated=true",
                self.view.session_id
            );
        }
    }

    /// Switches the active navigation section.
    pub fn set_section(&mut self, section: NavSection) {
        self.view.active_section = section;
        debug!(
            "event=section_changed module=service session={} section={}",
            self.view.session_id,
            section.label()
        );
    }

    /// Replaces the search text (called on every keystroke).
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
    }

    /// Replaces the category filter selection.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.view.category_filter = filter;
    }

    /// Convenience for UI controls that select one category.
    pub fn filter_by_category(&mut self, category: Category) {
        self.set_category_filter(CategoryFilter::Only(category));
    }

    /// Entries matching the current filters, most recent first.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        let matches = sorted_by_date_desc(filter_entries(&self.store, &self.view));
        debug!(
            "event=archive_filter module=service session={} query_len={} matches={}",
            self.view.session_id,
            self.view.search_query.len(),
            matches.len()
        );
        matches
    }

    /// Renders the full page for the current view state.
    pub fn page(&self) -> PageView<'_> {
        render_page(&self.store, &self.view)
    }

    /// Read access to the session's view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Read access to the session's archive.
    pub fn store(&self) -> &EntryStore {
        &self.store
    }
}
