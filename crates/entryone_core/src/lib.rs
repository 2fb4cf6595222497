//! Core domain logic for the EntryOne journal archive.
//! This crate is the single source of truth for filter, presentation and
//! preference invariants; UI shells render what it hands them.

pub mod archive;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod render;
pub mod service;
pub mod store;

pub use archive::filter::{filter_entries, sorted_by_date_desc};
pub use logging::{default_log_level, init_logging};
pub use model::entry::{ArtifactType, Category, Entry, EntryValidationError};
pub use model::view::{CategoryFilter, CoverState, NavSection, Theme, ViewState};
pub use prefs::{
    open_prefs_db, open_prefs_db_in_memory, PrefsError, PrefsResult, SqliteThemeRepository,
    ThemeRepository,
};
pub use render::page::{
    artifact_frame, render_page, ArchiveView, ArtifactFrame, EntryCard, PageView, SectionBody,
    SectionView, EMPTY_STATE_MESSAGE, NAV_ITEMS,
};
pub use service::journal_service::JournalService;
pub use store::{EntryStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
