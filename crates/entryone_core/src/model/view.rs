//! Per-session view state and theme preference value.
//!
//! # Responsibility
//! - Hold the ephemeral UI selections for one page session as an explicit,
//!   serializable value (no ambient singletons).
//! - Model the one-way journal-cover latch.
//!
//! # Invariants
//! - `cover` only ever advances `Closed -> Opening -> Open`; it never
//!   reverts within a session.
//! - A fresh session starts closed, on the Archive section, with an empty
//!   search and no category filter.

use crate::model::entry::Category;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Journal-cover latch state.
///
/// `Opening` exists only to sequence the cosmetic open animation; core never
/// schedules the delay itself. Callers that skip the animation jump straight
/// to `Open` via [`ViewState::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverState {
    Closed,
    Opening,
    Open,
}

/// Fixed navigation sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Archive,
    About,
    Mission,
    Contribute,
}

impl NavSection {
    /// Navigation label as rendered in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::About => "About",
            Self::Mission => "Mission",
            Self::Contribute => "Contribute",
        }
    }
}

/// Category filter selection: everything, or one closed category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::All
    }
}

/// Ephemeral UI selections for one page session.
///
/// One value per active session, reset on reload, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Correlation id for log events; no other component depends on it.
    pub session_id: Uuid,
    pub cover: CoverState,
    pub active_section: NavSection,
    pub search_query: String,
    pub category_filter: CategoryFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Starts a fresh session: cover closed, Archive active, no filters.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            cover: CoverState::Closed,
            active_section: NavSection::Archive,
            search_query: String::new(),
            category_filter: CategoryFilter::All,
        }
    }

    /// Begins the animated cover transition.
    ///
    /// Returns `true` only when the cover was still closed; once the latch
    /// has advanced, further activations are no-ops.
    pub fn begin_opening(&mut self) -> bool {
        if self.cover == CoverState::Closed {
            self.cover = CoverState::Opening;
            return true;
        }
        false
    }

    /// Completes the animated transition. Idempotent from `Open`.
    pub fn finish_opening(&mut self) {
        if self.cover == CoverState::Opening {
            self.cover = CoverState::Open;
        }
    }

    /// Opens the cover immediately (the no-animation variant).
    ///
    /// Returns whether a transition happened.
    pub fn open(&mut self) -> bool {
        if self.cover == CoverState::Open {
            return false;
        }
        self.cover = CoverState::Open;
        true
    }

    /// Returns whether the archive spread is visible.
    pub fn is_open(&self) -> bool {
        self.cover == CoverState::Open
    }
}

/// Cross-session presentation theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted wire value for the preference slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted value; unknown text yields `None` so callers can
    /// apply the default-to-light fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
