//! Immutable entry store.
//!
//! # Responsibility
//! - Hold the ordered archive of entries behind a read-only API.
//! - Enforce record validation and id uniqueness at construction.
//!
//! # Invariants
//! - A constructed store never changes; there is no runtime write path.
//! - Store order is the authoritative relative order for filter results.

use crate::model::entry::{ArtifactType, Category, Entry, EntryValidationError};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction failure for an entry store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Entry at `index` failed record validation.
    Validation {
        index: usize,
        source: EntryValidationError,
    },
    /// Two entries share the same id.
    DuplicateId(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { index, source } => {
                write!(f, "invalid entry at position {index}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate entry id `{id}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

/// Ordered, immutable archive of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Builds a store, validating every record and rejecting duplicate ids.
    pub fn new(entries: Vec<Entry>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            entry
                .validate()
                .map_err(|source| StoreError::Validation { index, source })?;
            if !seen.insert(entry.id.clone()) {
                return Err(StoreError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the built-in EntryOne archive.
    pub fn builtin() -> &'static EntryStore {
        &BUILTIN
    }

    /// Entries in store order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks one entry up by stable id.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN: Lazy<EntryStore> =
    Lazy::new(|| EntryStore::new(builtin_entries()).expect("built-in archive entries are valid"));

fn builtin_entry(
    id: &str,
    title: &str,
    person_name: &str,
    role: &str,
    category: Category,
    artifact: ArtifactType,
    external_link: &str,
    date: &str,
) -> Entry {
    Entry {
        id: id.to_string(),
        title: title.to_string(),
        person_name: person_name.to_string(),
        role: role.to_string(),
        category,
        artifact: Some(artifact),
        external_link: external_link.to_string(),
        date: Some(date.to_string()),
    }
}

fn builtin_entries() -> Vec<Entry> {
    vec![
        builtin_entry(
            "1",
            "The Morning I Decided to Start Over",
            "Maya Richardson",
            "Former Accountant, Now Ceramicist",
            Category::Pivot,
            ArtifactType::Polaroid,
            "https://notion.so/entry-1",
            "2024-01-15",
        ),
        builtin_entry(
            "2",
            "When the First Customer Said Yes",
            "James Okonkwo",
            "Founder, Greenleaf Provisions",
            Category::Beginning,
            ArtifactType::Envelope,
            "https://notion.so/entry-2",
            "2024-02-08",
        ),
        builtin_entry(
            "3",
            "Learning to Walk Again",
            "Sofia Andersson",
            "Marathon Runner & Physical Therapist",
            Category::QuietWin,
            ArtifactType::IndexCard,
            "https://notion.so/entry-3",
            "2024-02-22",
        ),
        builtin_entry(
            "4",
            "The Day I Pressed Publish",
            "Ethan Park",
            "Writer & Newsletter Creator",
            Category::Beginning,
            ArtifactType::Polaroid,
            "https://notion.so/entry-4",
            "2024-03-05",
        ),
        builtin_entry(
            "5",
            "Closing the Shop, Opening the Studio",
            "Clara Mendez",
            "Former Retail Owner, Artist",
            Category::Pivot,
            ArtifactType::Envelope,
            "https://notion.so/entry-5",
            "2024-03-18",
        ),
        builtin_entry(
            "6",
            "The Quiet Morning Before Everything Changed",
            "David Walsh",
            "Teacher & Community Organizer",
            Category::QuietWin,
            ArtifactType::IndexCard,
            "https://notion.so/entry-6",
            "2024-04-02",
        ),
    ]
}
