//! Entry domain model.
//!
//! # Responsibility
//! - Define the archived-story record shown as a card in the journal.
//! - Provide construction-time validation for id, titles and date shape.
//!
//! # Invariants
//! - `id` is stable, non-empty, and unique within an [`crate::store::EntryStore`].
//! - `category` and `artifact` are members of closed enumerations.
//! - `date`, when present, always matches the `YYYY-MM-DD` shape, so ISO
//!   lexicographic order equals chronological order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Closed classification tag attached to every entry.
///
/// Used both for filtering and for the uppercase badge label on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A first step: founding something, publishing, starting anew.
    Beginning,
    /// A deliberate change of direction mid-journey.
    Pivot,
    /// A small personal victory with no audience.
    QuietWin,
}

impl Category {
    /// Human badge text as rendered on the card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginning => "Beginning",
            Self::Pivot => "Pivot",
            Self::QuietWin => "Quiet Win",
        }
    }

    /// All categories in badge display order.
    pub fn all() -> [Category; 3] {
        [Self::Beginning, Self::Pivot, Self::QuietWin]
    }
}

/// Decorative visual treatment chosen for an entry's card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    /// Square photo frame with a caption strip.
    Polaroid,
    /// Sealed letter envelope.
    Envelope,
    /// Plain ruled index card.
    IndexCard,
}

/// One archived personal-story record.
///
/// Entries are defined statically and never mutated after store
/// construction; changing the archive means shipping a new seed, not a
/// runtime write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier, unique within a store.
    pub id: String,
    /// Entry headline.
    pub title: String,
    /// Name of the person whose story this is.
    pub person_name: String,
    /// Their role or context, free text.
    pub role: String,
    /// Closed classification tag.
    pub category: Category,
    /// Card treatment; `None` means "derive from category".
    pub artifact: Option<ArtifactType>,
    /// Opaque URL to the externally hosted full story. Empty or `"#"`
    /// signifies "not yet available".
    pub external_link: String,
    /// ISO `YYYY-MM-DD` date, used only for sort ordering when present.
    pub date: Option<String>,
}

/// Validation failure for a single entry record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyId,
    EmptyTitle { id: String },
    EmptyPersonName { id: String },
    /// `date` is present but does not match the `YYYY-MM-DD` shape.
    InvalidDate { id: String, value: String },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "entry id must not be empty"),
            Self::EmptyTitle { id } => write!(f, "entry `{id}` has an empty title"),
            Self::EmptyPersonName { id } => {
                write!(f, "entry `{id}` has an empty person name")
            }
            Self::InvalidDate { id, value } => write!(
                f,
                "entry `{id}` has date `{value}`; expected YYYY-MM-DD"
            ),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Checks the construction-time invariants of this record.
    ///
    /// # Errors
    /// - [`EntryValidationError::EmptyId`] for a blank `id`.
    /// - [`EntryValidationError::EmptyTitle`] / [`EntryValidationError::EmptyPersonName`]
    ///   for blank display fields.
    /// - [`EntryValidationError::InvalidDate`] when `date` is present but not
    ///   shaped `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.trim().is_empty() {
            return Err(EntryValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        if self.person_name.trim().is_empty() {
            return Err(EntryValidationError::EmptyPersonName {
                id: self.id.clone(),
            });
        }
        if let Some(date) = &self.date {
            if !ISO_DATE_RE.is_match(date) {
                return Err(EntryValidationError::InvalidDate {
                    id: self.id.clone(),
                    value: date.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolves the card treatment, falling back to a category-derived
    /// default when the entry does not pin one.
    pub fn artifact_or_default(&self) -> ArtifactType {
        self.artifact.unwrap_or(match self.category {
            Category::Beginning => ArtifactType::Envelope,
            Category::Pivot => ArtifactType::Polaroid,
            Category::QuietWin => ArtifactType::IndexCard,
        })
    }

    /// Returns whether `external_link` is the "not yet available" placeholder.
    pub fn is_link_placeholder(&self) -> bool {
        let link = self.external_link.trim();
        link.is_empty() || link == "#"
    }
}
