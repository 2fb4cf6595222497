//! Page view models.
//!
//! # Responsibility
//! - Map each entry to a card view model with its decorative artifact frame.
//! - Assemble the full page for the current view state: closed cover, the
//!   archive spread, or one of the static informational sections.
//!
//! # Invariants
//! - The artifact mapping is an exhaustive match over [`ArtifactType`]; a
//!   new artifact variant without a frame fails to compile.
//! - Rendering is pure: same store + view state, same page.

use crate::archive::filter::{filter_entries, sorted_by_date_desc};
use crate::model::entry::{ArtifactType, Entry};
use crate::model::view::{CoverState, NavSection, ViewState};
use crate::store::EntryStore;
use serde::Serialize;

/// Fixed navigation order shown in the sidebar.
pub const NAV_ITEMS: [NavSection; 4] = [
    NavSection::Archive,
    NavSection::About,
    NavSection::Mission,
    NavSection::Contribute,
];

/// Shown in place of the card grid when nothing matches the filters.
pub const EMPTY_STATE_MESSAGE: &str = "No entries match your search.";

/// Decorative frame descriptor for one artifact treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArtifactFrame {
    /// Stylesheet hook, stable across variants.
    pub class_name: &'static str,
    /// Polaroid frames carry a square photo window.
    pub has_photo_window: bool,
    /// Envelope frames carry a wax seal element.
    pub has_seal: bool,
}

/// Maps an artifact treatment to its decorative frame.
pub fn artifact_frame(artifact: ArtifactType) -> ArtifactFrame {
    match artifact {
        ArtifactType::Polaroid => ArtifactFrame {
            class_name: "artifact-polaroid",
            has_photo_window: true,
            has_seal: false,
        },
        ArtifactType::Envelope => ArtifactFrame {
            class_name: "artifact-envelope",
            has_photo_window: false,
            has_seal: true,
        },
        ArtifactType::IndexCard => ArtifactFrame {
            class_name: "artifact-indexcard",
            has_photo_window: false,
            has_seal: false,
        },
    }
}

/// Card view model for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryCard<'s> {
    pub id: &'s str,
    pub title: &'s str,
    pub person_name: &'s str,
    pub role: &'s str,
    /// Uppercase badge text, e.g. `QUIET WIN`.
    pub category_label: String,
    pub frame: ArtifactFrame,
    /// `None` when the entry's link is still the placeholder, so the UI
    /// renders no dead anchor.
    pub link: Option<&'s str>,
}

impl<'s> EntryCard<'s> {
    /// Projects one entry into its card.
    pub fn from_entry(entry: &'s Entry) -> Self {
        Self {
            id: &entry.id,
            title: &entry.title,
            person_name: &entry.person_name,
            role: &entry.role,
            category_label: entry.category.label().to_uppercase(),
            frame: artifact_frame(entry.artifact_or_default()),
            link: if entry.is_link_placeholder() {
                None
            } else {
                Some(entry.external_link.as_str())
            },
        }
    }
}

/// Static informational section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Call-to-action button label, where the section has one.
    pub cta: Option<&'static str>,
}

/// Archive spread: filtered cards or an explicit empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveView<'s> {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub cards: Vec<EntryCard<'s>>,
    /// Set when `cards` is empty so the UI shows an affordance instead of
    /// a blank grid.
    pub empty_message: Option<&'static str>,
}

/// Body of the open journal for the active navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody<'s> {
    Archive(ArchiveView<'s>),
    Info(SectionView),
}

/// The whole page for one view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageView<'s> {
    /// Cover still closed (or mid-animation).
    Cover {
        title: &'static str,
        tagline: &'static str,
        /// True while the open animation is sequencing.
        opening: bool,
    },
    /// Open journal spread.
    Spread {
        nav: [NavSection; 4],
        active_section: NavSection,
        body: SectionBody<'s>,
    },
}

/// Renders the page for the current view state.
///
/// Pure: all inputs are explicit, no I/O, no clock.
pub fn render_page<'s>(store: &'s EntryStore, view: &ViewState) -> PageView<'s> {
    if !view.is_open() {
        return PageView::Cover {
            title: "EntryOne",
            tagline: "A Living Archive of Beginnings",
            opening: view.cover == CoverState::Opening,
        };
    }

    let body = match view.active_section {
        NavSection::Archive => SectionBody::Archive(archive_view(store, view)),
        section => SectionBody::Info(info_section(section)),
    };

    PageView::Spread {
        nav: NAV_ITEMS,
        active_section: view.active_section,
        body,
    }
}

fn archive_view<'s>(store: &'s EntryStore, view: &ViewState) -> ArchiveView<'s> {
    let matches = sorted_by_date_desc(filter_entries(store, view));
    let cards: Vec<EntryCard<'s>> = matches.into_iter().map(EntryCard::from_entry).collect();
    let empty_message = if cards.is_empty() {
        Some(EMPTY_STATE_MESSAGE)
    } else {
        None
    };
    ArchiveView {
        heading: "Archive",
        subheading: "Stories of beginnings, pivots, and quiet wins.",
        cards,
        empty_message,
    }
}

fn info_section(section: NavSection) -> SectionView {
    match section {
        NavSection::About => SectionView {
            heading: "About EntryOne",
            paragraphs: &[
                "EntryOne is a living archive dedicated to capturing the moments \
                 that mark new chapters in people's lives. We believe that every \
                 beginning, no matter how small, deserves to be documented and \
                 celebrated.",
                "Through personal narratives and reflections, we create a tapestry \
                 of human experience, one entry at a time.",
            ],
            cta: None,
        },
        NavSection::Mission => SectionView {
            heading: "Our Mission",
            paragraphs: &[
                "To collect and preserve the stories of beginnings: those pivotal \
                 moments when someone chose to start anew, pivot directions, or \
                 celebrate a quiet personal victory.",
                "We aim to inspire others by showing that every journey starts \
                 with a single, brave step forward.",
            ],
            cta: None,
        },
        NavSection::Contribute => SectionView {
            heading: "Share Your Entry",
            paragraphs: &["Do you have a beginning worth sharing? We'd love to hear \
                 your story and add it to our growing archive of human experience."],
            cta: Some("Submit Your Story"),
        },
        // The archive section is assembled from live data, not static copy.
        NavSection::Archive => SectionView {
            heading: "Archive",
            paragraphs: &[],
            cta: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{artifact_frame, EntryCard, EMPTY_STATE_MESSAGE};
    use crate::model::entry::{ArtifactType, Category, Entry};
    use crate::model::view::ViewState;
    use crate::store::EntryStore;

    #[test]
    fn frames_differ_per_artifact() {
        let polaroid = artifact_frame(ArtifactType::Polaroid);
        assert_eq!(polaroid.class_name, "artifact-polaroid");
        assert!(polaroid.has_photo_window && !polaroid.has_seal);

        let envelope = artifact_frame(ArtifactType::Envelope);
        assert!(envelope.has_seal && !envelope.has_photo_window);

        let card = artifact_frame(ArtifactType::IndexCard);
        assert!(!card.has_seal && !card.has_photo_window);
    }

    #[test]
    fn card_uppercases_badge_and_drops_placeholder_link() {
        let entry = Entry {
            id: "x".to_string(),
            title: "t".to_string(),
            person_name: "p".to_string(),
            role: "r".to_string(),
            category: Category::QuietWin,
            artifact: None,
            external_link: "#".to_string(),
            date: None,
        };
        let card = EntryCard::from_entry(&entry);
        assert_eq!(card.category_label, "QUIET WIN");
        assert_eq!(card.link, None);
        assert_eq!(card.frame.class_name, "artifact-indexcard");
    }

    #[test]
    fn empty_archive_reports_empty_state() {
        let store = EntryStore::new(Vec::new()).unwrap();
        let mut view = ViewState::new();
        view.open();
        let archive = super::archive_view(&store, &view);
        assert!(archive.cards.is_empty());
        assert_eq!(archive.empty_message, Some(EMPTY_STATE_MESSAGE));
    }
}
