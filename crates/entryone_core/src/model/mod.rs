//! Domain model for the journal archive.
//!
//! # Responsibility
//! - Define the canonical entry record and its closed classification enums.
//! - Define the ephemeral per-session view state and theme preference value.
//!
//! # Invariants
//! - Every entry carries a non-empty `id` that is unique within a store.
//! - `Category` and `ArtifactType` are closed sum types; no open-ended
//!   string tags reach the filter or mapping layers.

pub mod entry;
pub mod view;
