//! Presentation mapping from domain records to view models.
//!
//! # Responsibility
//! - Shape entries and view state into the structures a UI layer renders.
//! - Keep all copy and artifact-frame decisions inside core so every
//!   front end shows the same page.

pub mod page;
