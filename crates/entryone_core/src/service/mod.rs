//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, view state and rendering into session-level APIs.
//! - Keep UI layers decoupled from filter and view-model details.

pub mod journal_service;
