//! Archive query entry points.
//!
//! # Responsibility
//! - Expose the pure filter/sort pipeline over an entry store.
//! - Keep result shaping deterministic and allocation-light.

pub mod filter;
