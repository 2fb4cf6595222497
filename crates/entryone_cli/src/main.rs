//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `entryone_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use entryone_core::{JournalService, PageView, SectionBody};

fn main() {
    // Why: a tiny probe validates core wiring without any UI shell attached.
    println!("entryone_core version={}", entryone_core::core_version());

    let mut session = JournalService::with_builtin_archive();
    session.open_cover();

    if let PageView::Spread { body, .. } = session.page() {
        if let SectionBody::Archive(archive) = body {
            println!("{} — {}", archive.heading, archive.subheading);
            for card in &archive.cards {
                println!(
                    "[{}] {} — {} ({})",
                    card.category_label, card.title, card.person_name, card.role
                );
            }
            if let Some(message) = archive.empty_message {
                println!("{message}");
            }
        }
    }
}
