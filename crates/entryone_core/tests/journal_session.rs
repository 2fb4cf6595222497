use entryone_core::{
    Category, CategoryFilter, CoverState, JournalService, NavSection, PageView, SectionBody,
};

#[test]
fn session_starts_closed_on_archive_with_no_filters() {
    let session = JournalService::with_builtin_archive();
    let view = session.view();

    assert_eq!(view.cover, CoverState::Closed);
    assert_eq!(view.active_section, NavSection::Archive);
    assert!(view.search_query.is_empty());
    assert_eq!(view.category_filter, CategoryFilter::All);
}

#[test]
fn cover_opens_once_and_stays_open() {
    let mut session = JournalService::with_builtin_archive();

    assert!(session.open_cover());
    assert!(session.view().is_open());

    // Second activation is a no-op; the latch never reverts.
    assert!(!session.open_cover());
    assert!(session.view().is_open());
}

#[test]
fn animated_open_sequences_through_opening() {
    let mut session = JournalService::with_builtin_archive();

    assert!(session.begin_opening());
    assert_eq!(session.view().cover, CoverState::Opening);

    // While the cosmetic delay runs, the page still shows the cover.
    match session.page() {
        PageView::Cover { opening, .. } => assert!(opening),
        PageView::Spread { .. } => panic!("spread must not render mid-animation"),
    }

    // A re-click during the animation does not restart it.
    assert!(!session.begin_opening());

    session.finish_opening();
    assert!(session.view().is_open());
    // finish is idempotent.
    session.finish_opening();
    assert!(session.view().is_open());
}

#[test]
fn visible_entries_follow_filters_and_date_order() {
    let mut session = JournalService::with_builtin_archive();
    session.open_cover();

    session.filter_by_category(Category::Beginning);
    let ids: Vec<&str> = session
        .visible_entries()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    // Beginnings, most recent first.
    assert_eq!(ids, ["4", "2"]);

    session.set_search("customer");
    let ids: Vec<&str> = session
        .visible_entries()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(ids, ["2"]);
}

#[test]
fn section_switch_changes_the_rendered_body() {
    let mut session = JournalService::with_builtin_archive();
    session.open_cover();
    session.set_section(NavSection::Mission);

    match session.page() {
        PageView::Spread {
            active_section,
            body,
            ..
        } => {
            assert_eq!(active_section, NavSection::Mission);
            match body {
                SectionBody::Info(section) => assert_eq!(section.heading, "Our Mission"),
                SectionBody::Archive(_) => panic!("mission section must render static copy"),
            }
        }
        PageView::Cover { .. } => panic!("cover must not render after opening"),
    }
}

#[test]
fn view_state_serializes_as_an_explicit_object() {
    let mut session = JournalService::with_builtin_archive();
    session.open_cover();
    session.set_search("walk");

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["cover"], "open");
    assert_eq!(json["active_section"], "archive");
    assert_eq!(json["search_query"], "walk");
}
