use crate::tui::app::{Focus, next_option};

fn options() -> Vec<String> {
    vec!["news".to_string(), "tech".to_string()]
}

/// **VALUE**: Verifies the selector cycle: All, each option, back to All.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one that skips the first option or never
/// returns to "All".
#[test]
fn given_options_when_cycling_then_wraps_through_all() {
    // GIVEN: Two options
    let options = options();

    // WHEN/THEN: Stepping from All
    assert_eq!(next_option(&options, None).as_deref(), Some("news"));
    assert_eq!(next_option(&options, Some("news")).as_deref(), Some("tech"));
    assert_eq!(next_option(&options, Some("tech")), None);
}

#[test]
fn given_stale_selection_when_cycling_then_returns_to_all() {
    assert_eq!(next_option(&options(), Some("gone")), None);
    assert_eq!(next_option(&[], None), None);
}

#[test]
fn given_focus_when_tabbing_then_visits_fields_then_table() {
    let mut focus = Focus::LongUrl;
    let mut visited = vec![focus];
    for _ in 0..4 {
        focus = focus.next();
        visited.push(focus);
    }

    assert_eq!(
        visited,
        [
            Focus::LongUrl,
            Focus::CustomAlias,
            Focus::Topic,
            Focus::Table,
            Focus::LongUrl
        ]
    );
    assert_eq!(Focus::LongUrl.previous(), Focus::Table);
    assert!(!Focus::Table.is_text_field());
}
