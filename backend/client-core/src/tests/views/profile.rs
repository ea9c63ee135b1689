use crate::views::ProfileView;
use crate::views::format::DEFAULT_DATE_FORMAT;

use models::UserProfile;

#[test]
fn given_full_profile_when_viewed_then_formats_created_date() {
    let user = UserProfile {
        display_name: Some("Ada Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        picture: Some("https://img.example/ada.png".to_string()),
        created_at: Some("2024-12-10T08:30:00.000Z".to_string()),
        ..UserProfile::default()
    };

    let view = ProfileView::new(&user, DEFAULT_DATE_FORMAT);

    assert_eq!(view.display_name, "Ada Lovelace");
    assert_eq!(view.picture, "https://img.example/ada.png");
    assert_eq!(view.created_at, "2024-12-10");
}

/// **VALUE**: Verifies the profile card's placeholders for missing fields.
///
/// **WHY THIS MATTERS**: Google accounts without a display name or picture are common; the
/// card must still render instead of showing empty strings.
#[test]
fn given_empty_profile_when_viewed_then_uses_placeholders() {
    // GIVEN: A profile with blank fields
    let user = UserProfile {
        display_name: Some("  ".to_string()),
        ..UserProfile::default()
    };

    // WHEN: Building the view
    let view = ProfileView::new(&user, DEFAULT_DATE_FORMAT);

    // THEN: Placeholders
    assert_eq!(view.display_name, "Unknown User");
    assert_eq!(view.picture, "/default-avatar.png");
    assert_eq!(view.created_at, "N/A");
    assert_eq!(view.email, None);
}
