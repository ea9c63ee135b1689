use crate::views::navigation::{Page, Route, guard};

#[test]
fn given_known_paths_when_parsed_then_map_to_routes() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path(""), Route::Home);
    assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
    assert_eq!(Route::from_path("/overall/"), Route::Overall);
    assert_eq!(Route::from_path("/analytics?range=7d"), Route::Analytics);
    assert_eq!(Route::from_path("/auth"), Route::NotFound);
}

/// **VALUE**: Verifies dashboard routes bounce signed-out users home.
///
/// **WHY THIS MATTERS**: Rendering the dashboard without a session would issue API calls with
/// no token and show an empty, misleading page.
#[test]
fn given_no_session_when_guarding_dashboard_routes_then_redirects_home() {
    // GIVEN/WHEN/THEN: Each protected route lands on Home
    for route in [Route::Dashboard, Route::Overall, Route::Analytics] {
        assert_eq!(guard(route, false), Route::Home, "{route:?}");
    }
    assert_eq!(guard(Route::NotFound, false), Route::NotFound);
}

#[test]
fn given_session_when_guarding_home_then_goes_to_dashboard() {
    assert_eq!(guard(Route::Home, true), Route::Dashboard);
    assert_eq!(guard(Route::Analytics, true), Route::Analytics);
}

#[test]
fn given_pages_when_cycling_then_wraps_both_directions() {
    assert_eq!(Page::Profile.next(), Page::Dashboard);
    assert_eq!(Page::Dashboard.previous(), Page::Profile);
    assert_eq!(Page::Analytics.next(), Page::Reports);

    let titles: Vec<_> = Page::ALL.iter().map(Page::title).collect();
    assert_eq!(titles, ["Dashboard", "Analytics", "Reports", "Profile"]);
}

#[test]
fn given_routes_when_mapped_to_pages_then_overall_opens_dashboard() {
    assert_eq!(Route::Overall.page(), Some(Page::Dashboard));
    assert_eq!(Route::Analytics.page(), Some(Page::Analytics));
    assert_eq!(Route::Home.page(), None);
}
