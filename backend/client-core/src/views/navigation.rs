//! Routes and sidebar pages of the dashboard.

use serde::{Deserialize, Serialize};

/// Top-level locations, mirroring the web dashboard's paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Overall,
    Analytics,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/dashboard" => Route::Dashboard,
            "/overall" => Route::Overall,
            "/analytics" => Route::Analytics,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Overall => "/overall",
            Route::Analytics => "/analytics",
            Route::NotFound => "/404",
        }
    }

    /// Whether the route shows user data and therefore needs a session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Overall | Route::Analytics)
    }

    /// Sidebar page a route opens on.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Dashboard | Route::Overall => Some(Page::Dashboard),
            Route::Analytics => Some(Page::Analytics),
            Route::Home | Route::NotFound => None,
        }
    }
}

/// Resolve where a navigation actually lands.
///
/// Signed-out users are sent home from any dashboard route; a signed-in user
/// landing on home goes straight to the dashboard.
pub fn guard(route: Route, has_session: bool) -> Route {
    match route {
        r if r.requires_session() && !has_session => Route::Home,
        Route::Home if has_session => Route::Dashboard,
        r => r,
    }
}

/// Sidebar entries of the signed-in dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Dashboard,
    Analytics,
    Reports,
    Profile,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Analytics, Page::Reports, Page::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Analytics => "Analytics",
            Page::Reports => "Reports",
            Page::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Analytics => 1,
            Page::Reports => 2,
            Page::Profile => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
