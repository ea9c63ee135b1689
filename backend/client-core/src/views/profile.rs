use crate::views::format::format_date;

use models::UserProfile;

const UNKNOWN_USER: &str = "Unknown User";
const DEFAULT_AVATAR: &str = "/default-avatar.png";
const NOT_AVAILABLE: &str = "N/A";

/// Profile card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: String,
    pub email: Option<String>,
    pub picture: String,
    pub created_at: String,
}

impl ProfileView {
    pub fn new(user: &UserProfile, date_format: &str) -> Self {
        Self {
            display_name: non_empty(user.display_name.as_deref())
                .unwrap_or(UNKNOWN_USER)
                .to_string(),
            email: non_empty(user.email.as_deref()).map(str::to_string),
            picture: non_empty(user.picture.as_deref())
                .unwrap_or(DEFAULT_AVATAR)
                .to_string(),
            created_at: non_empty(user.created_at.as_deref())
                .map(|raw| format_date(raw, date_format))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
