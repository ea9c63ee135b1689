use serde::{Deserialize, Serialize};

/// Profile returned by `GET /api/auth/getUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Name used in greetings: display name, then name, then email.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("there")
    }
}
