use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SESSION_COOKIE_NAME: &str = "fieldops_session";

/// The role string that selects the admin dashboard. Any other value is a
/// field representative.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// The current session's user, as returned by the current-user endpoint.
/// Absence of the whole record means logged out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
}
