use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Owner,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Owner => "OWNER",
            UserRole::Admin => "ADMIN",
        }
    }
}

/// Platform account as the admin endpoints expose it, counters included.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub roles: Vec<UserRole>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    /// Non-null marks the account soft-deleted; it can be restored.
    pub deleted_at: Option<DateTime<Utc>>,

    pub is_owner: bool,
    pub properties_count: i64,
    pub leads_count: i64,
}

impl AdminUser {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_use_the_wire_spelling() {
        assert_eq!(
            serde_json::to_value(UserRole::Owner).expect("serializes"),
            serde_json::json!("OWNER")
        );
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
    }
}
