use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user account joined onto an owner row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerAccount {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Property owner as listed on the admin owners page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminOwner {
    pub id: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub properties_count: i64,
    pub user: OwnerAccount,
}
