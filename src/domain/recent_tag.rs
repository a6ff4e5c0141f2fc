//! Recent Tag Usage
//!
//! Last time a user attached a tag, one record per (user, tag key).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecentTag {
    pub user_id: UserId,
    pub tag_key: String,
    pub last_used_at: DateTime<Utc>,
}
