//! Project assignments: the many-to-many link between users and projects.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full assignment record from the database, joined with the project and
/// user names for display.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Assignment {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub project_name: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Assignment {
    pub fn to_info(&self) -> AssignmentInfo {
        AssignmentInfo {
            id: self.id.to_string(),
            project_id: self.project_id.to_string(),
            user_id: self.user_id.to_string(),
            project_name: self.project_name.clone(),
            user_name: self.user_name.clone(),
        }
    }
}

/// Assignment row safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentInfo {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub project_name: String,
    pub user_name: String,
}
