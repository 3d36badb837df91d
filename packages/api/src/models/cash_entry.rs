//! Petty cash funding entries.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full funding entry record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct CashEntry {
    pub id: Uuid,
    pub project_id: Uuid,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl CashEntry {
    pub fn to_info(&self) -> CashEntryInfo {
        CashEntryInfo {
            id: self.id.to_string(),
            project_id: self.project_id.to_string(),
            amount: self.amount,
            created_at: self.created_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

/// Funding entry safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashEntryInfo {
    pub id: String,
    pub project_id: String,
    pub amount: f64,
    pub created_at: String,
}
