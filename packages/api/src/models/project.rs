//! Project model and its client-safe projections.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full project record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// Inline image data URL, if a logo was uploaded.
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Project {
    pub fn to_info(&self) -> ProjectInfo {
        ProjectInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            logo: self.logo.clone(),
            created_at: self.created_at.format("%d/%m/%Y").to_string(),
        }
    }
}

/// Project information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub created_at: String,
}

/// A project together with its funding and expense totals, as shown on the
/// home cards and the petty-cash summary table. Totals are sums over the
/// fetched rows, recomputed on every load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub project: ProjectInfo,
    pub total_cash: f64,
    pub total_expenses: f64,
}

impl ProjectSummary {
    /// A project with no funding yet cannot receive expense entries.
    pub fn has_cash(&self) -> bool {
        self.total_cash > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total_cash: f64) -> ProjectSummary {
        ProjectSummary {
            project: ProjectInfo {
                id: "p1".into(),
                name: "Alpha".into(),
                logo: None,
                created_at: "01/01/2026".into(),
            },
            total_cash,
            total_expenses: 0.0,
        }
    }

    #[test]
    fn zero_cash_projects_are_not_navigable() {
        assert!(!summary(0.0).has_cash());
        assert!(summary(0.01).has_cash());
    }
}
