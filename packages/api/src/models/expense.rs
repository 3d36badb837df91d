//! # Expense model
//!
//! [`ExpenseType`] is a closed four-value category enumeration; the stored
//! column is text, parsed back through [`ExpenseType::from_str`]. Unknown
//! stored values fall back to [`ExpenseType::Other`] so that a hand-edited
//! row can never make a fetch fail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Days, NaiveDate, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Parse a form date (`YYYY-MM-DD`) and bound it against today.
///
/// The date comes from the browser's local clock, which can run up to a day
/// ahead of UTC. A client east of UTC reporting tomorrow's calendar date is
/// still entering "today", so one day of slack is allowed before the date is
/// rejected as future.
#[cfg(feature = "server")]
pub fn parse_expense_date(date: &str, today_utc: NaiveDate) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| e.to_string())?;
    if date > today_utc + Days::new(1) {
        return Err("Expense date cannot be in the future".to_string());
    }
    Ok(date)
}

/// The four expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpenseType {
    #[default]
    Travelling,
    Food,
    Transport,
    Other,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 4] = [
        ExpenseType::Travelling,
        ExpenseType::Food,
        ExpenseType::Transport,
        ExpenseType::Other,
    ];

    /// The label stored in the database and shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Travelling => "Travelling Expense",
            ExpenseType::Food => "Food Expense",
            ExpenseType::Transport => "Transport Expense",
            ExpenseType::Other => "Other Expense",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Travelling Expense" => ExpenseType::Travelling,
            "Food Expense" => ExpenseType::Food,
            "Transport Expense" => ExpenseType::Transport,
            _ => ExpenseType::Other,
        })
    }
}

/// Full expense record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub project_id: Uuid,
    pub expense_type: String,
    pub expense_head: String,
    pub user_name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Expense {
    pub fn to_info(&self) -> ExpenseInfo {
        ExpenseInfo {
            id: self.id.to_string(),
            project_id: self.project_id.to_string(),
            expense_type: self.expense_type.parse().unwrap_or_default(),
            expense_head: self.expense_head.clone(),
            user_name: self.user_name.clone(),
            description: self.description.clone(),
            amount: self.amount,
            created_at: self.created_at.format("%d/%m/%Y").to_string(),
        }
    }
}

/// Expense entry safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseInfo {
    pub id: String,
    pub project_id: String,
    pub expense_type: ExpenseType,
    pub expense_head: String,
    pub user_name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_type_labels_round_trip() {
        for ty in ExpenseType::ALL {
            assert_eq!(ty.label().parse::<ExpenseType>(), Ok(ty));
        }
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        assert_eq!("Misc".parse::<ExpenseType>(), Ok(ExpenseType::Other));
        assert_eq!("".parse::<ExpenseType>(), Ok(ExpenseType::Other));
    }

    #[test]
    fn default_category_is_travelling() {
        assert_eq!(ExpenseType::default(), ExpenseType::Travelling);
    }
}

#[cfg(all(test, feature = "server"))]
mod date_tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn accepts_past_and_present_dates() {
        let today = day("2026-08-24");
        assert_eq!(parse_expense_date("2026-08-24", today), Ok(today));
        assert_eq!(parse_expense_date("2026-01-03", today), Ok(day("2026-01-03")));
    }

    #[test]
    fn accepts_local_today_ahead_of_utc() {
        // A browser east of UTC reports the next calendar date for a few
        // hours every evening; that is still "today" for the user.
        let today = day("2026-08-24");
        assert_eq!(parse_expense_date("2026-08-25", today), Ok(day("2026-08-25")));
    }

    #[test]
    fn rejects_dates_more_than_a_day_ahead() {
        let today = day("2026-08-24");
        assert!(parse_expense_date("2026-08-26", today).is_err());
        assert!(parse_expense_date("2027-01-01", today).is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        let today = day("2026-08-24");
        assert!(parse_expense_date("25/08/2026", today).is_err());
        assert!(parse_expense_date("", today).is_err());
    }
}
