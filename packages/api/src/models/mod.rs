//! Data models for the application.

mod assignment;
mod cash_entry;
mod expense;
mod project;
mod user;

pub use assignment::AssignmentInfo;
pub use cash_entry::CashEntryInfo;
pub use expense::{ExpenseInfo, ExpenseType};
pub use project::{ProjectInfo, ProjectSummary};
pub use user::{Role, UserInfo};

#[cfg(feature = "server")]
pub use assignment::Assignment;
#[cfg(feature = "server")]
pub use cash_entry::CashEntry;
#[cfg(feature = "server")]
pub use expense::{parse_expense_date, Expense};
#[cfg(feature = "server")]
pub use project::Project;
#[cfg(feature = "server")]
pub use user::User;
