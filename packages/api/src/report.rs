//! # Report aggregation and spreadsheet export
//!
//! For every project the report joins its funding and expense rows and
//! computes `total_cash`, `total_expenses`, and `balance = total_cash -
//! total_expenses`. Totals are plain f64 sums over the fetched rows — there is
//! no SQL aggregate and no caching; every view load recomputes from scratch.
//!
//! The export side (server only) renders a [`ProjectReport`] into a two-sheet
//! workbook with `rust_xlsxwriter`:
//!
//! - `Summary` — chronological funding entries, a spacer row, then the total
//!   expenses figure.
//! - `Expenses Incurred` — one row per expense with date, category, head,
//!   recording user, description, and amount.

use serde::{Deserialize, Serialize};

use crate::models::{CashEntryInfo, ExpenseInfo, ProjectInfo};

#[cfg(feature = "server")]
use crate::models::{CashEntry, Expense, Project};

/// Sum the amounts of a set of entries. Native f64 addition, no rounding.
pub fn sum_amounts(amounts: impl IntoIterator<Item = f64>) -> f64 {
    amounts.into_iter().sum()
}

/// A project's full ledger: entries plus the derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectReport {
    pub project: ProjectInfo,
    pub total_cash: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub cash_entries: Vec<CashEntryInfo>,
    pub expenses: Vec<ExpenseInfo>,
}

impl ProjectReport {
    /// Build a report from fetched rows, computing the totals.
    pub fn new(
        project: ProjectInfo,
        cash_entries: Vec<CashEntryInfo>,
        expenses: Vec<ExpenseInfo>,
    ) -> Self {
        let total_cash = sum_amounts(cash_entries.iter().map(|c| c.amount));
        let total_expenses = sum_amounts(expenses.iter().map(|e| e.amount));
        Self {
            project,
            total_cash,
            total_expenses,
            balance: total_cash - total_expenses,
            cash_entries,
            expenses,
        }
    }
}

/// File name for a project's exported workbook.
pub fn export_file_name(project_name: &str) -> String {
    format!("{}_Report.xlsx", project_name)
}

#[cfg(feature = "server")]
pub use server::{build_workbook, export_project_workbook, fetch_project_report, ReportError};

#[cfg(feature = "server")]
mod server {
    use rust_xlsxwriter::{Workbook, XlsxError};
    use sqlx::PgPool;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    pub enum ReportError {
        #[error("workbook error: {0}")]
        Workbook(#[from] XlsxError),
    }

    /// Fetch a single project's ordered funding and expense rows and derive
    /// its report. Rows are chronological so the Summary sheet lists funding
    /// in the order it was received.
    pub async fn fetch_project_report(
        pool: &PgPool,
        project: &Project,
    ) -> Result<ProjectReport, sqlx::Error> {
        let cash: Vec<CashEntry> = sqlx::query_as(
            "SELECT * FROM petty_cash_entries WHERE project_id = $1 ORDER BY created_at ASC",
        )
        .bind(project.id)
        .fetch_all(pool)
        .await?;

        let expenses: Vec<Expense> = sqlx::query_as(
            "SELECT * FROM expenses WHERE project_id = $1 ORDER BY created_at ASC",
        )
        .bind(project.id)
        .fetch_all(pool)
        .await?;

        Ok(ProjectReport::new(
            project.to_info(),
            cash.iter().map(CashEntry::to_info).collect(),
            expenses.iter().map(Expense::to_info).collect(),
        ))
    }

    /// Fetch a project's ledger and render its workbook. Returns the
    /// download file name alongside the xlsx bytes.
    pub async fn export_project_workbook(project_id: &str) -> Result<(String, Vec<u8>), String> {
        let project_uuid = uuid::Uuid::parse_str(project_id).map_err(|e| e.to_string())?;
        let pool = crate::db::get_pool().await.map_err(|e| e.to_string())?;

        let project: Option<Project> = sqlx::query_as("SELECT * FROM projects WHERE id = $1")
            .bind(project_uuid)
            .fetch_optional(pool)
            .await
            .map_err(|e| e.to_string())?;
        let Some(project) = project else {
            return Err("Project not found".to_string());
        };

        let report = fetch_project_report(pool, &project)
            .await
            .map_err(|e| e.to_string())?;
        let bytes = build_workbook(&report).map_err(|e| e.to_string())?;

        Ok((export_file_name(&report.project.name), bytes))
    }

    /// Render the two-sheet workbook and return the xlsx bytes.
    pub fn build_workbook(report: &ProjectReport) -> Result<Vec<u8>, ReportError> {
        let mut workbook = assemble(report)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn assemble(report: &ProjectReport) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();

        let summary = workbook.add_worksheet().set_name("Summary")?;
        summary.write(0, 0, "Payment Received History")?;
        summary.write(1, 0, "Date")?;
        summary.write(1, 1, "Amount")?;
        let mut row = 2;
        for entry in &report.cash_entries {
            summary.write(row, 0, entry.created_at.as_str())?;
            summary.write(row, 1, entry.amount)?;
            row += 1;
        }
        // Spacer row between the funding history and the expense total.
        row += 1;
        summary.write(row, 0, "Total Expenses Incurred")?;
        summary.write(row, 1, report.total_expenses)?;
        summary.set_column_width(0, 20)?;
        summary.set_column_width(1, 15)?;

        let sheet = workbook.add_worksheet().set_name("Expenses Incurred")?;
        let headers = ["Date", "Type", "Head", "User", "Description", "Amount"];
        for (col, header) in headers.iter().enumerate() {
            sheet.write(0, col as u16, *header)?;
        }
        for (i, expense) in report.expenses.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write(row, 0, expense.created_at.as_str())?;
            sheet.write(row, 1, expense.expense_type.label())?;
            sheet.write(row, 2, expense.expense_head.as_str())?;
            sheet.write(row, 3, expense.user_name.as_str())?;
            sheet.write(row, 4, expense.description.as_deref().unwrap_or(""))?;
            sheet.write(row, 5, expense.amount)?;
        }
        for (col, width) in [(0, 15.0), (1, 20.0), (2, 20.0), (3, 15.0), (4, 40.0), (5, 15.0)] {
            sheet.set_column_width(col, width)?;
        }

        Ok(workbook)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::ExpenseType;

        fn alpha_report() -> ProjectReport {
            let project = ProjectInfo {
                id: "p1".into(),
                name: "Alpha".into(),
                logo: None,
                created_at: "01/01/2026".into(),
            };
            let cash = vec![
                CashEntryInfo {
                    id: "c1".into(),
                    project_id: "p1".into(),
                    amount: 500.0,
                    created_at: "02/01/2026 10:00".into(),
                },
                CashEntryInfo {
                    id: "c2".into(),
                    project_id: "p1".into(),
                    amount: 300.0,
                    created_at: "03/01/2026 10:00".into(),
                },
            ];
            let expenses = vec![
                ExpenseInfo {
                    id: "e1".into(),
                    project_id: "p1".into(),
                    expense_type: ExpenseType::Travelling,
                    expense_head: "Taxi".into(),
                    user_name: "Asha".into(),
                    description: Some("Airport run".into()),
                    amount: 200.0,
                    created_at: "04/01/2026".into(),
                },
                ExpenseInfo {
                    id: "e2".into(),
                    project_id: "p1".into(),
                    expense_type: ExpenseType::Food,
                    expense_head: "Lunch".into(),
                    user_name: "Asha".into(),
                    description: None,
                    amount: 50.0,
                    created_at: "05/01/2026".into(),
                },
            ];
            ProjectReport::new(project, cash, expenses)
        }

        #[test]
        fn workbook_has_both_sheets() {
            let mut workbook = assemble(&alpha_report()).unwrap();
            let names: Vec<String> = workbook
                .worksheets_mut()
                .iter()
                .map(|ws| ws.name())
                .collect();
            assert_eq!(names, vec!["Summary", "Expenses Incurred"]);
        }

        #[test]
        fn workbook_serialises_to_bytes() {
            let bytes = build_workbook(&alpha_report()).unwrap();
            assert!(!bytes.is_empty());
            // xlsx files are zip archives.
            assert_eq!(&bytes[..2], b"PK");
        }

        fn archive_entry(bytes: &[u8], name: &str) -> String {
            use std::io::Read;

            let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
            let mut file = archive.by_name(name).unwrap();
            let mut xml = String::new();
            file.read_to_string(&mut xml).unwrap();
            xml
        }

        #[test]
        fn summary_sheet_lists_funding_then_total_after_spacer() {
            let bytes = build_workbook(&alpha_report()).unwrap();
            let shared = archive_entry(&bytes, "xl/sharedStrings.xml");
            let summary = archive_entry(&bytes, "xl/worksheets/sheet1.xml");

            // Shared strings keep insertion order: both funding dates come
            // chronologically, before the total label.
            let first = shared.find("02/01/2026 10:00").unwrap();
            let second = shared.find("03/01/2026 10:00").unwrap();
            let total_label = shared.find("Total Expenses Incurred").unwrap();
            assert!(first < second);
            assert!(second < total_label);

            // Funding amounts on rows 3 and 4, row 5 left empty as the
            // spacer, total expenses (250) on row 6.
            let amount_500 = summary.find("<v>500</v>").unwrap();
            let amount_300 = summary.find("<v>300</v>").unwrap();
            assert!(amount_500 < amount_300);
            assert!(!summary.contains("<row r=\"5\""));
            assert!(summary.contains("<row r=\"6\""));
            assert!(summary.contains("<v>250</v>"));
        }

        #[test]
        fn expense_sheet_rows_carry_category_user_and_amount() {
            let bytes = build_workbook(&alpha_report()).unwrap();
            let shared = archive_entry(&bytes, "xl/sharedStrings.xml");
            let sheet = archive_entry(&bytes, "xl/worksheets/sheet2.xml");

            for value in [
                "Travelling Expense",
                "Food Expense",
                "Taxi",
                "Lunch",
                "Asha",
                "Airport run",
            ] {
                assert!(shared.contains(value), "missing shared string {value}");
            }
            assert!(sheet.contains("<v>200</v>"));
            assert!(sheet.contains("<v>50</v>"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> ProjectInfo {
        ProjectInfo {
            id: "p1".into(),
            name: name.into(),
            logo: None,
            created_at: "01/01/2026".into(),
        }
    }

    fn cash(amount: f64) -> CashEntryInfo {
        CashEntryInfo {
            id: String::new(),
            project_id: "p1".into(),
            amount,
            created_at: String::new(),
        }
    }

    fn expense(amount: f64) -> ExpenseInfo {
        ExpenseInfo {
            id: String::new(),
            project_id: "p1".into(),
            expense_type: Default::default(),
            expense_head: "Head".into(),
            user_name: "Asha".into(),
            description: None,
            amount,
            created_at: String::new(),
        }
    }

    #[test]
    fn alpha_scenario_totals() {
        let report = ProjectReport::new(
            info("Alpha"),
            vec![cash(500.0), cash(300.0)],
            vec![expense(200.0), expense(50.0)],
        );
        assert_eq!(report.total_cash, 800.0);
        assert_eq!(report.total_expenses, 250.0);
        assert_eq!(report.balance, 550.0);
    }

    #[test]
    fn empty_ledgers_sum_to_zero() {
        let report = ProjectReport::new(info("Empty"), vec![], vec![]);
        assert_eq!(report.total_cash, 0.0);
        assert_eq!(report.total_expenses, 0.0);
        assert_eq!(report.balance, 0.0);
    }

    #[test]
    fn balance_may_go_negative() {
        let report = ProjectReport::new(info("Over"), vec![cash(100.0)], vec![expense(150.0)]);
        assert_eq!(report.balance, -50.0);
    }

    #[test]
    fn sum_uses_native_float_addition() {
        assert_eq!(sum_amounts([0.1, 0.2]), 0.1 + 0.2);
    }

    #[test]
    fn export_name_is_derived_from_project() {
        assert_eq!(export_file_name("Alpha"), "Alpha_Report.xlsx");
    }
}
