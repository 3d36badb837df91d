//! # API crate — shared fullstack server functions for the petty cash manager
//!
//! This crate is the backbone of the fullstack architecture. It defines every
//! Dioxus server function that the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Name + password authentication, argon2 hashing, session key |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models and their client-safe `*Info` projections |
//! | [`report`] | — | Ledger aggregation and the two-sheet spreadsheet export |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `login`, `logout`
//! - **Users**: `create_user`, `list_users`, `delete_user`
//! - **Projects**: `create_project`, `update_project`, `list_projects`,
//!   `get_project`, `list_project_summaries`
//! - **Funding**: `add_cash_entry`, `update_cash_entry`, `list_cash_entries`
//! - **Expenses**: `add_expense`
//! - **Assignments**: `assign_users`, `list_assignments`, `delete_assignment`,
//!   `list_assigned_users`
//! - **Reporting**: `get_report`
//!
//! Every mutation leaves re-fetching to the caller: views refresh their whole
//! projection after each successful call instead of patching local state.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod report;

pub use models::{
    AssignmentInfo, CashEntryInfo, ExpenseInfo, ExpenseType, ProjectInfo, ProjectSummary, Role,
    UserInfo,
};
pub use report::ProjectReport;

/// Get the current authenticated user from the session.
///
/// A missing or malformed session yields `Ok(None)`: the caller is simply
/// treated as logged out, never shown an error.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .unwrap_or_default();

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let Ok(user_uuid) = uuid::Uuid::parse_str(&user_id) else {
        // Stale or corrupt session value; discard it.
        tracing::warn!("Discarding session with malformed user id");
        let _ = session.flush().await;
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with user name and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(name: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let name = name.trim().to_string();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE name = $1")
        .bind(&name)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid name or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        tracing::warn!("Failed login attempt for {}", name);
        return Err(ServerFnError::new("Invalid name or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(name: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Create a new application user. Name and password are trimmed before
/// insert; the role defaults to `User` for anything other than `Admin`.
#[cfg(feature = "server")]
#[post("/api/users")]
pub async fn create_user(
    name: String,
    password: String,
    role: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let name = name.trim().to_string();
    let password = password.trim().to_string();

    if name.is_empty() {
        return Err(ServerFnError::new("User name is required"));
    }
    if password.is_empty() {
        return Err(ServerFnError::new("Password is required"));
    }

    let role = Role::from_stored(&role);

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (name, password_hash, role) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&name)
    .bind(&password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/users")]
pub async fn create_user(
    name: String,
    password: String,
    role: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List all users, newest first.
#[cfg(feature = "server")]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(users.iter().map(User::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a user permanently. Historical expense rows keep the recorded
/// name; only assignment rows cascade.
#[cfg(feature = "server")]
#[post("/api/users/delete")]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/users/delete")]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a project with an optional inline logo image.
#[cfg(feature = "server")]
#[post("/api/projects")]
pub async fn create_project(
    name: String,
    logo: Option<String>,
) -> Result<ProjectInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Project;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Project name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let project: Project =
        sqlx::query_as("INSERT INTO projects (name, logo) VALUES ($1, $2) RETURNING *")
            .bind(&name)
            .bind(&logo)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(project.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/projects")]
pub async fn create_project(
    name: String,
    logo: Option<String>,
) -> Result<ProjectInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a project's name, replacing the logo only when a new one is given.
#[cfg(feature = "server")]
#[post("/api/projects/update")]
pub async fn update_project(
    id: String,
    name: String,
    logo: Option<String>,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let project_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Project name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(logo) = logo {
        sqlx::query("UPDATE projects SET name = $2, logo = $3 WHERE id = $1")
            .bind(project_uuid)
            .bind(&name)
            .bind(&logo)
            .execute(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
    } else {
        sqlx::query("UPDATE projects SET name = $2 WHERE id = $1")
            .bind(project_uuid)
            .bind(&name)
            .execute(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/projects/update")]
pub async fn update_project(
    id: String,
    name: String,
    logo: Option<String>,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List all projects, newest first.
#[cfg(feature = "server")]
#[get("/api/projects")]
pub async fn list_projects() -> Result<Vec<ProjectInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Project;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let projects: Vec<Project> =
        sqlx::query_as("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(projects.iter().map(Project::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/projects")]
pub async fn list_projects() -> Result<Vec<ProjectInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single project by id.
#[cfg(feature = "server")]
#[get("/api/project/:id")]
pub async fn get_project(id: String) -> Result<ProjectInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Project;

    let project_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let project: Option<Project> = sqlx::query_as("SELECT * FROM projects WHERE id = $1")
        .bind(project_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(project) = project else {
        return Err(ServerFnError::new("Project not found"));
    };

    Ok(project.to_info())
}

#[cfg(not(feature = "server"))]
#[get("/api/project/:id")]
pub async fn get_project(id: String) -> Result<ProjectInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every project with its funding and expense totals, newest first.
///
/// One read per project for each ledger, issued concurrently; the totals are
/// summed over the fetched rows rather than aggregated in SQL. Acceptable
/// because the expected project count is small.
#[cfg(feature = "server")]
#[get("/api/projects/summaries")]
pub async fn list_project_summaries() -> Result<Vec<ProjectSummary>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Project;
    use crate::report::sum_amounts;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let projects: Vec<Project> =
        sqlx::query_as("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let summaries = futures::future::try_join_all(projects.iter().map(|project| async move {
        let cash: Vec<(f64,)> =
            sqlx::query_as("SELECT amount FROM petty_cash_entries WHERE project_id = $1")
                .bind(project.id)
                .fetch_all(pool)
                .await?;
        let expenses: Vec<(f64,)> =
            sqlx::query_as("SELECT amount FROM expenses WHERE project_id = $1")
                .bind(project.id)
                .fetch_all(pool)
                .await?;
        Ok::<_, sqlx::Error>(ProjectSummary {
            project: project.to_info(),
            total_cash: sum_amounts(cash.into_iter().map(|(a,)| a)),
            total_expenses: sum_amounts(expenses.into_iter().map(|(a,)| a)),
        })
    }))
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(summaries)
}

#[cfg(not(feature = "server"))]
#[get("/api/projects/summaries")]
pub async fn list_project_summaries() -> Result<Vec<ProjectSummary>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record a petty cash inflow against a project.
#[cfg(feature = "server")]
#[post("/api/petty-cash")]
pub async fn add_cash_entry(project_id: String, amount: f64) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let project_uuid =
        uuid::Uuid::parse_str(&project_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO petty_cash_entries (project_id, amount) VALUES ($1, $2)")
        .bind(project_uuid)
        .bind(amount)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/petty-cash")]
pub async fn add_cash_entry(project_id: String, amount: f64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Edit a funding entry's amount in place. The only mutation funding entries
/// support after creation.
#[cfg(feature = "server")]
#[post("/api/petty-cash/update")]
pub async fn update_cash_entry(id: String, amount: f64) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let entry_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE petty_cash_entries SET amount = $2 WHERE id = $1")
        .bind(entry_uuid)
        .bind(amount)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/petty-cash/update")]
pub async fn update_cash_entry(id: String, amount: f64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List a project's funding entries, newest first (history popup order).
#[cfg(feature = "server")]
#[get("/api/petty-cash/:project_id")]
pub async fn list_cash_entries(project_id: String) -> Result<Vec<CashEntryInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::CashEntry;

    let project_uuid =
        uuid::Uuid::parse_str(&project_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let entries: Vec<CashEntry> = sqlx::query_as(
        "SELECT * FROM petty_cash_entries WHERE project_id = $1 ORDER BY created_at DESC",
    )
    .bind(project_uuid)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(entries.iter().map(CashEntry::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/petty-cash/:project_id")]
pub async fn list_cash_entries(project_id: String) -> Result<Vec<CashEntryInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record an expense against a project.
///
/// `date` is `YYYY-MM-DD` from the form; it defaults to the client's local
/// today there and must not be in the future (with a day of slack for clients
/// ahead of UTC). The recording user must be resolvable by the caller: an
/// empty `user_name` is rejected rather than silently substituted.
#[cfg(feature = "server")]
#[post("/api/expenses")]
pub async fn add_expense(
    project_id: String,
    date: String,
    expense_type: ExpenseType,
    expense_head: String,
    user_name: String,
    description: String,
    amount: f64,
) -> Result<(), ServerFnError> {
    use chrono::{TimeZone, Utc};

    use crate::db::get_pool;
    use crate::models::parse_expense_date;

    let project_uuid =
        uuid::Uuid::parse_str(&project_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let expense_head = expense_head.trim().to_string();
    if expense_head.is_empty() {
        return Err(ServerFnError::new("Expense head is required"));
    }
    let user_name = user_name.trim().to_string();
    if user_name.is_empty() {
        return Err(ServerFnError::new("No user available to record this expense"));
    }
    if amount < 0.0 {
        return Err(ServerFnError::new("Amount must not be negative"));
    }

    let date = parse_expense_date(&date, Utc::now().date_naive())
        .map_err(|e| ServerFnError::new(e))?;
    let created_at = Utc
        .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default());

    let description = description.trim().to_string();
    let description = (!description.is_empty()).then_some(description);

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO expenses (project_id, expense_type, expense_head, user_name, description, amount, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(project_uuid)
    .bind(expense_type.label())
    .bind(&expense_head)
    .bind(&user_name)
    .bind(&description)
    .bind(amount)
    .bind(created_at)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses")]
pub async fn add_expense(
    project_id: String,
    date: String,
    expense_type: ExpenseType,
    expense_head: String,
    user_name: String,
    description: String,
    amount: f64,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Assign a set of users to a project.
///
/// Conflict-tolerant upsert keyed on (project_id, user_id): re-assigning an
/// already-assigned pair is a no-op, never an error.
#[cfg(feature = "server")]
#[post("/api/assignments")]
pub async fn assign_users(project_id: String, user_ids: Vec<String>) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let project_uuid =
        uuid::Uuid::parse_str(&project_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if user_ids.is_empty() {
        return Err(ServerFnError::new("Select at least one user"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    for user_id in user_ids {
        let user_uuid =
            uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;
        sqlx::query(
            "INSERT INTO project_assignments (project_id, user_id) VALUES ($1, $2)
             ON CONFLICT (project_id, user_id) DO NOTHING",
        )
        .bind(project_uuid)
        .bind(user_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/assignments")]
pub async fn assign_users(project_id: String, user_ids: Vec<String>) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List all assignments with project and user names, newest first.
#[cfg(feature = "server")]
#[get("/api/assignments")]
pub async fn list_assignments() -> Result<Vec<AssignmentInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Assignment;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let assignments: Vec<Assignment> = sqlx::query_as(
        "SELECT a.id, a.project_id, a.user_id, a.created_at,
                p.name AS project_name, u.name AS user_name
         FROM project_assignments a
         JOIN projects p ON p.id = a.project_id
         JOIN users u ON u.id = a.user_id
         ORDER BY a.created_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(assignments.iter().map(Assignment::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/assignments")]
pub async fn list_assignments() -> Result<Vec<AssignmentInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove an assignment permanently.
#[cfg(feature = "server")]
#[post("/api/assignments/delete")]
pub async fn delete_assignment(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let assignment_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM project_assignments WHERE id = $1")
        .bind(assignment_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/assignments/delete")]
pub async fn delete_assignment(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the users assigned to a project, for the expense-entry picklist.
#[cfg(feature = "server")]
#[get("/api/assignments/:project_id/users")]
pub async fn list_assigned_users(project_id: String) -> Result<Vec<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let project_uuid =
        uuid::Uuid::parse_str(&project_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<User> = sqlx::query_as(
        "SELECT u.* FROM users u
         JOIN project_assignments a ON a.user_id = u.id
         WHERE a.project_id = $1
         ORDER BY a.created_at ASC",
    )
    .bind(project_uuid)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(users.iter().map(User::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/assignments/:project_id/users")]
pub async fn list_assigned_users(project_id: String) -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Build the full report: every project with its ordered ledgers and totals.
///
/// Per-project fetches fan out concurrently. View-lifetime cancellation is the
/// caller's concern: `use_resource` drops the in-flight future on unmount.
#[cfg(feature = "server")]
#[get("/api/reports")]
pub async fn get_report() -> Result<Vec<ProjectReport>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Project;
    use crate::report::fetch_project_report;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let projects: Vec<Project> =
        sqlx::query_as("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let reports = futures::future::try_join_all(
        projects
            .iter()
            .map(|project| fetch_project_report(pool, project)),
    )
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(reports)
}

#[cfg(not(feature = "server"))]
#[get("/api/reports")]
pub async fn get_report() -> Result<Vec<ProjectReport>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
