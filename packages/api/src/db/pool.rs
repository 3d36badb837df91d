//! Lazily initialised PostgreSQL pool shared by every server function.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

// Small cap: the app serves a handful of concurrent users and each request
// holds a connection only for the duration of one query.
const MAX_CONNECTIONS: u32 = 5;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get the process-wide connection pool, connecting on first use.
///
/// The connection string comes from the `DATABASE_URL` environment variable;
/// a `.env` file is honoured. A missing variable surfaces as a configuration
/// error rather than a panic.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;

        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&database_url)
            .await
    })
    .await
}
