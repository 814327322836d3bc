use anyhow::Result;
use dioxus::prelude::ServerFnError;
use sqlx::{Any, Pool};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

pub mod postgres;
pub mod sqlite;

#[async_trait::async_trait]
pub trait Database: Send + Sync {
    async fn pool(&self) -> &Pool<Any>;

    async fn run_migrations(&self) -> Result<()>;
}

// Re-export implementations
pub use postgres::PostgresDatabase;
pub use sqlite::SqliteDatabase;

// Ids and timestamps live in text columns so a single schema works for
// both SQLite and Postgres behind the `Any` driver.

pub fn uuid_to_db(id: Uuid) -> String {
    id.to_string()
}

pub fn uuid_from_db(raw: &str) -> Result<Uuid, ServerFnError> {
    Uuid::parse_str(raw).map_err(|_| ServerFnError::new("invalid uuid in database row"))
}

pub fn datetime_to_db(at: OffsetDateTime) -> Result<String, ServerFnError> {
    at.format(&Rfc3339)
        .map_err(|_| ServerFnError::new("unformattable timestamp"))
}

pub fn datetime_from_db(raw: &str) -> Result<OffsetDateTime, ServerFnError> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .map_err(|_| ServerFnError::new("invalid timestamp in database row"))
}
