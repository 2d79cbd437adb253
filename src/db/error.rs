//! Database error types.
//!
//! Store-level failures are carried as the original `sqlx::Error` so callers
//! can inspect them (constraint violations, connectivity loss) without this
//! layer translating anything. It uses miette for diagnostic output and
//! thiserror for the derives.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Connection error: {message}")]
    #[diagnostic(code(shopping_list::db::connection_error))]
    Connection { message: String },

    #[error("Migration error: {0}")]
    #[diagnostic(code(shopping_list::db::migration_error))]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Database error: {0}")]
    #[diagnostic(code(shopping_list::db::database_error))]
    Database(#[from] sqlx::Error),
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
