use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error("Item {id} not found")]
    #[diagnostic(
        code(shopping_list::cli::not_found),
        help("Run `shopping-list list` to see the ids of existing items.")
    )]
    NotFound { id: i64 },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(shopping_list::cli::invalid_input))]
    InvalidInput { message: String },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(shopping_list::cli::output))]
    Output { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
