//! Data access for the `shopping_list` table.
//!
//! # Architecture
//!
//! - `error`: Error types shared by every operation
//! - `models`: The row type and its insert/patch input shapes
//! - `sqlite`: Connection handling and the query functions

mod error;
mod models;
mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use sqlite::{ShoppingListService, SqliteDatabase};
