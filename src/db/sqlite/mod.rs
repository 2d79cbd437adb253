//! SQLite implementation of the shopping list data access.

mod connection;
mod shopping_list;


pub use connection::SqliteDatabase;
pub use shopping_list::ShoppingListService;
