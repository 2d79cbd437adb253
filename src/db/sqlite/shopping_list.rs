//! SQLite shopping list operations.
//!
//! Every function takes the database handle as its first argument. Anything
//! implementing [`SqliteExecutor`] works: `&SqlitePool`, a pooled
//! connection (`&mut *conn`) or an open transaction (`&mut *tx`). Store
//! errors are returned as-is inside [`DbError::Database`].
//!
//! [`DbError::Database`]: crate::db::DbError::Database

use sqlx::{QueryBuilder, Sqlite, SqliteExecutor};
use tracing::{debug, instrument};

use crate::db::{DbResult, NewShoppingListItem, ShoppingListItem, ShoppingListItemPatch};

const RETURNING: &str = ") RETURNING id, name, date_added, price, category, checked";

/// Stateless query functions over the `shopping_list` table.
pub struct ShoppingListService;

impl ShoppingListService {
    /// All rows, in id order. Empty table gives an empty vector.
    #[instrument(skip(db))]
    pub async fn get_all_items<'c, E>(db: E) -> DbResult<Vec<ShoppingListItem>>
    where
        E: SqliteExecutor<'c>,
    {
        let items = sqlx::query_as::<_, ShoppingListItem>(
            "SELECT id, name, date_added, price, category, checked FROM shopping_list ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = items.len(), "fetched shopping list items");
        Ok(items)
    }

    /// The row with the given id, or `None` when there is no such row.
    #[instrument(skip(db))]
    pub async fn get_by_id<'c, E>(db: E, id: i64) -> DbResult<Option<ShoppingListItem>>
    where
        E: SqliteExecutor<'c>,
    {
        let item = sqlx::query_as::<_, ShoppingListItem>(
            "SELECT id, name, date_added, price, category, checked FROM shopping_list WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(item)
    }

    /// Delete by id. Returns the number of rows removed (0 or 1).
    #[instrument(skip(db))]
    pub async fn delete_item<'c, E>(db: E, id: i64) -> DbResult<u64>
    where
        E: SqliteExecutor<'c>,
    {
        let result = sqlx::query("DELETE FROM shopping_list WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        debug!(rows = result.rows_affected(), "deleted shopping list item");
        Ok(result.rows_affected())
    }

    /// Write the fields set in `patch` to the row with the given id.
    ///
    /// Returns the number of rows updated. An empty patch issues no
    /// statement and returns 0.
    #[instrument(skip(db))]
    pub async fn update_item<'c, E>(
        db: E,
        id: i64,
        patch: &ShoppingListItemPatch,
    ) -> DbResult<u64>
    where
        E: SqliteExecutor<'c>,
    {
        if patch.is_empty() {
            debug!("empty patch, nothing to update");
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE shopping_list SET ");
        let mut set = builder.separated(", ");
        if let Some(name) = &patch.name {
            set.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(date_added) = patch.date_added {
            set.push("date_added = ").push_bind_unseparated(date_added);
        }
        if let Some(price) = &patch.price {
            set.push("price = ").push_bind_unseparated(price.clone());
        }
        if let Some(category) = &patch.category {
            set.push("category = ").push_bind_unseparated(category.clone());
        }
        if let Some(checked) = patch.checked {
            set.push("checked = ").push_bind_unseparated(checked);
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(db).await?;

        debug!(rows = result.rows_affected(), "updated shopping list item");
        Ok(result.rows_affected())
    }

    /// Insert a new row and return it with the store-assigned id.
    ///
    /// `checked` is only written when set, otherwise the column default
    /// applies.
    #[instrument(skip(db))]
    pub async fn insert_item<'c, E>(
        db: E,
        item: &NewShoppingListItem,
    ) -> DbResult<ShoppingListItem>
    where
        E: SqliteExecutor<'c>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO shopping_list (name, date_added, price, category",
        );
        if item.checked.is_some() {
            builder.push(", checked");
        }
        builder.push(") VALUES (");

        let mut values = builder.separated(", ");
        values.push_bind(item.name.clone());
        values.push_bind(item.date_added);
        values.push_bind(item.price.clone());
        values.push_bind(item.category.clone());
        if let Some(checked) = item.checked {
            values.push_bind(checked);
        }
        builder.push(RETURNING);

        let inserted = builder
            .build_query_as::<ShoppingListItem>()
            .fetch_one(db)
            .await?;

        debug!(id = inserted.id, "inserted shopping list item");
        Ok(inserted)
    }
}
