use sqlx::SqlitePool;
use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::db::{NewShoppingListItem, ShoppingListItem, ShoppingListItemPatch, ShoppingListService};

#[derive(Tabled)]
struct ItemDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Added")]
    date_added: String,
    #[tabled(rename = "Checked")]
    checked: String,
}

impl From<&ShoppingListItem> for ItemDisplay {
    fn from(item: &ShoppingListItem) -> Self {
        Self {
            id: item.id,
            name: truncate_with_ellipsis(&item.name, 40),
            category: truncate_with_ellipsis(&item.category, 20),
            price: item.price.clone(),
            date_added: item.date_added.format("%Y-%m-%d").to_string(),
            checked: if item.checked { "✓" } else { "" }.to_string(),
        }
    }
}

/// List every item
pub async fn list_items(pool: &SqlitePool, format: &str) -> CliResult<String> {
    let items = ShoppingListService::get_all_items(pool).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&items)?),
        _ => Ok(format_table(&items)),
    }
}

fn format_table(items: &[ShoppingListItem]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }

    let display_items: Vec<ItemDisplay> = items.iter().map(|i| i.into()).collect();
    let mut table = Table::new(display_items);
    apply_table_style(&mut table);
    table.to_string()
}

/// Get a single item by ID
pub async fn get_item(pool: &SqlitePool, id: i64, format: &str) -> CliResult<String> {
    let item = ShoppingListService::get_by_id(pool, id)
        .await?
        .ok_or(CliError::NotFound { id })?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&item)?),
        _ => Ok(format_item_detail(&item)),
    }
}

fn format_item_detail(item: &ShoppingListItem) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", item.id));
    output.push_str(&format!("Name:     {}\n", item.name));
    output.push_str(&format!("Category: {}\n", item.category));
    output.push_str(&format!("Price:    {}\n", item.price));
    output.push_str(&format!("Added:    {}\n", item.date_added.to_rfc3339()));
    output.push_str(&format!(
        "Checked:  {}",
        if item.checked { "yes" } else { "no" }
    ));
    output
}

/// Add a new item
pub async fn add_item(
    pool: &SqlitePool,
    item: &NewShoppingListItem,
    format: &str,
) -> CliResult<String> {
    let inserted = ShoppingListService::insert_item(pool, item).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&inserted)?),
        _ => Ok(format!("✓ Added item: {} ({})", inserted.name, inserted.id)),
    }
}

/// Update the given fields of an item
pub async fn update_item(
    pool: &SqlitePool,
    id: i64,
    patch: &ShoppingListItemPatch,
) -> CliResult<String> {
    if patch.is_empty() {
        return Err(CliError::InvalidInput {
            message: "nothing to update; pass at least one field".to_string(),
        });
    }

    match ShoppingListService::update_item(pool, id, patch).await? {
        0 => Err(CliError::NotFound { id }),
        _ => Ok(format!("✓ Updated item: {}", id)),
    }
}

/// Delete an item by ID
pub async fn delete_item(pool: &SqlitePool, id: i64) -> CliResult<String> {
    match ShoppingListService::delete_item(pool, id).await? {
        0 => Err(CliError::NotFound { id }),
        _ => Ok(format!("✓ Deleted item: {}", id)),
    }
}
