use chrono::{TimeZone, Utc};

use crate::cli::commands::item::*;
use crate::cli::error::CliError;
use crate::db::{NewShoppingListItem, ShoppingListItem, ShoppingListItemPatch, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

fn banana_bread() -> NewShoppingListItem {
    NewShoppingListItem {
        name: "Banana Bread".to_string(),
        date_added: Utc.with_ymd_and_hms(2029, 1, 22, 16, 28, 32).unwrap(),
        price: "4.55".to_string(),
        category: "Snack".to_string(),
        checked: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_items_empty_table() {
    let db = setup_db().await;

    let output = list_items(db.pool(), "table").await.unwrap();
    assert_eq!(output, "No items found.");

    let output = list_items(db.pool(), "json").await.unwrap();
    let parsed: Vec<ShoppingListItem> = serde_json::from_str(&output).unwrap();
    assert!(parsed.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_then_list_items() {
    let db = setup_db().await;

    let output = add_item(db.pool(), &banana_bread(), "table").await.unwrap();
    assert_eq!(output, "✓ Added item: Banana Bread (1)");

    let table = list_items(db.pool(), "table").await.unwrap();
    assert!(table.contains("Banana Bread"));
    assert!(table.contains("Snack"));
    assert!(table.contains("4.55"));
    assert!(table.contains("2029-01-22"));

    let json = list_items(db.pool(), "json").await.unwrap();
    let parsed: Vec<ShoppingListItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].id, 1);
    assert!(!parsed[0].checked);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_item_json_output() {
    let db = setup_db().await;

    let output = add_item(db.pool(), &banana_bread(), "json").await.unwrap();
    let inserted: ShoppingListItem = serde_json::from_str(&output).unwrap();

    assert_eq!(inserted.id, 1);
    assert_eq!(inserted.name, "Banana Bread");
    assert_eq!(inserted.date_added, banana_bread().date_added);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_item_detail() {
    let db = setup_db().await;
    add_item(db.pool(), &banana_bread(), "table").await.unwrap();

    let output = get_item(db.pool(), 1, "table").await.unwrap();
    assert!(output.contains("Name:     Banana Bread"));
    assert!(output.contains("Price:    4.55"));
    assert!(output.contains("Checked:  no"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_missing_item_is_not_found() {
    let db = setup_db().await;

    let err = get_item(db.pool(), 7, "table").await.unwrap_err();
    assert!(matches!(err, CliError::NotFound { id: 7 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_item_marks_checked() {
    let db = setup_db().await;
    add_item(db.pool(), &banana_bread(), "table").await.unwrap();

    let patch = ShoppingListItemPatch {
        checked: Some(true),
        ..Default::default()
    };
    let output = update_item(db.pool(), 1, &patch).await.unwrap();
    assert_eq!(output, "✓ Updated item: 1");

    let json = get_item(db.pool(), 1, "json").await.unwrap();
    let item: ShoppingListItem = serde_json::from_str(&json).unwrap();
    assert!(item.checked);
    assert_eq!(item.price, "4.55");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_item_rejects_empty_patch() {
    let db = setup_db().await;
    add_item(db.pool(), &banana_bread(), "table").await.unwrap();

    let err = update_item(db.pool(), 1, &ShoppingListItemPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidInput { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_missing_item_is_not_found() {
    let db = setup_db().await;

    let patch = ShoppingListItemPatch {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let err = update_item(db.pool(), 3, &patch).await.unwrap_err();
    assert!(matches!(err, CliError::NotFound { id: 3 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_item_then_missing() {
    let db = setup_db().await;
    add_item(db.pool(), &banana_bread(), "table").await.unwrap();

    let output = delete_item(db.pool(), 1).await.unwrap();
    assert_eq!(output, "✓ Deleted item: 1");

    let err = delete_item(db.pool(), 1).await.unwrap_err();
    assert!(matches!(err, CliError::NotFound { id: 1 }));
}
