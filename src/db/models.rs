//! Domain models for the shopping list database.
//!
//! `ShoppingListItem` mirrors a row of the `shopping_list` table. The input
//! shapes leave out what the store owns: `id` is always assigned on insert
//! and `checked` falls back to the column default when omitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `shopping_list` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShoppingListItem {
    pub id: i64,
    pub name: String,
    pub date_added: DateTime<Utc>,
    /// Decimal kept as text, e.g. `"12.00"`.
    pub price: String,
    pub category: String,
    pub checked: bool,
}

/// Fields supplied by the caller when inserting an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShoppingListItem {
    pub name: String,
    pub date_added: DateTime<Utc>,
    pub price: String,
    pub category: String,
    /// `None` leaves the column default (`false`) in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Partial update of an item. Unset fields are left untouched.
///
/// Only the mutable columns exist here, so `id` can never be rewritten and
/// unknown keys are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShoppingListItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ShoppingListItemPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date_added.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.checked.is_none()
    }

    /// Apply the set fields to an in-memory item.
    ///
    /// Mirrors what `update_item` writes to the store.
    pub fn apply_to(&self, item: &mut ShoppingListItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(date_added) = self.date_added {
            item.date_added = date_added;
        }
        if let Some(price) = &self.price {
            item.price = price.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(checked) = self.checked {
            item.checked = checked;
        }
    }
}
