//! Item catalog service
//!
//! Items are administered here rather than through the purchase API; purchase
//! creation is the only other writer of `stock`.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::Item;

/// Item service for listing and administering stocked items
#[derive(Clone)]
pub struct ItemService {
    db: PgPool,
}

/// Input for creating an item
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock: i32,
}

impl ItemService {
    /// Create a new ItemService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all items in insertion order
    pub async fn list(&self) -> AppResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, description, stock
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(items)
    }

    /// Create an item
    pub async fn create(&self, input: CreateItemInput) -> AppResult<Item> {
        if input.name.is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Name must not be empty".to_string(),
            });
        }

        if input.price < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "price".to_string(),
                message: "Price must not be negative".to_string(),
            });
        }

        if input.stock < 0 {
            return Err(AppError::Validation {
                field: "stock".to_string(),
                message: "Stock must not be negative".to_string(),
            });
        }

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, price, description, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, description, stock
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(input.stock)
        .fetch_one(&self.db)
        .await?;

        Ok(item)
    }
}
