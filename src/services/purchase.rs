//! Purchase service: creation, replacement and read projection
//!
//! Purchase creation is the only writer of item stock. Each creation runs in
//! a single transaction so the multi-item check-and-decrement commits or
//! rolls back as a unit; stock can never go negative. Updating a purchase
//! replaces its line set wholesale and is stock-neutral.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Purchase, PurchaseDetail, PurchaseLine, PurchaseLineView};

/// Purchase service for creating and revising purchases
#[derive(Clone)]
pub struct PurchaseService {
    db: PgPool,
}

/// One requested (item, quantity) entry
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseLineInput {
    pub id: i64,
    pub quantity: i32,
}

/// Input for creating or updating a purchase
#[derive(Debug, Deserialize)]
pub struct PurchaseInput {
    pub items: Vec<PurchaseLineInput>,
}

/// Response for a created purchase
#[derive(Debug, Serialize)]
pub struct PurchaseCreated {
    pub purchase_id: i64,
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate_lines(lines: &[PurchaseLineInput]) -> AppResult<()> {
        if lines.is_empty() {
            return Err(AppError::Validation {
                field: "items".to_string(),
                message: "At least one item is required".to_string(),
            });
        }

        for line in lines {
            if line.quantity <= 0 {
                return Err(AppError::Validation {
                    field: "quantity".to_string(),
                    message: "Quantity must be positive".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Create a purchase, decrementing stock for each line entry
    ///
    /// Runs in one transaction: on any failure (unknown item, insufficient
    /// stock) the purchase row, its lines and all stock decrements are rolled
    /// back together.
    pub async fn create(&self, input: PurchaseInput) -> AppResult<PurchaseCreated> {
        Self::validate_lines(&input.items)?;

        let mut tx = self.db.begin().await?;

        let purchase_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO purchases DEFAULT VALUES RETURNING id",
        )
        .fetch_one(&mut *tx)
        .await?;

        for line in &input.items {
            let name = sqlx::query_scalar::<_, String>("SELECT name FROM items WHERE id = $1")
                .bind(line.id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Item {}", line.id)))?;

            // Conditional decrement: the stock check and the write are one
            // statement, so concurrent purchases cannot oversell an item.
            let updated = sqlx::query(
                "UPDATE items SET stock = stock - $1 WHERE id = $2 AND stock >= $1",
            )
            .bind(line.quantity)
            .bind(line.id)
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() == 0 {
                return Err(AppError::InsufficientStock(name));
            }

            sqlx::query(
                "INSERT INTO purchase_lines (purchase_id, item_id, quantity) VALUES ($1, $2, $3)",
            )
            .bind(purchase_id)
            .bind(line.id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(purchase_id, lines = input.items.len(), "Purchase created");

        Ok(PurchaseCreated { purchase_id })
    }

    /// Replace the line entries of an existing purchase
    ///
    /// Clear-then-reinsert, not a diff. Stock is untouched: only creation
    /// adjusts stock, revision is stock-neutral by contract.
    pub async fn update(&self, purchase_id: i64, input: PurchaseInput) -> AppResult<()> {
        Self::validate_lines(&input.items)?;

        let mut tx = self.db.begin().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM purchases WHERE id = $1)",
        )
        .bind(purchase_id)
        .fetch_one(&mut *tx)
        .await?;

        if !exists {
            return Err(AppError::NotFound("Purchase".to_string()));
        }

        sqlx::query("DELETE FROM purchase_lines WHERE purchase_id = $1")
            .bind(purchase_id)
            .execute(&mut *tx)
            .await?;

        for line in &input.items {
            let item_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)",
            )
            .bind(line.id)
            .fetch_one(&mut *tx)
            .await?;

            if !item_exists {
                return Err(AppError::NotFound(format!("Item {}", line.id)));
            }

            sqlx::query(
                "INSERT INTO purchase_lines (purchase_id, item_id, quantity) VALUES ($1, $2, $3)",
            )
            .bind(purchase_id)
            .bind(line.id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(purchase_id, lines = input.items.len(), "Purchase updated");

        Ok(())
    }

    /// Get a purchase with its line entries in stored order
    pub async fn get(&self, purchase_id: i64) -> AppResult<PurchaseDetail> {
        let purchase = sqlx::query_as::<_, Purchase>(
            "SELECT id, created_at FROM purchases WHERE id = $1",
        )
        .bind(purchase_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?;

        let lines = sqlx::query_as::<_, PurchaseLine>(
            r#"
            SELECT id, purchase_id, item_id, quantity
            FROM purchase_lines
            WHERE purchase_id = $1
            ORDER BY id
            "#,
        )
        .bind(purchase_id)
        .fetch_all(&self.db)
        .await?;

        Ok(PurchaseDetail {
            id: purchase.id,
            items: lines
                .into_iter()
                .map(|line| PurchaseLineView {
                    item: line.item_id,
                    quantity: line.quantity,
                })
                .collect(),
            created_at: purchase.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(entries: &[(i64, i32)]) -> Vec<PurchaseLineInput> {
        entries
            .iter()
            .map(|&(id, quantity)| PurchaseLineInput { id, quantity })
            .collect()
    }

    #[test]
    fn empty_line_list_is_rejected() {
        let err = PurchaseService::validate_lines(&[]).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "items"));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        for bad in [0, -3] {
            let err = PurchaseService::validate_lines(&lines(&[(1, 2), (2, bad)])).unwrap_err();
            assert!(matches!(err, AppError::Validation { ref field, .. } if field == "quantity"));
        }
    }

    #[test]
    fn positive_quantities_pass_validation() {
        assert!(PurchaseService::validate_lines(&lines(&[(1, 2), (2, 3)])).is_ok());
    }

    #[test]
    fn duplicate_items_are_allowed() {
        // Each submitted entry becomes its own line, even for the same item.
        assert!(PurchaseService::validate_lines(&lines(&[(1, 2), (1, 5)])).is_ok());
    }
}
