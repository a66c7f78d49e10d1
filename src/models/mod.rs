//! Database models and wire types for items, purchases and purchase lines
//!
//! Monetary values are `rust_decimal::Decimal` throughout and serialize as
//! decimal strings (e.g. "10.99") so no binary rounding leaks onto the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stockable item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub description: String,
    pub stock: i32,
}

/// A purchase header; its line set lives in `purchase_lines`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Purchase {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// One (item, quantity) pairing within a purchase
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PurchaseLine {
    pub id: i64,
    pub purchase_id: i64,
    pub item_id: i64,
    pub quantity: i32,
}

/// Line entry as it appears in purchase detail responses
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PurchaseLineView {
    pub item: i64,
    pub quantity: i32,
}

/// Purchase detail projection: header plus its line entries in stored order
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseDetail {
    pub id: i64,
    pub items: Vec<PurchaseLineView>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn item_price_serializes_as_decimal_string() {
        let item = Item {
            id: 1,
            name: "Test Item".to_string(),
            price: Decimal::from_str("10.99").unwrap(),
            description: "A test item description".to_string(),
            stock: 100,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], serde_json::Value::String("10.99".into()));
        assert_eq!(json["stock"], 100);
    }

    #[test]
    fn item_round_trips_through_json() {
        let item = Item {
            id: 7,
            name: "New Item".to_string(),
            price: Decimal::from_str("20.50").unwrap(),
            description: "A new item description".to_string(),
            stock: 50,
        };

        let encoded = serde_json::to_string(&item).unwrap();
        let decoded: Item = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.name, item.name);
        assert_eq!(decoded.price, item.price);
        assert_eq!(decoded.description, item.description);
        assert_eq!(decoded.stock, item.stock);
    }
}
