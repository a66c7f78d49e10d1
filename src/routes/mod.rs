//! Route definitions for the Invoicing Server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Item catalog
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        // Purchases
        .route("/purchase", post(handlers::create_purchase))
        .route(
            "/purchase/:purchase_id",
            get(handlers::get_purchase).put(handlers::update_purchase),
        )
        // Invoice rendering
        .route("/invoice/:purchase_id", get(handlers::get_invoice))
}
