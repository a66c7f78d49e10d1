//! HTTP handlers for purchase endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::PurchaseDetail;
use crate::services::purchase::{PurchaseCreated, PurchaseInput, PurchaseService};
use crate::AppState;

/// Confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a purchase from a list of (item, quantity) entries
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(input): Json<PurchaseInput>,
) -> AppResult<(StatusCode, Json<PurchaseCreated>)> {
    let service = PurchaseService::new(state.db);
    let created = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the line entries of an existing purchase
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<i64>,
    Json(input): Json<PurchaseInput>,
) -> AppResult<Json<MessageResponse>> {
    let service = PurchaseService::new(state.db);
    service.update(purchase_id, input).await?;
    Ok(Json(MessageResponse {
        message: "Purchase updated successfully".to_string(),
    }))
}

/// Get a purchase with its line entries
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<i64>,
) -> AppResult<Json<PurchaseDetail>> {
    let service = PurchaseService::new(state.db);
    let detail = service.get(purchase_id).await?;
    Ok(Json(detail))
}
