//! HTTP handler for invoice rendering

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppResult;
use crate::services::invoice::InvoiceService;
use crate::AppState;

/// Render a purchase's invoice as a downloadable PDF
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(purchase_id): Path<i64>,
) -> AppResult<Response> {
    let service = InvoiceService::new(state.db);
    let pdf = service.render(purchase_id).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"invoice.pdf\"",
        ),
    ];

    Ok((headers, pdf).into_response())
}
