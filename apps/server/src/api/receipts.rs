use std::sync::Arc;

use axum::{routing::post, Json, Router};

use budgetbuddy_core::receipts::{extract_receipt_hints, ReceiptHints, ReceiptText};

use crate::main_lib::AppState;

/// Guesses amount, date and category from OCR text. OCR happens client-side.
async fn parse_receipt(Json(body): Json<ReceiptText>) -> Json<ReceiptHints> {
    Json(extract_receipt_hints(&body.text))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/receipts/parse", post(parse_receipt))
}
