use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use budgetbuddy_core::crypto::{
    CryptoHolding, CryptoHoldingUpdate, CryptoPortfolio, NewCryptoHolding,
};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_portfolio(
    Path(household_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CryptoPortfolio>> {
    let portfolio = state.crypto_service.get_portfolio(&household_id).await?;
    Ok(Json(portfolio))
}

async fn create_holding(
    State(state): State<Arc<AppState>>,
    Json(new_holding): Json<NewCryptoHolding>,
) -> ApiResult<Json<CryptoHolding>> {
    let holding = state.crypto_service.create_holding(new_holding).await?;
    Ok(Json(holding))
}

async fn update_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CryptoHoldingUpdate>,
) -> ApiResult<Json<CryptoHolding>> {
    let holding = state.crypto_service.update_holding(&id, update).await?;
    Ok(Json(holding))
}

async fn delete_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.crypto_service.delete_holding(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/crypto", post(create_holding)).route(
        "/crypto/{id}",
        get(get_portfolio).put(update_holding).delete(delete_holding),
    )
}
