use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use budgetbuddy_core::categories::{Category, NewCategory};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_categories(
    Path(household_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.list_categories(&household_id).await?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(new_category): Json<NewCategory>,
) -> ApiResult<Json<Category>> {
    let category = state.category_service.create_category(new_category).await?;
    Ok(Json(category))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", post(create_category))
        .route("/categories/{household_id}", get(list_categories))
}
