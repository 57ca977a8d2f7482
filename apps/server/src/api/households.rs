use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use budgetbuddy_core::households::{Household, NewHousehold, NewUser, User};

use crate::{error::ApiResult, main_lib::AppState};

async fn create_household(
    State(state): State<Arc<AppState>>,
    Json(new_household): Json<NewHousehold>,
) -> ApiResult<Json<Household>> {
    let household = state
        .household_service
        .create_household(new_household)
        .await?;
    Ok(Json(household))
}

async fn get_household(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Household>> {
    let household = state.household_service.get_household(&id).await?;
    Ok(Json(household))
}

async fn list_members(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<User>>> {
    let members = state.household_service.list_members(&id).await?;
    Ok(Json(members))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<User>> {
    let user = state.household_service.create_user(new_user).await?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/households", post(create_household))
        .route("/households/{id}", get(get_household))
        .route("/households/{id}/members", get(list_members))
        .route("/users", post(create_user))
}
