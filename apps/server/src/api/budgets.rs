use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use budgetbuddy_core::budgets::{Budget, BudgetUpdate, NewBudget};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_budgets(
    Path(household_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state.budget_service.list_budgets(&household_id).await?;
    Ok(Json(budgets))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Json(new_budget): Json<NewBudget>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.create_budget(new_budget).await?;
    Ok(Json(budget))
}

async fn update_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<BudgetUpdate>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.update_budget(&id, update).await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_budget(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    // GET takes a household id, PUT and DELETE a budget id.
    Router::new().route("/budgets", post(create_budget)).route(
        "/budgets/{id}",
        get(list_budgets).put(update_budget).delete(delete_budget),
    )
}
