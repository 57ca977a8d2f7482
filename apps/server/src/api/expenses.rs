use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use budgetbuddy_core::expenses::{Expense, ExpenseWithUser, NewExpense};

use super::dashboard::parse_instant;
use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Inclusive RFC 3339 bounds. Both or neither must be given.
#[derive(Deserialize)]
struct ExpenseRangeQuery {
    start: Option<String>,
    end: Option<String>,
}

async fn list_expenses(
    Path(household_id): Path<String>,
    Query(q): Query<ExpenseRangeQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ExpenseWithUser>>> {
    let range = match (q.start.as_deref(), q.end.as_deref()) {
        (None, None) => None,
        (Some(start), Some(end)) => Some((
            parse_instant("start", start)?,
            parse_instant("end", end)?,
        )),
        _ => {
            return Err(ApiError::BadRequest(
                "start and end must be supplied together".to_string(),
            ))
        }
    };
    let expenses = state
        .expense_service
        .list_expenses_with_user(&household_id, range)
        .await?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new_expense): Json<NewExpense>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.create_expense(new_expense).await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    // GET takes a household id, DELETE an expense id.
    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses/{id}", get(list_expenses).delete(delete_expense))
}
