use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use budgetbuddy_core::dashboard::Dashboard;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct DashboardQuery {
    /// Reference instant (RFC 3339). Defaults to now.
    #[serde(rename = "asOf")]
    as_of: Option<String>,
}

pub(super) fn parse_instant(field: &str, raw: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {}", field, e)))
}

async fn get_dashboard(
    Path(household_id): Path<String>,
    Query(q): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Dashboard>> {
    let reference = match q.as_of.as_deref() {
        Some(raw) => parse_instant("asOf", raw)?,
        None => Utc::now(),
    };
    let dashboard = state
        .dashboard_service
        .get_dashboard(&household_id, reference)
        .await?;
    Ok(Json(dashboard))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard/{household_id}", get(get_dashboard))
}
