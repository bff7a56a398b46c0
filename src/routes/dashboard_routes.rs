use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::common::ApiResponse;
use crate::dto::dashboard_dto::DashboardStats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let stats = controller.stats().await?;
    Ok(Json(ApiResponse::success(stats)))
}
