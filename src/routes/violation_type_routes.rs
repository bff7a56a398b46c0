use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::violation_type_controller::ViolationTypeController;
use crate::dto::common::ApiResponse;
use crate::models::ViolationType;
use crate::state::AppState;
use crate::utils::errors::AppError;

// Catálogo inmutable: solo lectura
pub fn create_violation_type_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_violation_types))
        .route("/:id", get(get_violation_type))
}

async fn list_violation_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ViolationType>>>, AppError> {
    let controller = ViolationTypeController::new(state.pool.clone());
    let types = controller.list().await?;
    Ok(Json(ApiResponse::success(types)))
}

async fn get_violation_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ViolationType>>, AppError> {
    let controller = ViolationTypeController::new(state.pool.clone());
    let violation_type = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(violation_type)))
}
