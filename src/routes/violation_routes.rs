use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::violation_controller::ViolationController;
use crate::dto::common::ApiResponse;
use crate::dto::violation_dto::{
    CreateViolationRequest, UpdateViolationRequest, ViolationWithDetails,
};
use crate::models::Violation;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_violation_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_violation))
        .route("/", get(list_violations))
        .route("/:id", get(get_violation))
        .route("/:id", put(update_violation))
        .route("/:id", delete(delete_violation))
}

async fn create_violation(
    State(state): State<AppState>,
    Json(request): Json<CreateViolationRequest>,
) -> Result<Json<ApiResponse<Violation>>, AppError> {
    let controller = ViolationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_violations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ViolationWithDetails>>>, AppError> {
    let controller = ViolationController::new(state.pool.clone());
    let violations = controller.list().await?;
    Ok(Json(ApiResponse::success(violations)))
}

async fn get_violation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ViolationWithDetails>>, AppError> {
    let controller = ViolationController::new(state.pool.clone());
    let violation = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(violation)))
}

async fn update_violation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateViolationRequest>,
) -> Result<Json<ApiResponse<Violation>>, AppError> {
    let controller = ViolationController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_violation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ViolationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Violation deleted successfully"
    })))
}
