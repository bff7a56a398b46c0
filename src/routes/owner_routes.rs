use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::owner_controller::OwnerController;
use crate::dto::common::ApiResponse;
use crate::dto::owner_dto::{CreateOwnerRequest, UpdateOwnerRequest};
use crate::models::Owner;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_owner_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_owner))
        .route("/", get(list_owners))
        .route("/:id", get(get_owner))
        .route("/:id", put(update_owner))
        .route("/:id", delete(delete_owner))
}

async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<Json<ApiResponse<Owner>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_owners(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Owner>>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let owners = controller.list().await?;
    Ok(Json(ApiResponse::success(owners)))
}

async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Owner>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let owner = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(owner)))
}

async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOwnerRequest>,
) -> Result<Json<ApiResponse<Owner>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Owner deleted successfully"
    })))
}
