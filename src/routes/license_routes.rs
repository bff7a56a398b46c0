use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::license_controller::LicenseController;
use crate::dto::common::ApiResponse;
use crate::dto::license_dto::{CreateLicenseRequest, LicenseWithOwner, UpdateLicenseRequest};
use crate::models::License;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_license_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_license))
        .route("/", get(list_licenses))
        .route("/:id", get(get_license))
        .route("/:id", put(update_license))
        .route("/:id", delete(delete_license))
}

async fn create_license(
    State(state): State<AppState>,
    Json(request): Json<CreateLicenseRequest>,
) -> Result<Json<ApiResponse<License>>, AppError> {
    let controller = LicenseController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_licenses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LicenseWithOwner>>>, AppError> {
    let controller = LicenseController::new(state.pool.clone());
    let licenses = controller.list().await?;
    Ok(Json(ApiResponse::success(licenses)))
}

async fn get_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LicenseWithOwner>>, AppError> {
    let controller = LicenseController::new(state.pool.clone());
    let license = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(license)))
}

async fn update_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLicenseRequest>,
) -> Result<Json<ApiResponse<License>>, AppError> {
    let controller = LicenseController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = LicenseController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "License deleted successfully"
    })))
}
