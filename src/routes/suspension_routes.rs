use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::suspension_controller::SuspensionController;
use crate::dto::common::ApiResponse;
use crate::dto::suspension_dto::{
    LicenseSuspensionSummary, SuspensionQuery, SuspensionWithLicense,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

// El log de suspensiones lo escribe solo la máquina de estados; la API
// únicamente lo consulta
pub fn create_suspension_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suspensions))
        .route("/:id", get(get_suspension))
}

async fn list_suspensions(
    State(state): State<AppState>,
    Query(query): Query<SuspensionQuery>,
) -> Result<Json<ApiResponse<Vec<LicenseSuspensionSummary>>>, AppError> {
    let controller = SuspensionController::new(state.pool.clone());
    let summaries = controller.list(query.license_id).await?;
    Ok(Json(ApiResponse::success(summaries)))
}

async fn get_suspension(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SuspensionWithLicense>>, AppError> {
    let controller = SuspensionController::new(state.pool.clone());
    let suspension = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(suspension)))
}
