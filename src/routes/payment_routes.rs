use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::payment_controller::PaymentController;
use crate::dto::common::ApiResponse;
use crate::dto::payment_dto::{CreatePaymentRequest, PaymentWithDetails};
use crate::models::Payment;
use crate::state::AppState;
use crate::utils::errors::AppError;

// Sin PUT ni DELETE: la transición Unpaid → Paid no se revierte
pub fn create_payment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_payment))
        .route("/", get(list_payments))
        .route("/:id", get(get_payment))
}

async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<Json<ApiResponse<Payment>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PaymentWithDetails>>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let payments = controller.list().await?;
    Ok(Json(ApiResponse::success(payments)))
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaymentWithDetails>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let payment = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(payment)))
}
