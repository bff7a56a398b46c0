use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::payment_dto::{CreatePaymentRequest, PaymentWithDetails};
use crate::models::Payment;
use crate::repositories::payment_repository::PaymentRepository;
use crate::services::PaymentService;
use crate::utils::errors::{not_found_error, AppError};

pub struct PaymentController {
    repository: PaymentRepository,
    service: PaymentService,
}

impl PaymentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PaymentRepository::new(pool.clone()),
            service: PaymentService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<ApiResponse<Payment>, AppError> {
        let payment = self.service.process_payment(request).await?;

        Ok(ApiResponse::success_with_message(
            payment,
            "Payment processed successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<PaymentWithDetails>, AppError> {
        self.repository.find_all_with_details().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PaymentWithDetails, AppError> {
        self.repository
            .find_by_id_with_details(id)
            .await?
            .ok_or_else(|| not_found_error("Payment", id))
    }
}
