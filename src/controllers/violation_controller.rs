use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::violation_dto::{
    CreateViolationRequest, UpdateViolationRequest, ViolationWithDetails,
};
use crate::models::Violation;
use crate::repositories::violation_repository::ViolationRepository;
use crate::services::ViolationLedgerService;
use crate::utils::errors::{not_found_error, AppError};

pub struct ViolationController {
    repository: ViolationRepository,
    ledger: ViolationLedgerService,
}

impl ViolationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ViolationRepository::new(pool.clone()),
            ledger: ViolationLedgerService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateViolationRequest,
    ) -> Result<ApiResponse<Violation>, AppError> {
        let violation = self.ledger.record_violation(request).await?;

        Ok(ApiResponse::success_with_message(
            violation,
            "Violation created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<ViolationWithDetails>, AppError> {
        self.repository.find_all_with_details().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ViolationWithDetails, AppError> {
        self.repository
            .find_by_id_with_details(id)
            .await?
            .ok_or_else(|| not_found_error("Violation", id))
    }

    /// Solo corrige lugar y fecha; puntos y estado de pago no se tocan
    /// por esta vía
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateViolationRequest,
    ) -> Result<ApiResponse<Violation>, AppError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Violation", id))?;

        let violation = self
            .repository
            .update_details(
                id,
                request.location.unwrap_or(current.location),
                request.date_time.unwrap_or(current.date_time),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            violation,
            "Violation updated successfully".to_string(),
        ))
    }

    /// Baja administrativa: la única vía por la que el total de puntos
    /// puede bajar y levantar una suspensión
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.ledger.remove_violation(id).await
    }
}
