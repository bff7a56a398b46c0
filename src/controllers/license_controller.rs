use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::license_dto::{CreateLicenseRequest, LicenseWithOwner, UpdateLicenseRequest};
use crate::models::License;
use crate::repositories::license_repository::LicenseRepository;
use crate::repositories::owner_repository::OwnerRepository;
use crate::services::SuspensionService;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct LicenseController {
    repository: LicenseRepository,
    owners: OwnerRepository,
    suspensions: SuspensionService,
}

impl LicenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LicenseRepository::new(pool.clone()),
            owners: OwnerRepository::new(pool.clone()),
            suspensions: SuspensionService::new(pool),
        }
    }

    /// Alta de licencia. Se reevalúa inmediatamente: el titular puede
    /// llegar ya con puntos por encima del umbral.
    pub async fn create(
        &self,
        request: CreateLicenseRequest,
    ) -> Result<ApiResponse<License>, AppError> {
        if request.expiry_date <= request.issue_date {
            return Err(AppError::ValidationError(
                "expiry_date must be after issue_date".to_string(),
            ));
        }

        self.owners
            .find_by_id(request.owner_id)
            .await?
            .ok_or_else(|| not_found_error("Owner", request.owner_id))?;

        let id = request.license_id.unwrap_or_else(Uuid::new_v4);
        if self.repository.exists(id).await? {
            return Err(conflict_error("License", "id", id));
        }

        self.repository
            .create(id, request.owner_id, request.issue_date, request.expiry_date)
            .await?;

        self.suspensions.reevaluate(id).await?;

        // Releer: la reevaluación puede haber dejado la licencia suspendida
        let license = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("License", id))?;

        Ok(ApiResponse::success_with_message(
            license,
            "License created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<LicenseWithOwner>, AppError> {
        self.repository.find_all_with_owner().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<LicenseWithOwner, AppError> {
        self.repository
            .find_by_id_with_owner(id)
            .await?
            .ok_or_else(|| not_found_error("License", id))
    }

    /// El status nunca se acepta del llamador: lo deriva la máquina de
    /// estados tras la actualización (el titular puede haber cambiado)
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLicenseRequest,
    ) -> Result<ApiResponse<License>, AppError> {
        if request.expiry_date <= request.issue_date {
            return Err(AppError::ValidationError(
                "expiry_date must be after issue_date".to_string(),
            ));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("License", id))?;

        self.owners
            .find_by_id(request.owner_id)
            .await?
            .ok_or_else(|| not_found_error("Owner", request.owner_id))?;

        self.repository
            .update(id, request.owner_id, request.issue_date, request.expiry_date)
            .await?;

        self.suspensions.reevaluate(id).await?;

        let license = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("License", id))?;

        Ok(ApiResponse::success_with_message(
            license,
            "License updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("License", id))?;

        self.repository.delete(id).await
    }
}
