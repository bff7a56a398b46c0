use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::owner_dto::{CreateOwnerRequest, UpdateOwnerRequest};
use crate::models::Owner;
use crate::repositories::owner_repository::OwnerRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{validate_not_empty, validate_phone};

pub struct OwnerController {
    repository: OwnerRepository,
}

impl OwnerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OwnerRepository::new(pool),
        }
    }

    fn validate(name: &str, address: &str, phone: &str) -> Result<(), AppError> {
        if validate_not_empty(name).is_err()
            || validate_not_empty(address).is_err()
            || validate_not_empty(phone).is_err()
        {
            return Err(AppError::ValidationError(
                "name, address and phone are required".to_string(),
            ));
        }
        if validate_phone(phone).is_err() {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid phone number",
                phone
            )));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateOwnerRequest,
    ) -> Result<ApiResponse<Owner>, AppError> {
        Self::validate(&request.name, &request.address, &request.phone)?;

        let owner = self
            .repository
            .create(request.name, request.address, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            owner,
            "Owner created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Owner>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Owner, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Owner", id))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateOwnerRequest,
    ) -> Result<ApiResponse<Owner>, AppError> {
        Self::validate(&request.name, &request.address, &request.phone)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Owner", id))?;

        let owner = self
            .repository
            .update(id, request.name, request.address, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            owner,
            "Owner updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Owner", id))?;

        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(format!(
                "owner '{}' still has vehicles or licenses",
                id
            )));
        }

        self.repository.delete(id).await
    }
}
