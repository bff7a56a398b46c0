use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleWithOwner};
use crate::models::Vehicle;
use crate::repositories::owner_repository::OwnerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::suspension_service;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::validate_not_empty;

pub struct VehicleController {
    pool: PgPool,
    repository: VehicleRepository,
    owners: OwnerRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            owners: OwnerRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        if validate_not_empty(&request.registration_no).is_err()
            || validate_not_empty(&request.vehicle_type).is_err()
        {
            return Err(AppError::ValidationError(
                "registration_no, vehicle_type and owner_id are required".to_string(),
            ));
        }

        self.owners
            .find_by_id(request.owner_id)
            .await?
            .ok_or_else(|| not_found_error("Owner", request.owner_id))?;

        if self
            .repository
            .registration_exists(&request.registration_no)
            .await?
        {
            return Err(conflict_error(
                "Vehicle",
                "registration_no",
                &request.registration_no,
            ));
        }

        let vehicle = self
            .repository
            .create(request.registration_no, request.vehicle_type, request.owner_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<VehicleWithOwner>, AppError> {
        self.repository.find_all_with_owner().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleWithOwner, AppError> {
        self.repository
            .find_by_id_with_owner(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    /// Actualización con reasignación opcional de titular. Los puntos
    /// siguen al titular, así que un cambio de owner reevalúa las
    /// licencias del antiguo y del nuevo; actualización y ambas
    /// reevaluaciones comparten una única transacción.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        let new_owner_id = request.owner_id.unwrap_or(current.owner_id);
        if new_owner_id != current.owner_id {
            self.owners
                .find_by_id(new_owner_id)
                .await?
                .ok_or_else(|| not_found_error("Owner", new_owner_id))?;
        }

        let registration_no = request
            .registration_no
            .unwrap_or_else(|| current.registration_no.clone());
        if registration_no != current.registration_no
            && self.repository.registration_exists(&registration_no).await?
        {
            return Err(conflict_error("Vehicle", "registration_no", &registration_no));
        }

        let mut tx = self.pool.begin().await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET registration_no = $2, vehicle_type = $3, owner_id = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(registration_no)
        .bind(request.vehicle_type.unwrap_or(current.vehicle_type))
        .bind(new_owner_id)
        .fetch_one(&mut *tx)
        .await?;

        if new_owner_id != current.owner_id {
            let (first, second) =
                suspension_service::owner_lock_order(current.owner_id, new_owner_id);
            suspension_service::reevaluate_owner_licenses(&mut tx, first).await?;
            suspension_service::reevaluate_owner_licenses(&mut tx, second).await?;
        }

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        if self.repository.has_violations(id).await? {
            return Err(AppError::Conflict(format!(
                "vehicle '{}' has violations on record",
                id
            )));
        }

        self.repository.delete(id).await
    }
}
