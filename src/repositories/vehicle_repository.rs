use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleWithOwner;
use crate::models::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        registration_no: String,
        vehicle_type: String,
        owner_id: Uuid,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, registration_no, vehicle_type, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(registration_no)
        .bind(vehicle_type)
        .bind(owner_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_all_with_owner(&self) -> Result<Vec<VehicleWithOwner>, AppError> {
        let vehicles = sqlx::query_as::<_, VehicleWithOwner>(
            r#"
            SELECT v.id, v.registration_no, v.vehicle_type, v.owner_id,
                   o.name AS owner_name, v.created_at
            FROM vehicles v
            JOIN owners o ON o.id = v.owner_id
            ORDER BY v.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id_with_owner(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleWithOwner>, AppError> {
        let vehicle = sqlx::query_as::<_, VehicleWithOwner>(
            r#"
            SELECT v.id, v.registration_no, v.vehicle_type, v.owner_id,
                   o.name AS owner_name, v.created_at
            FROM vehicles v
            JOIN owners o ON o.id = v.owner_id
            WHERE v.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn registration_exists(&self, registration_no: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE registration_no = $1)",
        )
        .bind(registration_no)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Un vehículo con infracciones registradas no puede borrarse
    pub async fn has_violations(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM violations WHERE vehicle_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
