use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::license_dto::LicenseWithOwner;
use crate::models::License;
use crate::utils::errors::AppError;

pub struct LicenseRepository {
    pool: PgPool,
}

impl LicenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta con estado inicial Active; la máquina de estados lo corrige
    /// inmediatamente después si el titular ya supera el umbral
    pub async fn create(
        &self,
        id: Uuid,
        owner_id: Uuid,
        issue_date: chrono::NaiveDate,
        expiry_date: chrono::NaiveDate,
    ) -> Result<License, AppError> {
        let license = sqlx::query_as::<_, License>(
            r#"
            INSERT INTO licenses (id, owner_id, issue_date, expiry_date, status, created_at)
            VALUES ($1, $2, $3, $4, 'Active', $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(issue_date)
        .bind(expiry_date)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(license)
    }

    /// Actualiza los datos administrativos; el status no se toca aquí,
    /// lo posee la máquina de estados
    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        issue_date: chrono::NaiveDate,
        expiry_date: chrono::NaiveDate,
    ) -> Result<License, AppError> {
        let license = sqlx::query_as::<_, License>(
            r#"
            UPDATE licenses
            SET owner_id = $2, issue_date = $3, expiry_date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(issue_date)
        .bind(expiry_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(license)
    }

    pub async fn find_all_with_owner(&self) -> Result<Vec<LicenseWithOwner>, AppError> {
        let licenses = sqlx::query_as::<_, LicenseWithOwner>(
            r#"
            SELECT l.id, l.owner_id, o.name AS owner_name,
                   l.issue_date, l.expiry_date, l.status, l.created_at
            FROM licenses l
            JOIN owners o ON o.id = l.owner_id
            ORDER BY l.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(licenses)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<License>, AppError> {
        let license = sqlx::query_as::<_, License>("SELECT * FROM licenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(license)
    }

    pub async fn find_by_id_with_owner(
        &self,
        id: Uuid,
    ) -> Result<Option<LicenseWithOwner>, AppError> {
        let license = sqlx::query_as::<_, LicenseWithOwner>(
            r#"
            SELECT l.id, l.owner_id, o.name AS owner_name,
                   l.issue_date, l.expiry_date, l.status, l.created_at
            FROM licenses l
            JOIN owners o ON o.id = l.owner_id
            WHERE l.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(license)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM licenses WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM licenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
