use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Owner;
use crate::utils::errors::AppError;

pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        address: String,
        phone: String,
    ) -> Result<Owner, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            r#"
            INSERT INTO owners (id, name, address, phone, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(owner)
    }

    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let owners =
            sqlx::query_as::<_, Owner>("SELECT * FROM owners ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(owners)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Owner>, AppError> {
        let owner = sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: String,
        address: String,
        phone: String,
    ) -> Result<Owner, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            r#"
            UPDATE owners
            SET name = $2, address = $3, phone = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(address)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(owner)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Un propietario con vehículos o licencias no puede borrarse
    pub async fn is_referenced(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM vehicles WHERE owner_id = $1)
                OR EXISTS(SELECT 1 FROM licenses WHERE owner_id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
