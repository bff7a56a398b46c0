use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::suspension_dto::SuspensionWithLicense;
use crate::utils::errors::AppError;

pub struct SuspensionRepository {
    pool: PgPool,
}

impl SuspensionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id_with_license(
        &self,
        id: Uuid,
    ) -> Result<Option<SuspensionWithLicense>, AppError> {
        let suspension = sqlx::query_as::<_, SuspensionWithLicense>(
            r#"
            SELECT s.id, s.license_id, s.start_date, s.end_date, s.reason,
                   l.status AS license_status,
                   o.name AS owner_name
            FROM suspensions s
            JOIN licenses l ON l.id = s.license_id
            JOIN owners o ON o.id = l.owner_id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(suspension)
    }
}
