use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ViolationType;
use crate::utils::errors::AppError;

pub struct ViolationTypeRepository {
    pool: PgPool,
}

impl ViolationTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<ViolationType>, AppError> {
        let types = sqlx::query_as::<_, ViolationType>(
            "SELECT * FROM violation_types ORDER BY description",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ViolationType>, AppError> {
        let violation_type =
            sqlx::query_as::<_, ViolationType>("SELECT * FROM violation_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(violation_type)
    }
}
