use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::violation_dto::ViolationWithDetails;
use crate::models::Violation;
use crate::utils::errors::AppError;

const VIOLATION_DETAILS_SELECT: &str = r#"
    SELECT v.id, v.vehicle_id, v.violation_type_id, v.location, v.date_time, v.status,
           veh.registration_no,
           vt.description AS violation_description,
           vt.fine_amount,
           o.name AS owner_name
    FROM violations v
    JOIN vehicles veh ON veh.id = v.vehicle_id
    LEFT JOIN violation_types vt ON vt.id = v.violation_type_id
    JOIN owners o ON o.id = veh.owner_id
"#;

pub struct ViolationRepository {
    pool: PgPool,
}

impl ViolationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_details(&self) -> Result<Vec<ViolationWithDetails>, AppError> {
        let query = format!("{} ORDER BY v.date_time DESC", VIOLATION_DETAILS_SELECT);
        let violations = sqlx::query_as::<_, ViolationWithDetails>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(violations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Violation>, AppError> {
        let violation =
            sqlx::query_as::<_, Violation>("SELECT * FROM violations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(violation)
    }

    pub async fn find_by_id_with_details(
        &self,
        id: Uuid,
    ) -> Result<Option<ViolationWithDetails>, AppError> {
        let query = format!("{} WHERE v.id = $1", VIOLATION_DETAILS_SELECT);
        let violation = sqlx::query_as::<_, ViolationWithDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(violation)
    }

    /// Corrige campos que no afectan a los puntos ni al estado de pago
    pub async fn update_details(
        &self,
        id: Uuid,
        location: String,
        date_time: chrono::DateTime<chrono::Utc>,
    ) -> Result<Violation, AppError> {
        let violation = sqlx::query_as::<_, Violation>(
            r#"
            UPDATE violations
            SET location = $2, date_time = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(location)
        .bind(date_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(violation)
    }
}
