use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::payment_dto::PaymentWithDetails;
use crate::utils::errors::AppError;

const PAYMENT_DETAILS_SELECT: &str = r#"
    SELECT p.id, p.violation_id, p.amount_paid, p.payment_date,
           vt.description AS violation_description,
           o.name AS owner_name
    FROM payments p
    JOIN violations v ON v.id = p.violation_id
    LEFT JOIN violation_types vt ON vt.id = v.violation_type_id
    JOIN vehicles veh ON veh.id = v.vehicle_id
    JOIN owners o ON o.id = veh.owner_id
"#;

pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_details(&self) -> Result<Vec<PaymentWithDetails>, AppError> {
        let query = format!("{} ORDER BY p.payment_date DESC", PAYMENT_DETAILS_SELECT);
        let payments = sqlx::query_as::<_, PaymentWithDetails>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(payments)
    }

    pub async fn find_by_id_with_details(
        &self,
        id: Uuid,
    ) -> Result<Option<PaymentWithDetails>, AppError> {
        let query = format!("{} WHERE p.id = $1", PAYMENT_DETAILS_SELECT);
        let payment = sqlx::query_as::<_, PaymentWithDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(payment)
    }
}
