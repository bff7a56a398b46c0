use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::dashboard_dto::{
    DashboardStats, EntityTotals, PaymentTotals, RecentViolation, SuspensionTotals,
    ViolationBreakdown,
};
use crate::models::ViolationStatus;
use crate::utils::errors::AppError;

pub struct DashboardController {
    pool: PgPool,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, query: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(query).fetch_one(&self.pool).await?;
        Ok(count)
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let totals = EntityTotals {
            owners: self.count("SELECT COUNT(*) FROM owners").await?,
            vehicles: self.count("SELECT COUNT(*) FROM vehicles").await?,
            violations: self.count("SELECT COUNT(*) FROM violations").await?,
            payments: self.count("SELECT COUNT(*) FROM payments").await?,
            suspensions: self.count("SELECT COUNT(*) FROM suspensions").await?,
        };

        let pending: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM violations WHERE status = $1")
                .bind(ViolationStatus::Unpaid)
                .fetch_one(&self.pool)
                .await?;
        let paid: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM violations WHERE status = $1")
            .bind(ViolationStatus::Paid)
            .fetch_one(&self.pool)
            .await?;

        let total_amount: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(amount_paid), 0) FROM payments")
                .fetch_one(&self.pool)
                .await?;

        let active_suspensions: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM suspensions WHERE end_date IS NULL OR end_date > now()",
        )
        .fetch_one(&self.pool)
        .await?;

        let recent_violations = sqlx::query_as::<_, RecentViolation>(
            r#"
            SELECT v.id AS violation_id,
                   vt.description AS violation_type,
                   v.date_time AS violation_date,
                   vt.fine_amount,
                   v.status,
                   veh.registration_no AS registration_number,
                   o.name AS owner_name
            FROM violations v
            JOIN vehicles veh ON veh.id = v.vehicle_id
            LEFT JOIN violation_types vt ON vt.id = v.violation_type_id
            JOIN owners o ON o.id = veh.owner_id
            ORDER BY v.date_time DESC
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardStats {
            totals,
            violations: ViolationBreakdown { pending, paid },
            payments: PaymentTotals { total_amount },
            suspensions: SuspensionTotals {
                active: active_suspensions,
            },
            recent_violations,
        })
    }
}
