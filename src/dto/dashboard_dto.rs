use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::ViolationStatus;

// Totales por entidad
#[derive(Debug, Serialize)]
pub struct EntityTotals {
    pub owners: i64,
    pub vehicles: i64,
    pub violations: i64,
    pub payments: i64,
    pub suspensions: i64,
}

// Desglose de infracciones por estado de pago
#[derive(Debug, Serialize)]
pub struct ViolationBreakdown {
    pub pending: i64,
    pub paid: i64,
}

// Agregados de pagos
#[derive(Debug, Serialize)]
pub struct PaymentTotals {
    pub total_amount: Decimal,
}

// Agregados de suspensiones
#[derive(Debug, Serialize)]
pub struct SuspensionTotals {
    pub active: i64,
}

// Infracción reciente para el panel
#[derive(Debug, Serialize, FromRow)]
pub struct RecentViolation {
    pub violation_id: Uuid,
    pub violation_type: Option<String>,
    pub violation_date: DateTime<Utc>,
    pub fine_amount: Option<Decimal>,
    pub status: ViolationStatus,
    pub registration_number: String,
    pub owner_name: String,
}

// Respuesta completa del endpoint de estadísticas
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub totals: EntityTotals,
    pub violations: ViolationBreakdown,
    pub payments: PaymentTotals,
    pub suspensions: SuspensionTotals,
    pub recent_violations: Vec<RecentViolation>,
}
