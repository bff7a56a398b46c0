//! Modelo de Payment
//!
//! Un pago liquida exactamente una infracción y una infracción tiene a lo
//! sumo un pago (UNIQUE sobre violation_id). Crear un pago es el único
//! evento que mueve una infracción de Unpaid a Paid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment principal - mapea a la tabla payments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub violation_id: Uuid,
    pub amount_paid: Decimal,
    pub payment_date: NaiveDate,
}
