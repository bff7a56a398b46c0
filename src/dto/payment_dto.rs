use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Request para procesar un pago. El monto no tiene por qué coincidir con
// la multa: las discrepancias se aceptan y se registran tal cual.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub payment_id: Uuid,
    pub violation_id: Uuid,
    pub amount_paid: Decimal,
    pub payment_date: NaiveDate,
}

// Pago con la información relacionada (infracción, tipo, propietario)
#[derive(Debug, Serialize, FromRow)]
pub struct PaymentWithDetails {
    pub id: Uuid,
    pub violation_id: Uuid,
    pub amount_paid: Decimal,
    pub payment_date: NaiveDate,
    pub violation_description: Option<String>,
    pub owner_name: String,
}
