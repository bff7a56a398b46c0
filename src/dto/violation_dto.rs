use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::ViolationStatus;

// Request para registrar una infracción en el libro.
// violation_type_id es opcional: sin tipo, aporta 0 puntos y 0 multa.
#[derive(Debug, Deserialize)]
pub struct CreateViolationRequest {
    pub violation_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub violation_type_id: Option<Uuid>,
    pub location: String,
    pub date_time: DateTime<Utc>,
}

// Request para corregir una infracción. Solo campos que no afectan a los
// puntos: el libro es de solo-añadir respecto al peso y al estado de pago.
#[derive(Debug, Deserialize)]
pub struct UpdateViolationRequest {
    pub location: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
}

// Infracción con la información relacionada (vehículo, tipo, propietario)
#[derive(Debug, Serialize, FromRow)]
pub struct ViolationWithDetails {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub violation_type_id: Option<Uuid>,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub status: ViolationStatus,
    pub registration_no: String,
    pub violation_description: Option<String>,
    pub fine_amount: Option<Decimal>,
    pub owner_name: String,
}
