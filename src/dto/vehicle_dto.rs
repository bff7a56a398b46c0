use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Request para registrar un vehículo
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub registration_no: String,
    pub vehicle_type: String,
    pub owner_id: Uuid,
}

// Request para actualizar un vehículo; owner_id reasigna el propietario
// y dispara la reevaluación de suspensiones de ambos propietarios
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub registration_no: Option<String>,
    pub vehicle_type: Option<String>,
    pub owner_id: Option<Uuid>,
}

// Vehículo con el nombre de su propietario (listados y detalle)
#[derive(Debug, Serialize, FromRow)]
pub struct VehicleWithOwner {
    pub id: Uuid,
    pub registration_no: String,
    pub vehicle_type: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}
