//! Modelo de Vehicle
//!
//! Vehículo registrado. Tiene exactamente un propietario; el propietario
//! es reasignable mediante una actualización explícita.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub registration_no: String,
    pub vehicle_type: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}
