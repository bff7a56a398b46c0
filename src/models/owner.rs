//! Modelo de Owner
//!
//! Propietario de vehículos. Un propietario posee cero o más vehículos
//! y, a través de ellos, acumula puntos sobre sus licencias.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Owner principal - mapea a la tabla owners
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}
