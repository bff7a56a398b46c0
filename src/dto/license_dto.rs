use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::LicenseStatus;

// Request para crear una licencia; el id es opcional (se genera si falta).
// El status inicial lo decide el motor, no el llamador.
#[derive(Debug, Deserialize)]
pub struct CreateLicenseRequest {
    pub license_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

// Request para actualizar una licencia (campos requeridos, como el alta)
#[derive(Debug, Deserialize)]
pub struct UpdateLicenseRequest {
    pub owner_id: Uuid,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

// Licencia con el nombre de su titular (listados y detalle)
#[derive(Debug, Serialize, FromRow)]
pub struct LicenseWithOwner {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: LicenseStatus,
    pub created_at: DateTime<Utc>,
}
