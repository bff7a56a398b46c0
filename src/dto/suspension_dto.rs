use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{LicenseStatus, Suspension};

// Filtro opcional para la consulta de suspensiones
#[derive(Debug, Deserialize)]
pub struct SuspensionQuery {
    pub license_id: Option<Uuid>,
}

// Intervalo de suspensión tal como se expone en la API
#[derive(Debug, Serialize)]
pub struct SuspensionInterval {
    pub suspension_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: String,
}

impl From<Suspension> for SuspensionInterval {
    fn from(suspension: Suspension) -> Self {
        Self {
            suspension_id: suspension.id,
            start_date: suspension.start_date,
            end_date: suspension.end_date,
            reason: suspension.reason,
        }
    }
}

// Resumen por licencia: estado registrado, puntos derivados y su historial
// de intervalos (más reciente primero)
#[derive(Debug, Serialize)]
pub struct LicenseSuspensionSummary {
    pub license_id: Uuid,
    pub owner_name: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: LicenseStatus,
    pub total_points: i64,
    pub suspension_status: LicenseStatus,
    pub suspensions: Vec<SuspensionInterval>,
}

// Detalle de un intervalo con su licencia y titular
#[derive(Debug, Serialize, FromRow)]
pub struct SuspensionWithLicense {
    pub id: Uuid,
    pub license_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: String,
    pub license_status: LicenseStatus,
    pub owner_name: String,
}
