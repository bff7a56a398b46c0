//! Modelo de License
//!
//! Licencia de conducir. El campo `status` refleja la elegibilidad derivada
//! del total de puntos; lo mantiene la máquina de estados de suspensión,
//! nunca se escribe directamente desde la API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la licencia - mapea al ENUM license_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "license_status")]
pub enum LicenseStatus {
    Active,
    Suspended,
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseStatus::Active => write!(f, "Active"),
            LicenseStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

/// License principal - mapea a la tabla licenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct License {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: LicenseStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_status_display() {
        assert_eq!(LicenseStatus::Active.to_string(), "Active");
        assert_eq!(LicenseStatus::Suspended.to_string(), "Suspended");
    }
}
