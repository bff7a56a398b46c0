//! Modelo de Violation
//!
//! Entrada del libro de infracciones. El tipo es opcional: una infracción
//! sin tipo aporta 0 puntos y 0 multa. El estado pasa de Unpaid a Paid
//! exactamente una vez y nunca se revierte.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de pago de la infracción - mapea al ENUM violation_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "violation_status")]
pub enum ViolationStatus {
    Unpaid,
    Paid,
}

impl std::fmt::Display for ViolationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationStatus::Unpaid => write!(f, "Unpaid"),
            ViolationStatus::Paid => write!(f, "Paid"),
        }
    }
}

/// Violation principal - mapea a la tabla violations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Violation {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub violation_type_id: Option<Uuid>,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub status: ViolationStatus,
}

impl Violation {
    pub fn is_paid(&self) -> bool {
        self.status == ViolationStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_paid() {
        let mut violation = Violation {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            violation_type_id: None,
            location: "Corner of 5th and Main".to_string(),
            date_time: Utc::now(),
            status: ViolationStatus::Unpaid,
        };
        assert!(!violation.is_paid());

        violation.status = ViolationStatus::Paid;
        assert!(violation.is_paid());
    }
}
