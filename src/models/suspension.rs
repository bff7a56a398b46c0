//! Modelo de Suspension
//!
//! Registro histórico de las acciones de suspensión sobre una licencia.
//! Es un log de aplicación de la regla, no la fuente de verdad de la
//! elegibilidad: esa se deriva siempre del total de puntos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Motivo estándar con el que el motor abre intervalos de suspensión
pub const SUSPENSION_REASON_POINTS: &str = "exceeded point threshold";

/// Suspension principal - mapea a la tabla suspensions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Suspension {
    pub id: Uuid,
    pub license_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: String,
}

impl Suspension {
    /// Un intervalo está abierto si no tiene fecha de fin o si esta
    /// todavía no ha llegado
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        match self.end_date {
            None => true,
            Some(end) => end > now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn suspension(end_date: Option<DateTime<Utc>>) -> Suspension {
        Suspension {
            id: Uuid::new_v4(),
            license_id: Uuid::new_v4(),
            start_date: Utc::now() - Duration::days(30),
            end_date,
            reason: SUSPENSION_REASON_POINTS.to_string(),
        }
    }

    #[test]
    fn test_open_without_end_date() {
        let now = Utc::now();
        assert!(suspension(None).is_open_at(now));
    }

    #[test]
    fn test_open_with_future_end_date() {
        let now = Utc::now();
        assert!(suspension(Some(now + Duration::days(10))).is_open_at(now));
    }

    #[test]
    fn test_closed_with_past_end_date() {
        let now = Utc::now();
        assert!(!suspension(Some(now - Duration::days(1))).is_open_at(now));
    }
}
