//! Modelo de ViolationType
//!
//! Datos de referencia inmutables: descripción, multa y peso en puntos.
//! La API solo los lee; se cargan por migración.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ViolationType principal - mapea a la tabla violation_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ViolationType {
    pub id: Uuid,
    pub description: String,
    pub fine_amount: Decimal,
    pub points: i32,
}
