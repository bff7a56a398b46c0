//! Agregador de puntos
//!
//! El total de puntos de una licencia se deriva siempre del libro de
//! infracciones: licencia → titular → sus vehículos → todas las
//! infracciones de esos vehículos (pagadas o no) → suma de pesos del
//! tipo. No se almacena de forma redundante; una infracción sin tipo
//! aporta 0.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Suma de puntos de una licencia, ejecutable dentro de una transacción
/// del motor. Las infracciones sin tipo quedan fuera del JOIN y por
/// tanto suman 0, que es exactamente su peso.
pub async fn total_points(conn: &mut PgConnection, license_id: Uuid) -> Result<i64, AppError> {
    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE(SUM(vt.points), 0)::BIGINT
        FROM licenses l
        JOIN vehicles veh ON veh.owner_id = l.owner_id
        JOIN violations v ON v.vehicle_id = veh.id
        JOIN violation_types vt ON vt.id = v.violation_type_id
        WHERE l.id = $1
        "#,
    )
    .bind(license_id)
    .fetch_one(conn)
    .await?;

    Ok(total)
}
