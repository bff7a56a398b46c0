//! Máquina de estados de suspensión
//!
//! Evalúa la elegibilidad derivada (total de puntos contra el umbral
//! legal) y la aplica sobre la tabla de suspensiones, que es un log de
//! acciones de ejecución, no la fuente de verdad. Debe invocarse tras
//! cada evento que afecte a los puntos: alta de infracción, pago o
//! eliminación administrativa.
//!
//! El pago por sí solo nunca levanta una suspensión: los puntos
//! persisten aunque la multa esté pagada. Una suspensión solo se cierra
//! cuando el total vuelve a quedar en o bajo el umbral.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::{License, LicenseStatus, Suspension, SUSPENSION_REASON_POINTS};
use crate::services::points_service;
use crate::utils::errors::{not_found_error, AppError};

/// Umbral legal de puntos: por encima de este total la licencia queda
/// suspendida
pub const POINT_THRESHOLD: i64 = 12;

/// Resultado de una evaluación de la máquina de estados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspensionTransition {
    /// Se abre un intervalo y la licencia pasa a Suspended
    Opened,
    /// Se cierra el intervalo abierto y la licencia vuelve a Active
    Closed,
    /// El estado ya coincide con la elegibilidad derivada
    NoChange,
}

/// Función de transición pura: compara el total derivado con el umbral
/// y el estado observado del log. Invocarla dos veces seguidas sin
/// cambios en el libro produce `NoChange` la segunda vez.
pub fn decide_transition(total_points: i64, has_open_suspension: bool) -> SuspensionTransition {
    if total_points > POINT_THRESHOLD && !has_open_suspension {
        SuspensionTransition::Opened
    } else if total_points <= POINT_THRESHOLD && has_open_suspension {
        SuspensionTransition::Closed
    } else {
        SuspensionTransition::NoChange
    }
}

/// Comprueba el invariante de a lo sumo un intervalo abierto por licencia
/// y devuelve si hay uno
fn ensure_at_most_one_open(
    license_id: Uuid,
    open_intervals: &[Suspension],
) -> Result<bool, AppError> {
    if open_intervals.len() > 1 {
        return Err(AppError::InvariantViolation(format!(
            "license '{}' has {} open suspension intervals, at most one is allowed",
            license_id,
            open_intervals.len()
        )));
    }
    Ok(!open_intervals.is_empty())
}

/// Orden determinista de bloqueo entre dos titulares, para que dos
/// transacciones que toquen al mismo par no se interbloqueen
pub(crate) fn owner_lock_order(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Reevalúa una licencia dentro de la transacción del llamador.
///
/// Bloquea la fila de la licencia (FOR UPDATE) de modo que la secuencia
/// {mutar libro → recomputar puntos → transicionar} queda serializada
/// por licencia: dos pagos concurrentes sobre el mismo titular no pueden
/// abrir dos intervalos.
pub async fn reevaluate_license(
    conn: &mut PgConnection,
    license_id: Uuid,
) -> Result<SuspensionTransition, AppError> {
    let license =
        sqlx::query_as::<_, License>("SELECT * FROM licenses WHERE id = $1 FOR UPDATE")
            .bind(license_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found_error("License", license_id))?;

    let total = points_service::total_points(&mut *conn, license_id).await?;

    // Intervalos abiertos: sin fecha de fin o con fin en el futuro
    let open_intervals = sqlx::query_as::<_, Suspension>(
        r#"
        SELECT * FROM suspensions
        WHERE license_id = $1 AND (end_date IS NULL OR end_date > now())
        ORDER BY start_date
        "#,
    )
    .bind(license_id)
    .fetch_all(&mut *conn)
    .await?;

    let has_open = ensure_at_most_one_open(license_id, &open_intervals)?;
    let transition = decide_transition(total, has_open);

    match transition {
        SuspensionTransition::Opened => {
            sqlx::query(
                r#"
                INSERT INTO suspensions (id, license_id, start_date, end_date, reason)
                VALUES ($1, $2, $3, NULL, $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(license_id)
            .bind(Utc::now())
            .bind(SUSPENSION_REASON_POINTS)
            .execute(&mut *conn)
            .await?;

            sqlx::query("UPDATE licenses SET status = $2 WHERE id = $1")
                .bind(license_id)
                .bind(LicenseStatus::Suspended)
                .execute(&mut *conn)
                .await?;

            info!(
                "🚫 License {} suspended: {} points exceed threshold {}",
                license_id, total, POINT_THRESHOLD
            );
        }

        SuspensionTransition::Closed => {
            // len == 1 garantizado por la comprobación de invariante
            let open = &open_intervals[0];

            sqlx::query("UPDATE suspensions SET end_date = $2 WHERE id = $1")
                .bind(open.id)
                .bind(Utc::now())
                .execute(&mut *conn)
                .await?;

            sqlx::query("UPDATE licenses SET status = $2 WHERE id = $1")
                .bind(license_id)
                .bind(LicenseStatus::Active)
                .execute(&mut *conn)
                .await?;

            info!(
                "✅ License {} reinstated: {} points back within threshold {}",
                license_id, total, POINT_THRESHOLD
            );
        }

        SuspensionTransition::NoChange => {
            tracing::debug!(
                "License {} unchanged ({}, {} points)",
                license_id,
                license.status,
                total
            );
        }
    }

    Ok(transition)
}

/// Reevalúa todas las licencias de un titular. Se bloquean en orden
/// determinista de id para evitar interbloqueos entre transacciones que
/// toquen al mismo titular.
pub async fn reevaluate_owner_licenses(
    conn: &mut PgConnection,
    owner_id: Uuid,
) -> Result<(), AppError> {
    let license_ids: Vec<(Uuid,)> = sqlx::query_as(
        "SELECT id FROM licenses WHERE owner_id = $1 ORDER BY id FOR UPDATE",
    )
    .bind(owner_id)
    .fetch_all(&mut *conn)
    .await?;

    for (license_id,) in license_ids {
        reevaluate_license(&mut *conn, license_id).await?;
    }

    Ok(())
}

/// Fachada sobre pool: una reevaluación aislada en su propia transacción
/// (alta de licencia, reasignación de titular)
pub struct SuspensionService {
    pool: PgPool,
}

impl SuspensionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn reevaluate(&self, license_id: Uuid) -> Result<SuspensionTransition, AppError> {
        let mut tx = self.pool.begin().await?;
        let transition = reevaluate_license(&mut tx, license_id).await?;
        tx.commit().await?;

        Ok(transition)
    }

    pub async fn reevaluate_owner(&self, owner_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        reevaluate_owner_licenses(&mut tx, owner_id).await?;
        tx.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Escenario A: licencia sin infracciones, siempre activa
    #[test]
    fn test_zero_points_stays_active() {
        assert_eq!(
            decide_transition(0, false),
            SuspensionTransition::NoChange
        );
    }

    // Escenario B: pesos {5, 4, 4} suman 13, por encima del umbral
    #[test]
    fn test_crossing_threshold_opens_suspension() {
        let total = 5 + 4 + 4;
        assert_eq!(decide_transition(total, false), SuspensionTransition::Opened);
    }

    // Escenario C: pagar la infracción de peso 5 no reduce los puntos,
    // la licencia sigue suspendida
    #[test]
    fn test_payment_does_not_lift_suspension() {
        let total_after_payment = 13;
        assert_eq!(
            decide_transition(total_after_payment, true),
            SuspensionTransition::NoChange
        );
    }

    // El umbral es estrictamente mayor-que: 12 puntos exactos no suspenden
    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(decide_transition(12, false), SuspensionTransition::NoChange);
        assert_eq!(decide_transition(13, false), SuspensionTransition::Opened);
    }

    // Baja administrativa de puntos: el total cae a o bajo el umbral y
    // el intervalo abierto se cierra
    #[test]
    fn test_dropping_below_threshold_closes_suspension() {
        assert_eq!(decide_transition(12, true), SuspensionTransition::Closed);
        assert_eq!(decide_transition(0, true), SuspensionTransition::Closed);
    }

    // Idempotencia: una segunda evaluación sin cambios en el libro no
    // produce transición
    #[test]
    fn test_reevaluation_is_idempotent() {
        let after_open = decide_transition(13, true);
        assert_eq!(after_open, SuspensionTransition::NoChange);

        let after_close = decide_transition(10, false);
        assert_eq!(after_close, SuspensionTransition::NoChange);
    }

    fn open_interval(license_id: Uuid) -> Suspension {
        Suspension {
            id: Uuid::new_v4(),
            license_id,
            start_date: Utc::now(),
            end_date: None,
            reason: SUSPENSION_REASON_POINTS.to_string(),
        }
    }

    // Escenario E: dos infracciones del mismo titular producen a lo sumo
    // un intervalo; con uno ya abierto, más puntos no abren otro
    #[test]
    fn test_second_violation_does_not_open_second_interval() {
        assert_eq!(decide_transition(20, true), SuspensionTransition::NoChange);
    }

    #[test]
    fn test_single_open_interval_is_allowed() {
        let license_id = Uuid::new_v4();

        assert!(matches!(ensure_at_most_one_open(license_id, &[]), Ok(false)));

        let one = [open_interval(license_id)];
        assert!(matches!(ensure_at_most_one_open(license_id, &one), Ok(true)));
    }

    #[test]
    fn test_two_open_intervals_violate_invariant() {
        let license_id = Uuid::new_v4();
        let two = [open_interval(license_id), open_interval(license_id)];

        let result = ensure_at_most_one_open(license_id, &two);
        assert!(matches!(result, Err(AppError::InvariantViolation(_))));
    }

    // El par de titulares se bloquea siempre en el mismo orden, venga
    // como venga
    #[test]
    fn test_owner_lock_order_is_deterministic() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(owner_lock_order(a, b), owner_lock_order(b, a));
        assert_eq!(owner_lock_order(a, a), (a, a));
    }
}
