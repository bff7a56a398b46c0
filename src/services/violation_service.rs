//! Libro de infracciones
//!
//! Registro de solo-añadir: cada entrada lleva su vehículo, un tipo
//! opcional (peso en puntos y multa) y un estado de pago. Toda mutación
//! que afecte a los puntos reevalúa sincrónicamente las licencias del
//! titular del vehículo, dentro de la misma transacción.

use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::dto::violation_dto::CreateViolationRequest;
use crate::models::{Violation, ViolationStatus};
use crate::services::suspension_service;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

/// Una infracción se paga exactamente una vez: repetir el pago es un
/// error, no un no-op
pub(crate) fn ensure_unpaid(violation: &Violation) -> Result<(), AppError> {
    if violation.is_paid() {
        return Err(AppError::AlreadyPaid(format!(
            "violation '{}' is already paid",
            violation.id
        )));
    }
    Ok(())
}

/// Bloquea una infracción y verifica que siga sin pagar.
///
/// `NotFound` si no existe; `AlreadyPaid` si ya está pagada. La decisión
/// se toma con la fila bloqueada: de dos pagos concurrentes, el segundo
/// observa el estado confirmado por el primero y falla.
pub(crate) async fn lock_unpaid_violation(
    conn: &mut PgConnection,
    violation_id: Uuid,
) -> Result<Violation, AppError> {
    let violation =
        sqlx::query_as::<_, Violation>("SELECT * FROM violations WHERE id = $1 FOR UPDATE")
            .bind(violation_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found_error("Violation", violation_id))?;

    ensure_unpaid(&violation)?;

    Ok(violation)
}

/// Marca como pagada una infracción ya bloqueada y reevalúa las licencias
/// del titular de su vehículo
pub(crate) async fn set_paid_and_reevaluate(
    conn: &mut PgConnection,
    violation: &Violation,
) -> Result<Violation, AppError> {
    let updated = sqlx::query_as::<_, Violation>(
        "UPDATE violations SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(violation.id)
    .bind(ViolationStatus::Paid)
    .fetch_one(&mut *conn)
    .await?;

    let (owner_id,): (Uuid,) = sqlx::query_as("SELECT owner_id FROM vehicles WHERE id = $1")
        .bind(violation.vehicle_id)
        .fetch_one(&mut *conn)
        .await?;

    suspension_service::reevaluate_owner_licenses(&mut *conn, owner_id).await?;

    Ok(updated)
}

/// Servicio del libro de infracciones
pub struct ViolationLedgerService {
    pool: PgPool,
}

impl ViolationLedgerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registra una infracción y reevalúa las licencias del titular.
    /// Alta y cascada comparten transacción: o se confirman juntas o
    /// ninguna.
    pub async fn record_violation(
        &self,
        request: CreateViolationRequest,
    ) -> Result<Violation, AppError> {
        if request.location.trim().is_empty() {
            return Err(AppError::ValidationError(
                "location is required".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let owner_id: Uuid = sqlx::query_scalar("SELECT owner_id FROM vehicles WHERE id = $1")
            .bind(request.vehicle_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;

        if let Some(type_id) = request.violation_type_id {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM violation_types WHERE id = $1)")
                    .bind(type_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !exists {
                return Err(not_found_error("Violation type", type_id));
            }
        }

        let violation_id = request.violation_id.unwrap_or_else(Uuid::new_v4);
        let duplicate: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM violations WHERE id = $1)")
                .bind(violation_id)
                .fetch_one(&mut *tx)
                .await?;
        if duplicate {
            return Err(conflict_error("Violation", "id", violation_id));
        }

        let violation = sqlx::query_as::<_, Violation>(
            r#"
            INSERT INTO violations (id, vehicle_id, violation_type_id, location, date_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(violation_id)
        .bind(request.vehicle_id)
        .bind(request.violation_type_id)
        .bind(request.location)
        .bind(request.date_time)
        .bind(ViolationStatus::Unpaid)
        .fetch_one(&mut *tx)
        .await?;

        suspension_service::reevaluate_owner_licenses(&mut tx, owner_id).await?;

        tx.commit().await?;

        info!(
            "📝 Violation {} recorded for vehicle {}",
            violation.id, violation.vehicle_id
        );

        Ok(violation)
    }

    /// Marca una infracción como pagada. No lo usa la API directamente:
    /// el procesador de pagos compone la misma lógica dentro de su propia
    /// transacción.
    pub async fn mark_paid(&self, violation_id: Uuid) -> Result<Violation, AppError> {
        let mut tx = self.pool.begin().await?;

        let violation = lock_unpaid_violation(&mut tx, violation_id).await?;
        let updated = set_paid_and_reevaluate(&mut tx, &violation).await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Eliminación administrativa: retira la infracción (y su pago, si lo
    /// hubiera) del libro y reevalúa. Es la vía por la que un total puede
    /// volver a quedar bajo el umbral y levantar una suspensión.
    pub async fn remove_violation(&self, violation_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let violation =
            sqlx::query_as::<_, Violation>("SELECT * FROM violations WHERE id = $1 FOR UPDATE")
                .bind(violation_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| not_found_error("Violation", violation_id))?;

        let (owner_id,): (Uuid,) = sqlx::query_as("SELECT owner_id FROM vehicles WHERE id = $1")
            .bind(violation.vehicle_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM payments WHERE violation_id = $1")
            .bind(violation_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM violations WHERE id = $1")
            .bind(violation_id)
            .execute(&mut *tx)
            .await?;

        suspension_service::reevaluate_owner_licenses(&mut tx, owner_id).await?;

        tx.commit().await?;

        info!("🗑️ Violation {} removed from the ledger", violation_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn violation(status: ViolationStatus) -> Violation {
        Violation {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            violation_type_id: Some(Uuid::new_v4()),
            location: "Av. Libertador 1200".to_string(),
            date_time: Utc::now(),
            status,
        }
    }

    // Escenario D: el segundo pago sobre la misma infracción se rechaza;
    // al fallar antes de insertar nada, la transacción no deja pago ni
    // cambio de estado
    #[test]
    fn test_second_payment_is_rejected() {
        let paid = violation(ViolationStatus::Paid);
        let result = ensure_unpaid(&paid);
        assert!(matches!(result, Err(AppError::AlreadyPaid(_))));
    }

    #[test]
    fn test_unpaid_violation_is_payable() {
        let unpaid = violation(ViolationStatus::Unpaid);
        assert!(ensure_unpaid(&unpaid).is_ok());
    }
}
