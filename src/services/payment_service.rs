//! Procesador de pagos
//!
//! Un pago liquida exactamente una infracción. Alta del pago, cambio de
//! estado de la infracción y reevaluación de suspensiones forman una
//! única unidad transaccional: si cualquier paso falla, ninguno queda
//! confirmado.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::dto::payment_dto::CreatePaymentRequest;
use crate::models::Payment;
use crate::services::violation_service::{lock_unpaid_violation, set_paid_and_reevaluate};
use crate::utils::errors::{conflict_error, AppError};

pub struct PaymentService {
    pool: PgPool,
}

impl PaymentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Procesa un pago contra una infracción sin pagar.
    ///
    /// El monto debe ser no negativo, pero no se exige que coincida con
    /// la multa del tipo: las discrepancias se registran tal cual.
    pub async fn process_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<Payment, AppError> {
        if request.amount_paid < Decimal::ZERO {
            return Err(AppError::ValidationError(format!(
                "amount_paid must be non-negative, got {}",
                request.amount_paid
            )));
        }

        let mut tx = self.pool.begin().await?;

        let duplicate: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM payments WHERE id = $1)")
                .bind(request.payment_id)
                .fetch_one(&mut *tx)
                .await?;
        if duplicate {
            return Err(conflict_error("Payment", "id", request.payment_id));
        }

        // NotFound / AlreadyPaid se deciden con la fila bloqueada, de modo
        // que dos pagos concurrentes sobre la misma infracción se resuelven
        // en orden y el segundo falla
        let violation = lock_unpaid_violation(&mut tx, request.violation_id).await?;

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, violation_id, amount_paid, payment_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.payment_id)
        .bind(request.violation_id)
        .bind(request.amount_paid)
        .bind(request.payment_date)
        .fetch_one(&mut *tx)
        .await?;

        set_paid_and_reevaluate(&mut tx, &violation).await?;

        tx.commit().await?;

        info!(
            "💰 Payment {} of {} recorded against violation {}",
            payment.id, payment.amount_paid, payment.violation_id
        );

        Ok(payment)
    }
}
