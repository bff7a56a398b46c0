use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ViolationType;
use crate::repositories::violation_type_repository::ViolationTypeRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Catálogo de solo lectura
pub struct ViolationTypeController {
    repository: ViolationTypeRepository,
}

impl ViolationTypeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ViolationTypeRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ViolationType>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ViolationType, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Violation type", id))
    }
}
