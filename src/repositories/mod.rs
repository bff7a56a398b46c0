//! Acceso a datos
//!
//! Repositorios sqlx por recurso. Las operaciones que deben ejecutarse
//! dentro de la transacción del motor viven en `services`, no aquí.

pub mod license_repository;
pub mod owner_repository;
pub mod payment_repository;
pub mod suspension_repository;
pub mod vehicle_repository;
pub mod violation_repository;
pub mod violation_type_repository;
