//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el motor
//! de puntos y suspensiones. Los cuatro componentes (libro de
//! infracciones, agregador de puntos, máquina de estados de suspensión
//! y procesador de pagos) se componen dentro de una misma transacción
//! PostgreSQL; ningún estado mutable vive fuera del pool.

pub mod payment_service;
pub mod points_service;
pub mod suspension_service;
pub mod violation_service;

pub use payment_service::PaymentService;
pub use suspension_service::{SuspensionService, POINT_THRESHOLD};
pub use violation_service::ViolationLedgerService;
