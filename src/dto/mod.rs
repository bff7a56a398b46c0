//! DTOs de la API
//!
//! Requests y responses por recurso, más la respuesta genérica.

pub mod common;
pub mod dashboard_dto;
pub mod license_dto;
pub mod owner_dto;
pub mod payment_dto;
pub mod suspension_dto;
pub mod vehicle_dto;
pub mod violation_dto;

pub use common::ApiResponse;
