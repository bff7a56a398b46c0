//! Controladores
//!
//! Orquestan repositorios y servicios del motor por recurso.

pub mod dashboard_controller;
pub mod license_controller;
pub mod owner_controller;
pub mod payment_controller;
pub mod suspension_controller;
pub mod vehicle_controller;
pub mod violation_controller;
pub mod violation_type_controller;
