//! Routers de la API
//!
//! Un router por recurso, montados bajo /api en main.

pub mod dashboard_routes;
pub mod license_routes;
pub mod owner_routes;
pub mod payment_routes;
pub mod suspension_routes;
pub mod vehicle_routes;
pub mod violation_routes;
pub mod violation_type_routes;
