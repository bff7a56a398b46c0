//! Modelos de dominio
//!
//! Structs que mapean exactamente al schema PostgreSQL.

pub mod license;
pub mod owner;
pub mod payment;
pub mod suspension;
pub mod vehicle;
pub mod violation;
pub mod violation_type;

pub use license::{License, LicenseStatus};
pub use owner::Owner;
pub use payment::Payment;
pub use suspension::{Suspension, SUSPENSION_REASON_POINTS};
pub use vehicle::Vehicle;
pub use violation::{Violation, ViolationStatus};
pub use violation_type::ViolationType;
