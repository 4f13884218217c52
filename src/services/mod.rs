//! Business logic services orchestrating trips and document derivation.

pub mod allowance_service;
pub mod derivation_service;
pub mod mileage_service;
pub mod trip_service;

pub use allowance_service::AllowanceService;
pub use derivation_service::{DerivationOutcome, DerivationService};
pub use mileage_service::MileageService;
pub use trip_service::TripService;
