//! # Takeoff V-Speeds
//!
//! Estimates V1, VR and V2 for the Boeing 737-700 and 737-800 from takeoff weight.
//!
//! DO NOT USE FOR FLIGHT PLANNING.

// Re-export the main types and functions
pub use aircraft::AircraftVariant;
pub use error::{Result, SpeedError};
pub use labels::OutcomeLabels;
pub use speeds::{
    compute_v1, compute_v2, compute_vr, evaluate, Calculator, CalculatorConfig, CeilingLabel,
    Evaluation, SpeedTriple, V2Rule,
};
pub use units::lbs_to_metric_tons;

// Module declarations
mod aircraft;
pub mod constants;
mod error;
pub mod labels;
mod speeds;
pub mod units;
