//! Fitness Planner Shared Library
//!
//! Profile model, calorie formulas, plan templates and the food table, used
//! by the command-line app and the WASM module.

pub mod errors;
pub mod food;
pub mod health_metrics;
pub mod models;
pub mod plan;
pub mod templates;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use food::{food_suggestions, lookup_food, NutritionFacts};
pub use health_metrics::{ActivityLevel, Sex};
pub use models::*;
pub use plan::{compute_plan, compute_plan_from_form};
pub use types::*;
pub use units::{EnergyUnit, FeetInchesHeight, HeightUnit};
pub use validation::RawProfileForm;
