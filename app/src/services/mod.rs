//! Business logic services
//!
//! Services sit between the command-line surface and the shared plan
//! calculator.

pub mod export;
pub mod food_search;
pub mod profile;

pub use export::{ExportService, OutputFormat, SummaryOptions};
pub use food_search::{FoodSearchService, SearchOutcome};
pub use profile::ProfileService;
