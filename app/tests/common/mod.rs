//! Common test utilities for integration tests
//!
//! Builds a test configuration and runs CLI commands in-process.

#![allow(dead_code)]

use clap::Parser;
use fitness_planner_app::cli::{Cli, Commands};
use fitness_planner_app::commands::{food_command, plan_command};
use fitness_planner_app::config::{AppConfig, DisplayConfig, FoodSearchConfig};
use fitness_planner_app::error::AppResult;
use fitness_planner_shared::units::EnergyUnit;
use std::path::PathBuf;

/// Test application wrapper
pub struct TestApp {
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with no search delay
    pub fn new() -> Self {
        Self {
            config: test_config(),
        }
    }

    pub fn with_energy_unit(mut self, unit: EnergyUnit) -> Self {
        self.config.display.energy_unit = unit;
        self
    }

    /// Run a command line (without the program name)
    pub async fn run(&self, args: &[&str]) -> AppResult<String> {
        let argv = std::iter::once("fitness-planner").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("invalid test command line");
        match &cli.command {
            Commands::Plan(plan) => plan_command(&self.config, plan),
            Commands::Food(food) => food_command(&self.config, food).await,
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        display: DisplayConfig::default(),
        food_search: FoodSearchConfig {
            simulated_delay_ms: 0,
        },
    }
}

/// Flags for the 25-year-old, 70 kg, 175 cm reference profile
pub fn reference_flags(goal: &'static str) -> Vec<&'static str> {
    vec![
        "plan", "--name", "Ravi", "--age", "25", "--weight", "70", "--height", "175",
        "--sex", "male", "--activity", "moderate", "--goal", goal, "--target-kg", "5",
        "--diet", "vegetarian",
    ]
}

/// Write `contents` to a uniquely named temp file with the given extension
pub fn temp_profile(tag: &str, extension: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "fitness-planner-{}-{}.{}",
        tag,
        std::process::id(),
        extension
    ));
    std::fs::write(&path, contents).expect("failed to write temp profile");
    path
}
