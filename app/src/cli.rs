//! Command-line argument parsing
//!
//! Defines the CLI structure using clap. Profile values stay as text here so
//! that the form validation reports bad input the same way for flags, files
//! and the WASM surface.

use crate::error::AppResult;
use crate::services::export::OutputFormat;
use crate::services::profile::ProfileService;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fitness_planner_shared::validation::RawProfileForm;
use std::path::PathBuf;

/// Fitness Planner CLI
#[derive(Debug, Parser)]
#[command(name = "fitness-planner")]
#[command(about = "Personalized diet and workout plans from a body profile", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate daily calories, a diet plan and a 7-day workout plan
    Plan(PlanArgs),
    /// Look up nutrition facts for a food
    Food(FoodArgs),
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Profile file (.toml or .json); flags override its fields
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    /// Age in whole years
    #[arg(long)]
    pub age: Option<String>,

    /// Weight in kg
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in cm
    #[arg(long, conflicts_with = "height_ft")]
    pub height: Option<String>,

    /// Height in feet (with --height-in)
    #[arg(long)]
    pub height_ft: Option<String>,

    /// Remaining inches, 0 when omitted
    #[arg(long, requires = "height_ft")]
    pub height_in: Option<String>,

    /// male or female
    #[arg(long)]
    pub sex: Option<String>,

    /// sedentary, light, moderate, active or very_active
    #[arg(long)]
    pub activity: Option<String>,

    /// weight_loss, weight_gain or maintain
    #[arg(long)]
    pub goal: Option<String>,

    /// Kilograms to lose or gain
    #[arg(long)]
    pub target_kg: Option<String>,

    /// vegetarian or non_vegetarian
    #[arg(long)]
    pub diet: Option<String>,

    /// Output format (defaults to display.default_format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// First day of the plan, for the projected completion date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
}

impl PlanArgs {
    /// Build the profile form from the profile file (if any) and the flags
    pub fn to_form(&self) -> AppResult<RawProfileForm> {
        let mut form = match &self.profile {
            Some(path) => ProfileService::load_file(path)?,
            None => RawProfileForm::default(),
        };

        let overrides = [
            (&mut form.name, &self.name),
            (&mut form.age, &self.age),
            (&mut form.weight, &self.weight),
            (&mut form.gender, &self.sex),
            (&mut form.activity, &self.activity),
            (&mut form.goal, &self.goal),
            (&mut form.target_weight, &self.target_kg),
            (&mut form.diet_type, &self.diet),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        if let Some(height) = &self.height {
            form.height_unit = "cm".to_string();
            form.height = height.clone();
        }
        if let Some(feet) = &self.height_ft {
            form.height_unit = "feet".to_string();
            form.height_ft = feet.clone();
            form.height_in = self.height_in.clone().unwrap_or_else(|| "0".to_string());
        }

        Ok(form)
    }
}

#[derive(Debug, Args)]
pub struct FoodArgs {
    /// Food name, e.g. "sweet potato"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Scale the per-100 g values to this serving size
    #[arg(long)]
    pub grams: Option<f64>,
}

impl FoodArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
