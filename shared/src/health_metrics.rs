//! Energy expenditure calculations
//!
//! Basal metabolic rate and activity-scaled daily expenditure, the two
//! numeric inputs of every plan.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **No Clamping**: Formulas are applied as published; callers decide how
//!    to treat implausible results
//! 3. **Type Safety**: Activity levels and sex are enums, never free strings

use crate::errors::PlanError;
use crate::validation::normalize_choice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy content of one kilogram of body mass change (kcal)
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Fixed daily deficit or surplus applied for loss and gain goals (kcal)
pub const DAILY_ENERGY_ADJUSTMENT_KCAL: f64 = 500.0;

/// Lowest daily intake generally considered safe without supervision (kcal)
pub const MIN_RECOMMENDED_DAILY_KCAL: f64 = 1200.0;

// ============================================================================
// Profile Enums
// ============================================================================

/// Sex used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const CHOICES: &'static [&'static str] = &["male", "female"];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Sex {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(PlanError::unrecognized("gender", s, Self::CHOICES)),
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub const CHOICES: &'static [&'static str] =
        &["sedentary", "light", "moderate", "active", "very_active"];

    /// Multiplier applied to BMR to estimate daily expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Ok(ActivityLevel::Light),
            "moderate" | "moderately_active" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" | "veryactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(PlanError::unrecognized("activity", s, Self::CHOICES)),
        }
    }
}

// ============================================================================
// BMR and Daily Expenditure
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Activity-scaled daily energy expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Days needed to move `delta_kg` at the fixed daily adjustment, rounded
///
/// Profile validation caps the target at the body weight (at most 1000 kg),
/// so validated input stays far below `u32::MAX` days.
pub fn days_for_mass_change(delta_kg: f64) -> u32 {
    let days = (delta_kg * KCAL_PER_KG_BODY_MASS / DAILY_ENERGY_ADJUSTMENT_KCAL).round();
    // `as` saturates: negative or NaN collapse to 0
    days as u32
}
