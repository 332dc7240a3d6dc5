//! Data models for the Fitness Planner

use crate::errors::PlanError;
use crate::health_metrics::{ActivityLevel, Sex, MIN_RECOMMENDED_DAILY_KCAL};
use crate::validation::normalize_choice;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Goal and Diet Preference
// ============================================================================

/// Intended body-mass trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    Maintain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::WeightGain, Goal::Maintain];

    pub const CHOICES: &'static [&'static str] = &["weight_loss", "weight_gain", "maintain"];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::WeightGain => "Weight Gain",
            Goal::Maintain => "Maintain Weight",
        }
    }

    /// Verb for the target line ("Lose 5 kg"); maintenance has no target
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Goal::WeightLoss => Some("Lose"),
            Goal::WeightGain => Some("Gain"),
            Goal::Maintain => None,
        }
    }

    /// Whether the goal carries a target mass change and a duration
    pub fn has_target(&self) -> bool {
        !matches!(self, Goal::Maintain)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "weight_loss" | "loss" | "lose" => Ok(Goal::WeightLoss),
            "weight_gain" | "gain" => Ok(Goal::WeightGain),
            "maintain" | "maintain_weight" | "maintenance" => Ok(Goal::Maintain),
            _ => Err(PlanError::unrecognized("goal", s, Self::CHOICES)),
        }
    }
}

/// Dietary preference restricting which meal template is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
}

impl DietType {
    pub const ALL: [DietType; 2] = [DietType::Vegetarian, DietType::NonVegetarian];

    pub const CHOICES: &'static [&'static str] = &["vegetarian", "non_vegetarian"];

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DietType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "vegetarian" | "veg" => Ok(DietType::Vegetarian),
            "non_vegetarian" | "nonvegetarian" | "non_veg" => Ok(DietType::NonVegetarian),
            _ => Err(PlanError::unrecognized("diet_type", s, Self::CHOICES)),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Validated biometric profile, in SI units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    /// Height in centimeters, already normalized from feet/inches if needed
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    /// Kilograms to lose or gain; ignored for `Goal::Maintain`
    pub target_delta_kg: f64,
    pub diet_type: DietType,
}

// ============================================================================
// Plan
// ============================================================================

/// Position of a meal within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ORDER: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "🌅",
            MealSlot::Lunch => "🍽️",
            MealSlot::Snack => "🥤",
            MealSlot::Dinner => "🌙",
        }
    }
}

/// One entry of the daily diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub description: String,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.slot.label(), self.description)
    }
}

/// One day of the weekly workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// "Day 1" through "Day 7"
    pub day: String,
    /// Exercises in order, with sets/reps/duration embedded in the text
    pub exercises: Vec<String>,
}

/// Why a calorie target deserves a second look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieAdvisory {
    /// Target is zero or negative; the profile is outside the formula's range
    NonPositive,
    /// Target is below the usual unsupervised minimum
    BelowRecommendedMinimum,
}

impl CalorieAdvisory {
    pub fn message(&self) -> &'static str {
        match self {
            CalorieAdvisory::NonPositive => {
                "The calculated calorie target is not positive; check the profile values"
            }
            CalorieAdvisory::BelowRecommendedMinimum => {
                "The calculated calorie target is below 1200 kcal; consider a smaller daily deficit"
            }
        }
    }
}

/// Calculated diet and workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub goal: Goal,
    /// Present iff the goal is loss or gain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_delta_kg: Option<f64>,
    /// Present iff the goal is loss or gain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_required: Option<u32>,
    /// Unrounded daily target in kcal
    pub daily_calories: f64,
    pub diet_meals: Vec<Meal>,
    pub workout_days: Vec<WorkoutDay>,
}

impl Plan {
    /// Daily target as the results page shows it
    pub fn rounded_daily_calories(&self) -> i64 {
        self.daily_calories.round() as i64
    }

    /// Date the target is reached when starting on `start`
    pub fn projected_completion(&self, start: NaiveDate) -> Option<NaiveDate> {
        let days = self.days_required?;
        start.checked_add_days(Days::new(u64::from(days)))
    }

    pub fn calorie_advisory(&self) -> Option<CalorieAdvisory> {
        if self.daily_calories <= 0.0 {
            Some(CalorieAdvisory::NonPositive)
        } else if self.daily_calories < MIN_RECOMMENDED_DAILY_KCAL {
            Some(CalorieAdvisory::BelowRecommendedMinimum)
        } else {
            None
        }
    }
}
