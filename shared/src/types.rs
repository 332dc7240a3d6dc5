//! Response types for the JSON surfaces (CLI and WASM)

use crate::errors::PlanError;
use crate::food::{food_suggestions, lookup_food, NutritionFacts};
use crate::models::{CalorieAdvisory, Goal, Plan, WorkoutDay};
use crate::validation::user_message;
use serde::{Deserialize, Serialize};

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&PlanError> for ErrorResponse {
    fn from(err: &PlanError) -> Self {
        let details = match err {
            PlanError::UnrecognizedEnum { value, expected, .. } => Some(serde_json::json!({
                "value": value,
                "expected": expected.split(", ").collect::<Vec<_>>(),
            })),
            PlanError::InvalidInput { .. } => None,
        };
        ErrorResponse {
            error: ErrorDetail {
                code: err.code().to_string(),
                message: user_message(err),
                field: Some(err.field().to_string()),
                details,
            },
        }
    }
}

/// Plan as rendered on the results page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub name: String,
    pub goal: Goal,
    pub goal_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_delta_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_required: Option<u32>,
    /// Unrounded target
    pub daily_calories: f64,
    /// Target as displayed
    pub daily_calories_rounded: i64,
    /// "Breakfast: ...", "Lunch: ...", ...
    pub diet_plan: Vec<String>,
    pub workout_plan: Vec<WorkoutDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<CalorieAdvisory>,
}

impl From<&Plan> for PlanResponse {
    fn from(plan: &Plan) -> Self {
        PlanResponse {
            name: plan.name.clone(),
            goal: plan.goal,
            goal_label: plan.goal.label().to_string(),
            target_delta_kg: plan.target_delta_kg,
            days_required: plan.days_required,
            daily_calories: plan.daily_calories,
            daily_calories_rounded: plan.rounded_daily_calories(),
            diet_plan: plan.diet_meals.iter().map(|meal| meal.to_string()).collect(),
            workout_plan: plan.workout_days.clone(),
            advisory: plan.calorie_advisory(),
        }
    }
}

/// Result of a food search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLookupResponse {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<NutritionFacts>,
    /// Valid search terms; empty when the query matched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl FoodLookupResponse {
    pub fn for_query(query: &str) -> Self {
        let found = lookup_food(query);
        let suggestions = if found.is_some() {
            Vec::new()
        } else {
            food_suggestions().map(str::to_string).collect()
        };
        FoodLookupResponse {
            query: query.to_string(),
            found,
            suggestions,
        }
    }
}
