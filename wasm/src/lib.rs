//! Fitness Planner WASM Module
//!
//! Browser bindings over the shared plan calculator. Structured values cross
//! the boundary as JSON strings so the same functions run natively in tests.

use fitness_planner_shared::health_metrics::{calculate_bmr_mifflin, ActivityLevel, Sex};
use fitness_planner_shared::plan::compute_plan_from_form;
use fitness_planner_shared::types::{ErrorResponse, FoodLookupResponse, PlanResponse};
use fitness_planner_shared::validation::RawProfileForm;
use fitness_planner_shared::PlanError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(
            r#"{{"error":{{"code":"SERIALIZATION_ERROR","message":{:?}}}}}"#,
            e.to_string()
        )
    })
}

/// Calculate a plan from a JSON profile form
///
/// Returns `PlanResponse` JSON, or `ErrorResponse` JSON when the form is
/// malformed or fails validation.
#[wasm_bindgen]
pub fn compute_plan(profile_json: &str) -> String {
    let form: RawProfileForm = match serde_json::from_str(profile_json) {
        Ok(form) => form,
        Err(e) => {
            let err = PlanError::invalid("profile", format!("Malformed profile JSON: {}", e));
            return to_json(&ErrorResponse::from(&err));
        }
    };

    match compute_plan_from_form(form) {
        Ok(plan) => to_json(&PlanResponse::from(&plan)),
        Err(err) => to_json(&ErrorResponse::from(&err)),
    }
}

/// Look up nutrition facts per 100 g
#[wasm_bindgen]
pub fn lookup_food(query: &str) -> String {
    to_json(&FoodLookupResponse::for_query(query))
}

/// Basal metabolic rate (Mifflin-St Jeor)
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    let sex = if is_male { Sex::Male } else { Sex::Female };
    calculate_bmr_mifflin(weight_kg, height_cm, age_years, sex)
}

fn multiplier_for(level: &str) -> Result<f64, PlanError> {
    Ok(level.parse::<ActivityLevel>()?.multiplier())
}

/// Activity multiplier for a level name
///
/// An unknown level throws the `ErrorResponse` JSON as a string.
#[wasm_bindgen]
pub fn activity_multiplier(level: &str) -> Result<f64, JsValue> {
    multiplier_for(level).map_err(|err| JsValue::from_str(&to_json(&ErrorResponse::from(&err))))
}
