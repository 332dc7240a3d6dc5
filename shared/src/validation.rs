//! Input validation functions
//!
//! Converts the string-valued profile form into a typed [`Profile`]. Numeric
//! fields must parse, choices must name a known variant; nothing is defaulted
//! silently. Uses both custom validators and the `validator` crate for derive
//! macros.

use crate::errors::PlanError;
use crate::health_metrics::{ActivityLevel, Sex};
use crate::models::{DietType, Goal, Profile};
use crate::units::{FeetInchesHeight, HeightUnit};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Lowercase, trim, and fold spaces and hyphens into underscores
///
/// "Very Active" -> "very_active", "Non-Vegetarian" -> "non_vegetarian"
pub fn normalize_choice(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

// ============================================================================
// Raw Form
// ============================================================================

/// Profile form fields exactly as entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RawProfileForm {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub age: String,
    /// Kilograms
    #[serde(deserialize_with = "text_or_number")]
    pub weight: String,
    /// Centimeters; used when `height_unit` is "cm"
    #[serde(deserialize_with = "text_or_number")]
    pub height: String,
    /// "cm" or "feet"
    pub height_unit: String,
    #[serde(deserialize_with = "text_or_number")]
    pub height_ft: String,
    #[serde(deserialize_with = "text_or_number")]
    pub height_in: String,
    pub gender: String,
    pub activity: String,
    pub goal: String,
    /// Kilograms to lose or gain; only read for loss and gain goals
    #[serde(deserialize_with = "text_or_number")]
    pub target_weight: String,
    pub diet_type: String,
}

/// Numeric form fields may be written as numbers in profile files
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}

impl Default for RawProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            weight: String::new(),
            height: String::new(),
            height_unit: "cm".to_string(),
            height_ft: String::new(),
            height_in: String::new(),
            gender: String::new(),
            activity: String::new(),
            goal: String::new(),
            target_weight: "5".to_string(),
            diet_type: String::new(),
        }
    }
}

impl RawProfileForm {
    /// Validate every field and build the profile
    pub fn into_profile(mut self) -> Result<Profile, PlanError> {
        self.name = self.name.trim().to_string();
        self.validate()
            .map_err(|_| PlanError::invalid("name", "Please enter your name"))?;

        let age = parse_age(&self.age)?;
        let weight_kg = at_most(
            "weight",
            parse_positive("weight", &self.weight)?,
            MAX_WEIGHT_KG,
            "Must be at most 1000 kg",
        )?;
        let height_cm = self.height_cm()?;
        let sex: Sex = self.gender.parse()?;
        let activity_level: ActivityLevel = self.activity.parse()?;
        let goal: Goal = self.goal.parse()?;
        let target_delta_kg = if goal.has_target() {
            at_most(
                "target_weight",
                parse_non_negative("target_weight", &self.target_weight)?,
                weight_kg,
                "Cannot exceed your current weight",
            )?
        } else {
            0.0
        };
        let diet_type: DietType = self.diet_type.parse()?;

        Ok(Profile {
            name: self.name,
            age,
            weight_kg,
            height_cm,
            sex,
            activity_level,
            goal,
            target_delta_kg,
            diet_type,
        })
    }

    /// Height in centimeters, converting feet and inches when selected
    fn height_cm(&self) -> Result<f64, PlanError> {
        match self.height_unit.parse::<HeightUnit>()? {
            HeightUnit::Cm => at_most(
                "height",
                parse_positive("height", &self.height)?,
                MAX_HEIGHT_CM,
                "Must be at most 300 cm",
            ),
            HeightUnit::Feet => {
                let height = FeetInchesHeight {
                    feet: parse_non_negative("height_ft", &self.height_ft)?,
                    inches: parse_non_negative("height_in", &self.height_in)?,
                };
                let cm = height.to_cm();
                if cm <= 0.0 {
                    Err(PlanError::invalid("height_ft", "Height must be greater than zero"))
                } else if cm > MAX_HEIGHT_CM {
                    Err(PlanError::invalid("height_ft", "Height must be at most 300 cm"))
                } else {
                    Ok(cm)
                }
            }
        }
    }
}

// ============================================================================
// Field Parsers
// ============================================================================

/// Upper bounds that keep every derived value (calories, days) in range
pub const MAX_AGE_YEARS: u32 = 150;
pub const MAX_WEIGHT_KG: f64 = 1000.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

fn at_most(field: &str, value: f64, max: f64, message: &str) -> Result<f64, PlanError> {
    if value > max {
        return Err(PlanError::invalid(field, message));
    }
    Ok(value)
}

fn parse_number(field: &str, raw: &str) -> Result<f64, PlanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlanError::invalid(field, "This field is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PlanError::invalid(field, format!("'{}' is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(PlanError::invalid(field, "Must be a valid number"));
    }
    Ok(value)
}

/// Parse a finite number greater than zero
pub fn parse_positive(field: &str, raw: &str) -> Result<f64, PlanError> {
    let value = parse_number(field, raw)?;
    if value <= 0.0 {
        return Err(PlanError::invalid(field, "Must be greater than zero"));
    }
    Ok(value)
}

/// Parse a finite number of zero or more
pub fn parse_non_negative(field: &str, raw: &str) -> Result<f64, PlanError> {
    let value = parse_number(field, raw)?;
    if value < 0.0 {
        return Err(PlanError::invalid(field, "Cannot be negative"));
    }
    Ok(value)
}

/// Parse a whole number of years greater than zero
pub fn parse_age(raw: &str) -> Result<u32, PlanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlanError::invalid("age", "This field is required"));
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Err(PlanError::invalid("age", "Must be greater than zero")),
        Ok(age) if age > MAX_AGE_YEARS => {
            Err(PlanError::invalid("age", "Must be at most 150 years"))
        }
        Ok(age) => Ok(age),
        Err(_) => Err(PlanError::invalid(
            "age",
            format!("'{}' is not a whole number", trimmed),
        )),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map form field names to the labels shown next to the inputs
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Your Name",
        "age" => "Age",
        "weight" => "Weight (kg)",
        "height" => "Height (cm)",
        "height_unit" => "Height Unit",
        "height_ft" => "Feet",
        "height_in" => "Inches",
        "gender" => "Gender",
        "activity" => "Activity Level",
        "goal" => "Goal",
        "target_weight" => "Target",
        "diet_type" => "Diet Type",
        "food" => "Food",
        _ => field_name,
    }
}

/// Format an error for display next to its field
pub fn user_message(error: &PlanError) -> String {
    let label = get_field_display_label(error.field());
    match error {
        PlanError::InvalidInput { message, .. } => format!("{}: {}", label, message),
        PlanError::UnrecognizedEnum {
            value, expected, ..
        } => format!("{}: '{}' is not one of {}", label, value, expected),
    }
}

#[cfg(test)]
impl RawProfileForm {
    /// The reference profile: 25-year-old male, 70 kg, 175 cm, moderate activity
    pub(crate) fn example() -> Self {
        Self {
            name: "Ravi".to_string(),
            age: "25".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
            gender: "Male".to_string(),
            activity: "Moderate".to_string(),
            goal: "Weight Loss".to_string(),
            diet_type: "Vegetarian".to_string(),
            ..Self::default()
        }
    }
}
