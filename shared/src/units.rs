//! Unit conversion and normalization module
//!
//! Profiles are always expressed in SI units (kg, cm). Heights entered as
//! feet and inches are converted once, at the form boundary.

use crate::errors::PlanError;
use crate::validation::normalize_choice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

// ============================================================================
// Height Units
// ============================================================================

/// How the height field was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    /// Two fields: whole feet plus inches
    Feet,
}

impl HeightUnit {
    pub const CHOICES: &'static [&'static str] = &["cm", "feet"];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Feet => "ft/in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "feet" | "ft" | "ft/in" | "feet_inches" => Ok(HeightUnit::Feet),
            _ => Err(PlanError::unrecognized("height_unit", s, Self::CHOICES)),
        }
    }
}

/// Height entered as feet and inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: f64,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// cm = feet × 30.48 + inches × 2.54
    pub fn to_cm(&self) -> f64 {
        self.feet * CM_PER_FOOT + self.inches * CM_PER_INCH
    }

    /// Split a centimeter height into whole feet and remaining inches
    pub fn from_cm(cm: f64) -> Self {
        let total_inches = cm / CM_PER_INCH;
        let feet = (total_inches / 12.0).floor();
        Self {
            feet,
            inches: total_inches - feet * 12.0,
        }
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}'{:.0}\"", self.feet, self.inches)
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy unit used when displaying calorie targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert from kcal to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "kcal" | "cal" | "calories" => Ok(EnergyUnit::Kcal),
            "kj" | "kilojoules" => Ok(EnergyUnit::Kj),
            _ => Err(PlanError::unrecognized("energy_unit", s, &["kcal", "kj"])),
        }
    }
}
