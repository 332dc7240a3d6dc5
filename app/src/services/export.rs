//! Plan export service
//!
//! Supports multiple formats:
//! - Text: the results page as a plain-text summary
//! - JSON: the `PlanResponse` structure
//! - CSV: one row per meal and one row per exercise

use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use fitness_planner_shared::types::PlanResponse;
use fitness_planner_shared::units::EnergyUnit;
use fitness_planner_shared::Plan;
use serde::{Deserialize, Serialize};

const HYDRATION_TIP: &str = "Remember to stay hydrated! Consistency is key to achieving your \
fitness goals. Stay motivated and track your progress!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Options for the text summary
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryOptions {
    pub energy_unit: EnergyUnit,
    /// When set, the summary includes the projected completion date
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct PlanCsvRow<'a> {
    section: &'static str,
    label: &'a str,
    position: usize,
    item: &'a str,
}

pub struct ExportService;

impl ExportService {
    pub fn render(plan: &Plan, format: OutputFormat, options: SummaryOptions) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(Self::text_summary(plan, options)),
            OutputFormat::Json => Self::to_json(plan),
            OutputFormat::Csv => Self::to_csv(plan),
        }
    }

    pub fn to_json(plan: &Plan) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&PlanResponse::from(plan))?)
    }

    /// Columns: section, label, position, item
    ///
    /// Diet rows are numbered by meal order; workout rows by the exercise's
    /// position within its day.
    pub fn to_csv(plan: &Plan) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        for (index, meal) in plan.diet_meals.iter().enumerate() {
            wtr.serialize(PlanCsvRow {
                section: "diet",
                label: meal.slot.label(),
                position: index + 1,
                item: &meal.description,
            })?;
        }
        for day in &plan.workout_days {
            for (index, exercise) in day.exercises.iter().enumerate() {
                wtr.serialize(PlanCsvRow {
                    section: "workout",
                    label: &day.day,
                    position: index + 1,
                    item: exercise,
                })?;
            }
        }

        let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    pub fn text_summary(plan: &Plan, options: SummaryOptions) -> String {
        let unit = options.energy_unit;
        let mut lines = vec![
            format!(
                "Hi {}, here's your personalized {} plan!",
                plan.name,
                plan.goal.label().to_lowercase()
            ),
            String::new(),
        ];

        // A zero target or duration is not shown
        if let (Some(verb), Some(target)) = (plan.goal.headline(), plan.target_delta_kg) {
            if target > 0.0 {
                lines.push(format!("Target: {} {} kg", verb, target));
            }
        }
        if let Some(days) = plan.days_required.filter(|d| *d > 0) {
            lines.push(format!("Duration: {} days", days));
            if let Some(date) = options.start_date.and_then(|s| plan.projected_completion(s)) {
                lines.push(format!("Projected completion: {}", date.format("%Y-%m-%d")));
            }
        }
        lines.push(format!(
            "Daily Calories: {} {}",
            unit.from_kcal(plan.daily_calories).round() as i64,
            unit
        ));

        lines.push(String::new());
        lines.push("Diet Plan".to_string());
        lines.extend(
            plan.diet_meals
                .iter()
                .map(|meal| format!("  {} {}", meal.slot.icon(), meal)),
        );

        lines.push(String::new());
        lines.push("7-Day Workout Plan".to_string());
        lines.extend(
            plan.workout_days
                .iter()
                .map(|day| format!("  {}: {}", day.day, day.exercises.join(", "))),
        );

        if let Some(advisory) = plan.calorie_advisory() {
            lines.push(String::new());
            lines.push(format!("Note: {}", advisory.message()));
        }

        lines.push(String::new());
        lines.push(HYDRATION_TIP.to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
