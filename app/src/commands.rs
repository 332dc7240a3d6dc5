//! Command execution
//!
//! Each command returns the text to print so the binary stays a thin shell
//! around parsing, logging and exit codes.

use crate::cli::{FoodArgs, PlanArgs};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::services::export::{ExportService, SummaryOptions};
use crate::services::food_search::{FoodSearchService, SearchOutcome};
use crate::state::Session;
use fitness_planner_shared::units::EnergyUnit;
use fitness_planner_shared::NutritionFacts;
use tracing::{info, warn};

/// Calculate a plan and render it in the requested (or configured) format
pub fn plan_command(config: &AppConfig, args: &PlanArgs) -> AppResult<String> {
    let form = args.to_form()?;
    let format = args.format.unwrap_or(config.display.default_format);

    let mut session = Session::new();
    let plan = session.calculate(form)?;

    info!(
        goal = %plan.goal,
        daily_calories = plan.rounded_daily_calories(),
        days_required = ?plan.days_required,
        "Plan ready"
    );
    if let Some(advisory) = plan.calorie_advisory() {
        warn!(daily_calories = plan.daily_calories, ?advisory, "{}", advisory.message());
    }

    let options = SummaryOptions {
        energy_unit: config.display.energy_unit,
        start_date: args.start,
    };
    ExportService::render(plan, format, options)
}

/// Run the food search and describe the result
pub async fn food_command(config: &AppConfig, args: &FoodArgs) -> AppResult<String> {
    let query = args.query_text();
    let service = FoodSearchService::from_config(&config.food_search);
    let outcome = service.search(&query).await?;

    Ok(match outcome {
        SearchOutcome::Found(facts) => {
            info!(food = %facts.name, "Food found");
            let grams = args.grams.unwrap_or(100.0);
            let facts = if args.grams.is_some() {
                facts.scaled_to_grams(grams)
            } else {
                facts
            };
            describe_food(&facts, grams, config.display.energy_unit)
        }
        SearchOutcome::NotFound { suggestions } => {
            info!(query = %query, "Food not found");
            format!(
                "Food not found: {}\nTry searching for: {}\n",
                query,
                suggestions.join(", ")
            )
        }
        SearchOutcome::Superseded => String::new(),
    })
}

fn describe_food(facts: &NutritionFacts, grams: f64, unit: EnergyUnit) -> String {
    format!(
        "{} - Nutrition Facts (per {}g)\n\
         \x20 Calories: {:.0} {}\n\
         \x20 Protein:  {:.1} g\n\
         \x20 Carbs:    {:.1} g\n\
         \x20 Fat:      {:.1} g\n\
         \x20 Fiber:    {:.1} g\n",
        facts.name,
        grams,
        unit.from_kcal(facts.calories),
        unit,
        facts.protein_g,
        facts.carbs_g,
        facts.fat_g,
        facts.fiber_g,
    )
}
