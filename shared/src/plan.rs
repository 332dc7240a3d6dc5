//! Plan calculation
//!
//! Maps a validated [`Profile`] to a [`Plan`] in a single pass:
//!
//! 1. BMR from the Mifflin-St Jeor equation
//! 2. Scale by the activity multiplier
//! 3. Apply the goal's ±500 kcal adjustment and derive the duration
//! 4. Select the meal template by (goal, diet type)
//! 5. Select the workout week by goal
//!
//! The function is deterministic: no clock, no randomness, no shared state.

use crate::errors::PlanError;
use crate::health_metrics::{
    calculate_bmr_mifflin, calculate_tdee, days_for_mass_change, DAILY_ENERGY_ADJUSTMENT_KCAL,
};
use crate::models::{Goal, Meal, Plan, Profile, WorkoutDay};
use crate::templates::{meal_template, workout_template};
use crate::validation::RawProfileForm;

/// Calculate the daily calorie target, diet and workout plan for a profile
pub fn compute_plan(profile: &Profile) -> Plan {
    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
    );
    let maintenance = calculate_tdee(bmr, profile.activity_level);

    let (daily_calories, target_delta_kg, days_required) = match profile.goal {
        Goal::WeightLoss => (
            maintenance - DAILY_ENERGY_ADJUSTMENT_KCAL,
            Some(profile.target_delta_kg),
            Some(days_for_mass_change(profile.target_delta_kg)),
        ),
        Goal::WeightGain => (
            maintenance + DAILY_ENERGY_ADJUSTMENT_KCAL,
            Some(profile.target_delta_kg),
            Some(days_for_mass_change(profile.target_delta_kg)),
        ),
        Goal::Maintain => (maintenance, None, None),
    };

    let diet_meals = meal_template(profile.goal, profile.diet_type)
        .into_iter()
        .map(|(slot, description)| Meal {
            slot,
            description: description.to_string(),
        })
        .collect();

    let workout_days = workout_template(profile.goal)
        .iter()
        .map(|(day, exercises)| WorkoutDay {
            day: day.to_string(),
            exercises: exercises.iter().map(|e| e.to_string()).collect(),
        })
        .collect();

    Plan {
        name: profile.name.clone(),
        goal: profile.goal,
        target_delta_kg,
        days_required,
        daily_calories,
        diet_meals,
        workout_days,
    }
}

/// Validate raw form fields and calculate the plan in one step
pub fn compute_plan_from_form(form: RawProfileForm) -> Result<Plan, PlanError> {
    let profile = form.into_profile()?;
    Ok(compute_plan(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::{ActivityLevel, Sex};
    use crate::models::{DietType, MealSlot};
    use fake::faker::name::en::Name;
    use fake::Fake;
    use proptest::prelude::*;
    use rstest::rstest;

    fn reference_profile(goal: Goal, target_delta_kg: f64) -> Profile {
        Profile {
            name: "Ravi".to_string(),
            age: 25,
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal,
            target_delta_kg,
            diet_type: DietType::Vegetarian,
        }
    }

    // =========================================================================
    // Reference Values
    // =========================================================================

    #[test]
    fn test_maintain_reference_profile() {
        let plan = compute_plan(&reference_profile(Goal::Maintain, 5.0));

        assert!((plan.daily_calories - 2594.3125).abs() < 1e-9);
        assert_eq!(plan.days_required, None);
        assert_eq!(plan.target_delta_kg, None);
        assert_eq!(plan.goal, Goal::Maintain);
        assert_eq!(plan.name, "Ravi");
        assert_eq!(plan.diet_meals[0].description, "Fresh fruits with oats and nuts");
        assert_eq!(plan.workout_days[0].exercises, vec!["Brisk walking (30 min)"]);
    }

    #[test]
    fn test_weight_loss_reference_profile() {
        let plan = compute_plan(&reference_profile(Goal::WeightLoss, 5.0));

        assert!((plan.daily_calories - 2094.3125).abs() < 1e-9);
        assert_eq!(plan.days_required, Some(77));
        assert_eq!(plan.target_delta_kg, Some(5.0));
        assert_eq!(plan.diet_meals[0].description, "Oats with banana and almonds");
    }

    #[test]
    fn test_weight_gain_reference_profile() {
        let maintain = compute_plan(&reference_profile(Goal::Maintain, 0.0));
        let plan = compute_plan(&reference_profile(Goal::WeightGain, 3.0));

        assert_eq!(plan.days_required, Some(46));
        assert!((plan.daily_calories - (maintain.daily_calories + 500.0)).abs() < 1e-9);
        assert_eq!(
            plan.workout_days[0].exercises,
            vec!["Push-ups (3×10)", "Squats (3×15)", "Dumbbell curls (3×12)"]
        );
    }

    #[rstest]
    #[case(Goal::WeightLoss)]
    #[case(Goal::WeightGain)]
    fn test_zero_target_needs_zero_days(#[case] goal: Goal) {
        let plan = compute_plan(&reference_profile(goal, 0.0));
        assert_eq!(plan.days_required, Some(0));
        assert_eq!(plan.target_delta_kg, Some(0.0));
    }

    #[test]
    fn test_extreme_loss_profile_is_left_unclamped() {
        let profile = Profile {
            weight_kg: 5.0,
            height_cm: 40.0,
            age: 90,
            sex: Sex::Female,
            activity_level: ActivityLevel::Sedentary,
            ..reference_profile(Goal::WeightLoss, 1.0)
        };
        let plan = compute_plan(&profile);
        assert!(plan.daily_calories < 0.0);
        assert!(plan.daily_calories.is_finite());
    }

    // =========================================================================
    // Template Selection
    // =========================================================================

    #[rstest]
    fn test_every_combination_has_full_plan(
        #[values(Goal::WeightLoss, Goal::WeightGain, Goal::Maintain)] goal: Goal,
        #[values(DietType::Vegetarian, DietType::NonVegetarian)] diet: DietType,
    ) {
        let profile = Profile {
            diet_type: diet,
            ..reference_profile(goal, 4.0)
        };
        let plan = compute_plan(&profile);

        assert_eq!(plan.diet_meals.len(), 4);
        assert_eq!(plan.workout_days.len(), 7);
        let slots: Vec<MealSlot> = plan.diet_meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ORDER);
    }

    #[rstest]
    #[case(Goal::WeightLoss)]
    #[case(Goal::WeightGain)]
    #[case(Goal::Maintain)]
    fn test_diet_type_does_not_change_workouts(#[case] goal: Goal) {
        let veg = compute_plan(&reference_profile(goal, 2.0));
        let non_veg = compute_plan(&Profile {
            diet_type: DietType::NonVegetarian,
            ..reference_profile(goal, 2.0)
        });
        assert_eq!(veg.workout_days, non_veg.workout_days);
        assert_ne!(veg.diet_meals, non_veg.diet_meals);
    }

    #[test]
    fn test_compute_plan_is_deterministic() {
        let profile = reference_profile(Goal::WeightLoss, 7.5);
        let first = compute_plan(&profile);
        let second = compute_plan(&profile);
        assert_eq!(first, second);
        assert_eq!(first.daily_calories.to_bits(), second.daily_calories.to_bits());
    }

    #[test]
    fn test_compute_plan_from_form_rejects_unknown_activity() {
        let form = RawProfileForm {
            activity: String::new(),
            ..RawProfileForm::example()
        };
        let err = compute_plan_from_form(form).unwrap_err();
        assert!(matches!(err, PlanError::UnrecognizedEnum { ref field, .. } if field == "activity"));
    }

    #[test]
    fn test_compute_plan_from_form_matches_direct_call() {
        let form = RawProfileForm::example();
        let profile = form.clone().into_profile().unwrap();
        assert_eq!(compute_plan_from_form(form).unwrap(), compute_plan(&profile));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn goal_strategy() -> impl Strategy<Value = Goal> {
        prop_oneof![Just(Goal::WeightLoss), Just(Goal::WeightGain), Just(Goal::Maintain)]
    }

    fn activity_strategy() -> impl Strategy<Value = ActivityLevel> {
        prop::sample::select(ActivityLevel::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: plan shape never depends on the numbers
        #[test]
        fn prop_plan_shape_is_fixed(
            goal in goal_strategy(),
            activity in activity_strategy(),
            weight in 1.0f64..300.0,
            height in 30.0f64..250.0,
            age in 1u32..110,
            target in 0.0f64..50.0
        ) {
            let profile = Profile {
                name: Name().fake(),
                age,
                weight_kg: weight,
                height_cm: height,
                sex: Sex::Female,
                activity_level: activity,
                goal,
                target_delta_kg: target,
                diet_type: DietType::NonVegetarian,
            };
            let plan = compute_plan(&profile);
            prop_assert_eq!(plan.diet_meals.len(), 4);
            prop_assert_eq!(plan.workout_days.len(), 7);
            prop_assert_eq!(plan.days_required.is_some(), goal.has_target());
            prop_assert_eq!(plan.target_delta_kg.is_some(), goal.has_target());
            prop_assert_eq!(&plan.name, &profile.name);
        }

        /// Property: loss and gain sit exactly 500 kcal either side of maintenance
        #[test]
        fn prop_loss_and_gain_are_symmetric(
            activity in activity_strategy(),
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80
        ) {
            let base = Profile {
                name: "P".to_string(),
                age,
                weight_kg: weight,
                height_cm: height,
                sex: Sex::Male,
                activity_level: activity,
                goal: Goal::Maintain,
                target_delta_kg: 5.0,
                diet_type: DietType::Vegetarian,
            };
            let maintain = compute_plan(&base).daily_calories;
            let loss = compute_plan(&Profile { goal: Goal::WeightLoss, ..base.clone() }).daily_calories;
            let gain = compute_plan(&Profile { goal: Goal::WeightGain, ..base.clone() }).daily_calories;

            let expected = calculate_bmr_mifflin(weight, height, age, Sex::Male) * activity.multiplier();
            prop_assert!((maintain - expected).abs() < 1e-9);
            prop_assert!((maintain - loss - 500.0).abs() < 1e-9);
            prop_assert!((gain - maintain - 500.0).abs() < 1e-9);
        }

        /// Property: a larger target never needs fewer days
        #[test]
        fn prop_days_monotone_in_target(a in 0.0f64..40.0, b in 0.0f64..40.0) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            let days_small = compute_plan(&reference_profile(Goal::WeightLoss, small)).days_required;
            let days_large = compute_plan(&reference_profile(Goal::WeightLoss, large)).days_required;
            prop_assert!(days_small <= days_large);
        }
    }
}
