//! Session state
//!
//! The planner has three views: the profile form, the calculated results and
//! the food lookup. A session owns at most one plan; the results view is only
//! reachable while that plan exists.

use crate::error::{AppError, AppResult};
use fitness_planner_shared::plan::compute_plan_from_form;
use fitness_planner_shared::validation::RawProfileForm;
use fitness_planner_shared::Plan;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Profile,
    Results,
    Food,
}

#[derive(Debug, Default)]
pub struct Session {
    view: View,
    plan: Option<Plan>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn view(&self) -> View {
        self.view
    }

    #[inline]
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Validate the form and store the resulting plan
    ///
    /// On success the session switches to the results view. On failure the
    /// view and any previous plan are left untouched.
    pub fn calculate(&mut self, form: RawProfileForm) -> AppResult<&Plan> {
        let plan = compute_plan_from_form(form)?;
        debug!(goal = %plan.goal, daily_calories = plan.daily_calories, "Plan calculated");
        self.view = View::Results;
        Ok(&*self.plan.insert(plan))
    }

    /// Discard the plan and go back to the profile form
    pub fn reset(&mut self) {
        self.plan = None;
        self.view = View::Profile;
    }

    pub fn select_view(&mut self, view: View) -> AppResult<()> {
        if view == View::Results && self.plan.is_none() {
            return Err(AppError::NoPlan);
        }
        self.view = view;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_form() -> RawProfileForm {
        RawProfileForm {
            name: "Ravi".to_string(),
            age: "25".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
            gender: "male".to_string(),
            activity: "moderate".to_string(),
            goal: "weight loss".to_string(),
            diet_type: "vegetarian".to_string(),
            ..RawProfileForm::default()
        }
    }

    #[test]
    fn test_new_session_starts_on_profile() {
        let session = Session::new();
        assert_eq!(session.view(), View::Profile);
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_calculate_switches_to_results() {
        let mut session = Session::new();
        let days = session.calculate(reference_form()).unwrap().days_required;

        assert_eq!(days, Some(77));
        assert_eq!(session.view(), View::Results);
        assert!(session.plan().is_some());
    }

    #[test]
    fn test_failed_calculation_keeps_view_and_plan() {
        let mut session = Session::new();
        session.calculate(reference_form()).unwrap();
        session.select_view(View::Food).unwrap();

        let bad = RawProfileForm {
            weight: "abc".to_string(),
            ..reference_form()
        };
        assert!(session.calculate(bad).is_err());
        assert_eq!(session.view(), View::Food);
        assert_eq!(session.plan().and_then(|p| p.days_required), Some(77));
    }

    #[test]
    fn test_reset_discards_plan() {
        let mut session = Session::new();
        session.calculate(reference_form()).unwrap();
        session.reset();

        assert_eq!(session.view(), View::Profile);
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_results_refused_without_plan() {
        let mut session = Session::new();
        assert!(matches!(session.select_view(View::Results), Err(AppError::NoPlan)));
        assert_eq!(session.view(), View::Profile);

        session.select_view(View::Food).unwrap();
        assert_eq!(session.view(), View::Food);
        session.select_view(View::Profile).unwrap();
        assert_eq!(session.view(), View::Profile);
    }

    #[test]
    fn test_results_allowed_after_calculation() {
        let mut session = Session::new();
        session.calculate(reference_form()).unwrap();
        session.select_view(View::Profile).unwrap();
        session.select_view(View::Results).unwrap();
        assert_eq!(session.view(), View::Results);
    }
}
