//! Food search with simulated lookup latency
//!
//! Each call to [`FoodSearchService::search`] claims a generation number
//! before its future is first polled. When the delay elapses the search only
//! reports a result if no newer search was started in the meantime.

use fitness_planner_shared::food::{food_suggestions, lookup_food, NutritionFacts};
use fitness_planner_shared::PlanError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::FoodSearchConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(NutritionFacts),
    NotFound { suggestions: Vec<String> },
    /// A newer search was started before this one finished
    Superseded,
}

/// Cheap to clone; clones share the generation counter
#[derive(Debug, Clone)]
pub struct FoodSearchService {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl FoodSearchService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_config(config: &FoodSearchConfig) -> Self {
        Self::new(config.delay())
    }

    /// Start a search for `query`
    ///
    /// An empty query is rejected without sleeping and without superseding
    /// the search in flight.
    pub fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchOutcome, PlanError>> + Send + 'static {
        let query = query.trim().to_string();
        let ticket = if query.is_empty() {
            None
        } else {
            Some(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
        };
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;

        async move {
            let ticket =
                ticket.ok_or_else(|| PlanError::invalid("food", "Please enter a food item"))?;
            debug!(query = %query, ticket, "Food search started");

            tokio::time::sleep(delay).await;

            if generation.load(Ordering::SeqCst) != ticket {
                debug!(query = %query, ticket, "Food search superseded");
                return Ok(SearchOutcome::Superseded);
            }

            Ok(match lookup_food(&query) {
                Some(facts) => SearchOutcome::Found(facts),
                None => SearchOutcome::NotFound {
                    suggestions: food_suggestions().map(str::to_string).collect(),
                },
            })
        }
    }
}
