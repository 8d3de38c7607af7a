use crate::adapters::loader::load_ride_database;
use crate::core::exhaustive::ExhaustiveSelector;
use crate::core::filter::filter_ride_vector;
use crate::core::greedy::GreedySelector;
use crate::domain::model::RideVector;
use crate::domain::ports::{PlannerConfig, Selector};
use crate::utils::error::Result;
use crate::utils::report::{sum_ride_vector, RideTotals};

#[derive(Debug)]
pub struct PlanSummary {
    pub catalog_size: usize,
    pub candidate_count: usize,
    pub greedy: RideVector,
    pub greedy_totals: RideTotals,
    pub exhaustive: RideVector,
    pub exhaustive_totals: RideTotals,
}

/// Drives the whole planning run: load the catalog, filter it down to a
/// bounded candidate list, then let each selection strategy pick a subset.
pub struct Planner<C: PlannerConfig> {
    config: C,
}

impl<C: PlannerConfig> Planner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<PlanSummary> {
        tracing::info!("Loading ride database from {}", self.config.database_path());
        let catalog = load_ride_database(self.config.database_path())?;
        tracing::info!("Loaded {} rides", catalog.len());

        let candidates = filter_ride_vector(
            &catalog,
            self.config.min_time(),
            self.config.max_time(),
            self.config.candidate_limit(),
        );
        tracing::info!(
            "Filtered to {} candidates (time window {}..={} minutes, limit {})",
            candidates.len(),
            self.config.min_time(),
            self.config.max_time(),
            self.config.candidate_limit()
        );

        let budget = self.config.budget();
        let greedy = self.run_selector(&GreedySelector, &candidates, budget)?;
        let exhaustive = self.run_selector(&ExhaustiveSelector, &candidates, budget)?;

        Ok(PlanSummary {
            catalog_size: catalog.len(),
            candidate_count: candidates.len(),
            greedy_totals: sum_ride_vector(&greedy),
            greedy,
            exhaustive_totals: sum_ride_vector(&exhaustive),
            exhaustive,
        })
    }

    fn run_selector(
        &self,
        selector: &dyn Selector,
        candidates: &RideVector,
        budget: f64,
    ) -> Result<RideVector> {
        let selection = selector.select(candidates, budget)?;
        let totals = sum_ride_vector(&selection);
        tracing::info!(
            "{} selection: {} rides, {} dollars, {} minutes",
            selector.name(),
            selection.len(),
            totals.cost_dollars,
            totals.time_minutes
        );
        Ok(selection)
    }
}
