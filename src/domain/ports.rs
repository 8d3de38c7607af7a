use crate::domain::model::RideVector;
use crate::utils::error::Result;

/// A selection strategy: given a catalog and a dollar budget, produce the
/// chosen subset. Implementations are pure and stateless across calls.
pub trait Selector {
    fn name(&self) -> &'static str;
    fn select(&self, rides: &RideVector, budget: f64) -> Result<RideVector>;
}

pub trait PlannerConfig {
    fn database_path(&self) -> &str;
    fn budget(&self) -> f64;
    fn min_time(&self) -> f64;
    fn max_time(&self) -> f64;
    fn candidate_limit(&self) -> usize;
}
