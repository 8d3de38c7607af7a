use crate::domain::model::RideVector;
use crate::domain::ports::Selector;
use crate::utils::error::{PlannerError, Result};

/// Exhaustive search: enumerate every subset of `rides` and return the one
/// with the greatest total time whose total cost fits the budget.
///
/// Subsets are visited in increasing numeric order of their bitmask, items
/// indexed in source order; the first subset found with a strictly greater
/// total time wins, so ties are deterministic. The empty subset is the
/// initial best, which also makes a negative budget come back empty rather
/// than fail. The winning subset is returned in source order.
///
/// The enumeration index is a `u64`, one bit per ride, so the catalog must
/// hold fewer than 64 rides; larger inputs are rejected with
/// `TooManyCandidates` instead of overflowing.
pub fn exhaustive_max_time(rides: &RideVector, budget: f64) -> Result<RideVector> {
    let n = rides.len();
    if n >= 64 {
        return Err(PlannerError::TooManyCandidates { count: n });
    }

    let mut best_mask: u64 = 0;
    let mut best_time = 0.0;
    let mut best_found = false;

    for mask in 0..(1u64 << n) {
        let mut cost = 0.0;
        let mut time = 0.0;
        for (i, ride) in rides.iter().enumerate() {
            if mask & (1 << i) != 0 {
                cost += ride.cost();
                time += ride.time();
            }
        }

        if cost <= budget && (!best_found || time > best_time) {
            best_mask = mask;
            best_time = time;
            best_found = true;
        }
    }

    let result = rides
        .iter()
        .enumerate()
        .filter(|(i, _)| best_mask & (1 << i) != 0)
        .map(|(_, ride)| ride.clone())
        .collect();

    Ok(result)
}

pub struct ExhaustiveSelector;

impl Selector for ExhaustiveSelector {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn select(&self, rides: &RideVector, budget: f64) -> Result<RideVector> {
        exhaustive_max_time(rides, budget)
    }
}
