use crate::domain::model::RideVector;
use crate::domain::ports::Selector;
use crate::utils::error::Result;

/// Greedy heuristic: repeatedly take the affordable ride with the greatest
/// time, subtracting its cost from the remaining budget, until nothing
/// affordable is left. Ties go to the ride earliest in source order.
///
/// The result is in selection order (descending time except where bounded by
/// affordability). A negative budget behaves like a zero budget and yields an
/// empty selection. Not guaranteed optimal; see `exhaustive_max_time`.
pub fn greedy_max_time(rides: &RideVector, budget: f64) -> RideVector {
    let mut remaining = budget;
    let mut taken = vec![false; rides.len()];
    let mut result = RideVector::new();

    loop {
        let mut best: Option<usize> = None;
        for (i, ride) in rides.iter().enumerate() {
            if taken[i] || ride.cost() > remaining {
                continue;
            }
            // Strict comparison keeps the earliest index on ties.
            match best {
                Some(b) if rides[b].time() >= ride.time() => {}
                _ => best = Some(i),
            }
        }

        match best {
            Some(i) => {
                taken[i] = true;
                remaining -= rides[i].cost();
                result.push(rides[i].clone());
            }
            None => break,
        }
    }

    result
}

pub struct GreedySelector;

impl Selector for GreedySelector {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select(&self, rides: &RideVector, budget: f64) -> Result<RideVector> {
        Ok(greedy_max_time(rides, budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RideItem;
    use crate::utils::report::sum_ride_vector;
    use std::sync::Arc;

    fn trivial_rides() -> RideVector {
        vec![
            Arc::new(RideItem::new("test Ferris Wheel", 100.0, 20.0).unwrap()),
            Arc::new(RideItem::new("test Speedway", 40.0, 5.0).unwrap()),
        ]
    }

    #[test]
    fn test_budget_too_small_for_anything() {
        assert!(greedy_max_time(&trivial_rides(), 10.0).is_empty());
    }

    #[test]
    fn test_cheaper_ride_when_best_unaffordable() {
        let soln = greedy_max_time(&trivial_rides(), 99.0);
        assert_eq!(soln.len(), 1);
        assert_eq!(soln[0].description(), "test Speedway");
    }

    #[test]
    fn test_highest_time_ride_when_it_fits() {
        let soln = greedy_max_time(&trivial_rides(), 100.0);
        assert_eq!(soln.len(), 1);
        assert_eq!(soln[0].description(), "test Ferris Wheel");
    }

    #[test]
    fn test_both_rides_fit() {
        let soln = greedy_max_time(&trivial_rides(), 150.0);
        assert_eq!(soln.len(), 2);
        assert_eq!(soln[0].description(), "test Ferris Wheel");
        assert_eq!(soln[1].description(), "test Speedway");

        let totals = sum_ride_vector(&soln);
        assert_eq!(totals.cost_dollars, 140.0);
        assert_eq!(totals.time_minutes, 25.0);
    }

    #[test]
    fn test_negative_budget_is_empty() {
        assert!(greedy_max_time(&trivial_rides(), -1.0).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(greedy_max_time(&RideVector::new(), 1000.0).is_empty());
    }

    #[test]
    fn test_tie_break_prefers_earliest() {
        let rides: RideVector = vec![
            Arc::new(RideItem::new("First Twin", 10.0, 7.0).unwrap()),
            Arc::new(RideItem::new("Second Twin", 10.0, 7.0).unwrap()),
        ];
        let soln = greedy_max_time(&rides, 10.0);
        assert_eq!(soln.len(), 1);
        assert_eq!(soln[0].description(), "First Twin");
    }

    #[test]
    fn test_never_exceeds_budget_and_idempotent() {
        let rides: RideVector = [
            ("a", 30.0, 9.0),
            ("b", 20.0, 6.0),
            ("c", 50.0, 14.0),
            ("d", 10.0, 2.0),
        ]
        .into_iter()
        .map(|(d, c, t)| Arc::new(RideItem::new(d, c, t).unwrap()))
        .collect();

        for budget in [0.0, 15.0, 45.0, 80.0, 200.0] {
            let first = greedy_max_time(&rides, budget);
            assert!(sum_ride_vector(&first).cost_dollars <= budget);
            let second = greedy_max_time(&rides, budget);
            assert_eq!(first, second);
        }
    }
}
