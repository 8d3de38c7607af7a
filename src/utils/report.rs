use crate::domain::model::RideVector;

/// Summed cost and time of a ride selection. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideTotals {
    pub cost_dollars: f64,
    pub time_minutes: f64,
}

pub fn sum_ride_vector(rides: &RideVector) -> RideTotals {
    let mut totals = RideTotals {
        cost_dollars: 0.0,
        time_minutes: 0.0,
    };
    for ride in rides {
        totals.cost_dollars += ride.cost();
        totals.time_minutes += ride.time();
    }
    totals
}

/// Dump each ride plus grand totals. Diagnostics only.
pub fn print_ride_vector(rides: &RideVector) {
    println!("*** ride vector ***");

    if rides.is_empty() {
        println!("[empty ride list]");
        return;
    }

    for ride in rides {
        println!(
            "{} ==> cost of {} dollars; time in minutes = {}",
            ride.description(),
            ride.cost(),
            ride.time()
        );
    }

    let totals = sum_ride_vector(rides);
    println!("> Grand total cost: {} dollars", totals.cost_dollars);
    println!("> Grand total time: {} minutes", totals.time_minutes);
}
