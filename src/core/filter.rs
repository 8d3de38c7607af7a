use crate::domain::model::RideVector;

/// Build a new vector with the rides whose time lies in
/// `[min_time, max_time]` (inclusive), in source order, truncated to the
/// first `limit` matches.
///
/// This removes zero/negative-time rides, which are irrelevant to a
/// time-maximization objective, and caps the candidate count fed to the
/// exhaustive search. An empty result is a valid result, not a failure.
pub fn filter_ride_vector(
    source: &RideVector,
    min_time: f64,
    max_time: f64,
    limit: usize,
) -> RideVector {
    source
        .iter()
        .filter(|ride| ride.time() >= min_time && ride.time() <= max_time)
        .take(limit)
        .cloned()
        .collect()
}
