use ride_planner::{
    exhaustive_max_time, filter_ride_vector, greedy_max_time, load_ride_database,
    sum_ride_vector, RideItem, RideVector,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn trivial_rides() -> RideVector {
    vec![
        Arc::new(RideItem::new("test Ferris Wheel", 100.0, 20.0).unwrap()),
        Arc::new(RideItem::new("test Speedway", 40.0, 5.0).unwrap()),
    ]
}

#[test]
fn test_selectors_agree_on_trivial_scenarios() {
    let rides = trivial_rides();

    let expectations: &[(f64, &[&str])] = &[
        (10.0, &[]),
        (99.0, &["test Speedway"]),
        (100.0, &["test Ferris Wheel"]),
        (150.0, &["test Ferris Wheel", "test Speedway"]),
    ];

    for (budget, expected) in expectations {
        let greedy = greedy_max_time(&rides, *budget);
        let exhaustive = exhaustive_max_time(&rides, *budget).unwrap();

        let greedy_names: Vec<&str> = greedy.iter().map(|r| r.description()).collect();
        let exhaustive_names: Vec<&str> = exhaustive.iter().map(|r| r.description()).collect();

        assert_eq!(&greedy_names, expected, "greedy at budget {}", budget);
        assert_eq!(
            &exhaustive_names, expected,
            "exhaustive at budget {}",
            budget
        );
    }
}

#[test]
fn test_filtered_catalog_feeds_both_selectors() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        "description^cost^time\n\
         Carousel^10^4\n\
         Ferris Wheel^100^20\n\
         Haunted House^25^0\n\
         Speedway^40^5\n\
         Log Flume^30^8\n\
         Maintenance Walk^5^-1\n"
            .as_bytes(),
    )
    .unwrap();

    let catalog = load_ride_database(file.path()).unwrap();
    assert_eq!(catalog.len(), 6);

    let candidates = filter_ride_vector(&catalog, 1.0, 2500.0, catalog.len());
    assert_eq!(candidates.len(), 4);

    for budget in [0.0, 35.0, 70.0, 120.0, 180.0] {
        let greedy = greedy_max_time(&candidates, budget);
        let exhaustive = exhaustive_max_time(&candidates, budget).unwrap();

        let greedy_totals = sum_ride_vector(&greedy);
        let exhaustive_totals = sum_ride_vector(&exhaustive);

        assert!(greedy_totals.cost_dollars <= budget);
        assert!(exhaustive_totals.cost_dollars <= budget);
        assert!(exhaustive_totals.time_minutes >= greedy_totals.time_minutes);
    }
}

#[test]
fn test_greedy_matches_optimum_with_dominant_item() {
    // One ride dwarfs everything else and fits the budget; greedy must find
    // the same answer as the exhaustive search.
    let rides: RideVector = vec![
        Arc::new(RideItem::new("Minor A", 10.0, 2.0).unwrap()),
        Arc::new(RideItem::new("Headliner", 50.0, 100.0).unwrap()),
        Arc::new(RideItem::new("Minor B", 10.0, 3.0).unwrap()),
    ];

    let greedy = greedy_max_time(&rides, 70.0);
    let exhaustive = exhaustive_max_time(&rides, 70.0).unwrap();

    assert_eq!(
        sum_ride_vector(&greedy).time_minutes,
        sum_ride_vector(&exhaustive).time_minutes
    );
    assert!(greedy.iter().any(|r| r.description() == "Headliner"));
}
