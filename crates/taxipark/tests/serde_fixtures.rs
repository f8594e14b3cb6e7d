//! Building a park from serialized fixture data.
//!
//! Domain types derive serde traits so callers can load datasets from
//! JSON fixtures; this exercises the derived representation end to end
//! against the query surface.

use taxipark::{Driver, TaxiPark};

#[test]
fn park_builds_from_json_fixture() {
    let fixture = r#"{
        "all_drivers": ["D-1", "D-2", "D-3"],
        "all_passengers": ["P-1", "P-2"],
        "trips": [
            { "driver": "D-1", "passengers": ["P-1"], "duration": 5, "cost": 10.0, "discount": null },
            { "driver": "D-1", "passengers": ["P-1", "P-2"], "duration": 7, "cost": 8.0, "discount": 0.1 }
        ]
    }"#;

    let park: TaxiPark = serde_json::from_str(fixture).unwrap();

    assert_eq!(
        park.fake_drivers(),
        [Driver::new("D-2"), Driver::new("D-3")].into_iter().collect()
    );
    assert_eq!(park.most_frequent_trip_duration_period(), Some(0..=9));
    assert_eq!(park.frequent_passengers(&Driver::new("D-1")).len(), 1);
    assert!(!park.check_pareto_principle());
}

#[test]
fn missing_discount_field_reads_as_none() {
    let fixture = r#"{
        "all_drivers": ["D-1"],
        "all_passengers": ["P-1"],
        "trips": [
            { "driver": "D-1", "passengers": ["P-1"], "duration": 30, "cost": 12.5 }
        ]
    }"#;

    let park: TaxiPark = serde_json::from_str(fixture).unwrap();

    assert!(!park.trips[0].discounted());
    assert!(park.smart_passengers().is_empty());
}
