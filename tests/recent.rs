mod common;

use activity_dash::pipeline::recent::{recent_activities, ActivityCard};
use common::{date, record};

#[test]
fn cards_are_formatted_for_display() {
    let mut activity = record(0, "Ride", Some(date(2024, 6, 9)), Some(42.123), Some(95.6), Some(310.4));
    activity.name = "Sunday Loop".to_string();

    let card = ActivityCard::from_record(&activity);

    assert_eq!(card.name, "Sunday Loop");
    assert_eq!(card.activity_type, "Ride");
    assert_eq!(card.distance, "42.12 km");
    assert_eq!(card.moving_time, "96 min");
    assert_eq!(card.elevation, "310 m");
    assert_eq!(card.date, "09/06/24");
}

#[test]
fn missing_values_render_as_dashes() {
    let card = ActivityCard::from_record(&record(0, "Run", None, None, None, None));

    assert_eq!(card.distance, "-");
    assert_eq!(card.moving_time, "-");
    assert_eq!(card.elevation, "-");
    assert_eq!(card.date, "-");
}

#[test]
fn newest_first_regardless_of_source_order() {
    let records = vec![
        record(0, "Run", Some(date(2024, 5, 1)), Some(1.0), Some(1.0), None),
        record(1, "Run", Some(date(2024, 6, 1)), Some(1.0), Some(1.0), None),
        record(2, "Run", None, None, None, None),
        record(3, "Run", Some(date(2024, 5, 15)), Some(1.0), Some(1.0), None),
        record(4, "Run", Some(date(2024, 6, 1)), Some(1.0), Some(1.0), None),
    ];

    let cards = recent_activities(&records, 10);

    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Activity 1", "Activity 4", "Activity 3", "Activity 0", "Activity 2"]
    );
}

#[test]
fn list_is_limited() {
    let records: Vec<_> = (0..25)
        .map(|i| record(i, "Ride", Some(date(2024, 1, 1 + i as u32)), Some(1.0), Some(1.0), None))
        .collect();

    let cards = recent_activities(&records, 10);

    assert_eq!(cards.len(), 10);
    assert_eq!(cards[0].date, "25/01/24");
    assert_eq!(cards[9].date, "16/01/24");
}
