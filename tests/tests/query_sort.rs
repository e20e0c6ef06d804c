use pretty_assertions::assert_eq;
use strata::FeatureClass;
use tests::{sorted_airport_names, Airport, Sample};

fn names(airports: &FeatureClass<Airport>) -> Vec<String> {
    airports
        .all()
        .unwrap()
        .into_iter()
        .map(|airport| airport.name)
        .collect()
}

#[test]
fn sort_ascending() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let sorted = airports.order_by(Airport::fields().name()).unwrap();
    assert_eq!(names(&sorted), sorted_airport_names());

    let sorted = airports.order_by(Airport::fields().name().asc()).unwrap();
    assert_eq!(names(&sorted), sorted_airport_names());
}

#[test]
fn sort_descending() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let sorted = airports.order_by(Airport::fields().name().desc()).unwrap();

    let mut expect = sorted_airport_names();
    expect.reverse();
    assert_eq!(names(&sorted), expect);
}

#[test]
fn sort_by_several_keys() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let sorted = airports
        .order_by(Airport::fields().class())
        .unwrap()
        .order_by(Airport::fields().name().desc())
        .unwrap();

    assert_eq!(
        sorted.query_descriptor().sort_keys().len(),
        2,
        "{:?}",
        sorted.query_descriptor()
    );

    // Nulls sort first.
    assert_eq!(
        names(&sorted),
        [
            "Bagotville",
            "Alert",
            "Brandon",
            "Ottawa",
            "Gander",
            "Iqaluit",
            "Abbotsford"
        ]
    );
}

#[test]
fn sort_by_raw_column() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let sorted = airports
        .filter(Airport::fields().elevation().is_some())
        .unwrap()
        .order_by_field("Elevation", true);

    assert_eq!(
        names(&sorted),
        ["Brandon", "Gander", "Ottawa", "Abbotsford", "Iqaluit", "Alert"]
    );
}

#[test]
fn builders_leave_the_original_alone() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let _sorted = airports.order_by(Airport::fields().name().desc()).unwrap();
    let _filtered = airports.filter_by("Elevation > 100");

    assert!(airports.query_descriptor().sort_keys().is_empty());
    assert!(airports.query_descriptor().where_clauses().is_empty());
    assert_eq!(airports.all().unwrap().len(), 7);
}
