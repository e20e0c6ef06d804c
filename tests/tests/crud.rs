use pretty_assertions::assert_eq;
use strata::{
    schema::{Field, TableSchema},
    stmt::Type,
    Db, Geometry, Record,
};
use strata_driver_json::Json;
use tests::{airports, Airport, Pipeline, Sample};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Count {
    objectid: i64,
    total: Option<i32>,
}

#[test]
fn round_trip() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let new = Airport {
        name: "Yellowknife".to_string(),
        class: Some("Regional".to_string()),
        elevation: Some(206),
        shape: Some(Geometry::point(-114.44, 62.46)),
        ..Airport::default()
    };

    let stored = airports.insert_one(&new).unwrap();
    assert!(stored.objectid > 0);
    assert_eq!(Airport { objectid: 0, ..stored.clone() }, new);

    let read = airports
        .filter(Airport::fields().objectid().eq(stored.objectid))
        .unwrap()
        .first()
        .unwrap()
        .unwrap();
    assert_eq!(read, stored);
}

#[test]
fn insert_returns_distinct_identifiers() {
    let sample = Sample::new();
    let db = sample.connect();
    let airports = db.open::<Airport>("airport_pt").unwrap();

    let mut batch = airports.all().unwrap();
    batch.extend(airports.all().unwrap().into_iter().take(3));
    assert_eq!(batch.len(), 10);

    let ids = airports.insert(&batch).unwrap();
    assert_eq!(ids.len(), 10);

    let mut distinct = ids.clone();
    distinct.dedup();
    assert_eq!(distinct, ids);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "{ids:?}");

    assert_eq!(airports.all().unwrap().len(), 17);
}

#[test]
fn insert_same_record_twice() {
    let sample = Sample::new();
    let pipelines = sample.connect().open::<Pipeline>("pipelines_l").unwrap();

    let pipeline = pipelines.first().unwrap().unwrap();
    let first = pipelines.insert([&pipeline]).unwrap();
    let second = pipelines.insert([&pipeline]).unwrap();

    assert_eq!(second[0] - first[0], 1);
}

#[test]
fn insert_identifiers_follow_the_seeded_rows() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let existing: Vec<_> = airports
        .all()
        .unwrap()
        .into_iter()
        .map(|airport| airport.objectid)
        .collect();
    assert_eq!(existing, [1, 2, 3, 4, 5, 6, 7]);

    // The identifier of the record passed in is never written.
    let record = Airport {
        objectid: 1,
        ..airports.first().unwrap().unwrap()
    };
    assert_eq!(airports.insert([&record]).unwrap(), [8]);
}

#[test]
fn update_every_row() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let count = airports
        .update(|airport| Airport {
            class: Some("Ottawa".to_string()),
            ..airport
        })
        .unwrap();
    assert_eq!(count, 7);

    // Re-read through a new session.
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let classes: Vec<_> = airports
        .all()
        .unwrap()
        .into_iter()
        .map(|airport| airport.class)
        .collect();

    assert_eq!(classes, vec![Some("Ottawa".to_string()); 7]);
}

#[test]
fn update_filtered_rows_in_place() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let count = airports
        .filter(Airport::fields().class().is_none())
        .unwrap()
        .update_in_place(|airport| airport.elevation = Some(0))
        .unwrap();
    assert_eq!(count, 2);

    let zero: Vec<_> = airports
        .filter(Airport::fields().elevation().eq(0))
        .unwrap()
        .order_by(Airport::fields().name())
        .unwrap()
        .all()
        .unwrap()
        .into_iter()
        .map(|airport| airport.name)
        .collect();
    assert_eq!(zero, ["Alert", "Bagotville"]);
}

#[test]
fn update_the_filtered_attribute() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let major = airports.filter(Airport::fields().class().eq("Major")).unwrap();

    let updated: Vec<_> = major
        .updates(|airport| Airport {
            class: Some("International".to_string()),
            ..airport
        })
        .unwrap()
        .collect::<strata::Result<_>>()
        .unwrap();

    assert_eq!(updated.len(), 2);
    assert!(major.all().unwrap().is_empty());
    assert_eq!(
        airports
            .filter(Airport::fields().class().eq("International"))
            .unwrap()
            .all()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn update_keeps_unmapped_columns() {
    #[derive(Debug, Default, strata::Record)]
    struct Name {
        objectid: i64,
        #[column("name_e")]
        name: String,
    }

    let sample = Sample::new();
    let db = sample.connect();

    db.open::<Name>("airport_pt")
        .unwrap()
        .update_in_place(|record| record.name = record.name.to_uppercase())
        .unwrap();

    let read = db.open::<Airport>("airport_pt").unwrap().all().unwrap();
    let expect = airports();

    for (read, expect) in read.iter().zip(&expect) {
        assert_eq!(read.name, expect.name.to_uppercase());
        assert_eq!(read.class, expect.class);
        assert_eq!(read.shape, expect.shape);
    }
}

#[test]
fn delete_starts_with() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let starts_with_a = airports
        .filter(Airport::fields().name().starts_with("A"))
        .unwrap();

    assert_eq!(starts_with_a.delete().unwrap(), 2);
    assert_eq!(starts_with_a.query().unwrap().count(), 0);
    assert_eq!(airports.all().unwrap().len(), 5);
}

#[test]
fn delete_without_filter_removes_everything() {
    let sample = Sample::new();
    let pipelines = sample.connect().open::<Pipeline>("pipelines_l").unwrap();

    assert_eq!(pipelines.delete().unwrap(), 3);
    assert!(pipelines.first().unwrap().is_none());
}

#[test]
fn failed_insert_aborts_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Counts.geodatabase");

    let schema = TableSchema::new(
        "counts",
        vec![
            Field::identifier("OBJECTID"),
            Field::new("total", Type::I32).required(),
        ],
    );
    Json::create_table(&path, schema).unwrap();

    let db = Db::builder().initialize_host(false).connect(Json, &path).unwrap();
    let counts = db.open::<Count>("counts").unwrap();

    let batch = [Some(1), None, Some(3)].map(|total| Count {
        total,
        ..Count::default()
    });

    let err = counts.insert(&batch).unwrap_err();
    assert_eq!(err.to_string(), "'total' of 'counts' does not accept null");

    let stored = counts.all().unwrap();
    assert_eq!(
        stored,
        [Count {
            objectid: 1,
            total: Some(1),
        }]
    );
}
