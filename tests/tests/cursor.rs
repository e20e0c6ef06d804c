use tests::{Airport, Sample};

#[test]
fn cursor_is_lazy_and_fused() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let mut cursor = airports.query().unwrap();
    assert!(!cursor.is_exhausted());

    let first = cursor.next().unwrap().unwrap();
    assert_eq!(first.name, "Ottawa");

    assert_eq!(cursor.by_ref().count(), 6);
    assert!(cursor.is_exhausted());
    assert!(!cursor.is_failed());
    assert!(cursor.next().is_none());
}

#[test]
fn open_cursor_blocks_delete() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let mut cursor = airports.query().unwrap();
    cursor.next().unwrap().unwrap();

    let err = airports.delete().unwrap_err();
    assert!(err.to_string().contains("search cursor is open"), "{err}");

    drop(cursor);
    assert_eq!(airports.delete().unwrap(), 7);
}

#[test]
fn exhausted_cursor_releases_the_table() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let mut cursor = airports.query().unwrap();
    while cursor.next().is_some() {}

    // Still in scope, but no longer holding the store cursor.
    assert!(cursor.is_exhausted());
    assert_eq!(airports.insert([&Airport::default()]).unwrap(), [8]);
}

#[test]
fn empty_result() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let none = airports.filter(Airport::fields().elevation().gt(10_000)).unwrap();

    let mut cursor = none.query().unwrap();
    assert!(cursor.next().is_none());
    assert!(cursor.is_exhausted());
    assert!(none.first().unwrap().is_none());
}

#[test]
fn updates_are_lazy() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let mut updates = airports
        .updates(|airport| Airport {
            elevation: Some(1),
            ..airport
        })
        .unwrap();

    let first = updates.next().unwrap().unwrap();
    assert_eq!(first.elevation, Some(1));
    drop(updates);

    // Only the first row was written.
    let ones = airports
        .filter(Airport::fields().elevation().eq(1))
        .unwrap()
        .all()
        .unwrap();
    assert_eq!(ones.len(), 1);
    assert_eq!(ones[0].name, first.name);
}

#[test]
fn feature_classes_outlive_their_session() {
    let sample = Sample::new();
    let airports = {
        let db = sample.connect();
        db.open::<Airport>("airport_pt").unwrap()
    };

    assert_eq!(airports.all().unwrap().len(), 7);
    assert_eq!(airports.db().path(), sample.path());
}
