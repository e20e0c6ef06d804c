use pretty_assertions::assert_eq;
use strata::Db;
use strata_driver_json::Json;
use tests::{Airport, Pipeline, Sample};

#[test]
fn open_by_table_path() {
    let sample = Sample::new();

    let airports = Db::builder()
        .initialize_host(false)
        .open_table_path::<Airport>(Json, sample.path().join("airport_pt"))
        .unwrap();

    assert_eq!(airports.table().name(), "airport_pt");
    assert_eq!(airports.all().unwrap().len(), 7);
}

#[test]
fn directory_catalog() {
    let sample = Sample::with_catalog("Canada.gdb");
    let names = sample.connect().catalog().table_names().unwrap();

    assert_eq!(names, ["airport_pt", "pipelines_l", "prot_areas_p"]);
}

#[test]
fn open_with_builtin_driver() {
    let sample = Sample::new();

    let db = Db::builder()
        .initialize_host(false)
        .open(sample.path())
        .unwrap();

    assert_eq!(db.open::<Pipeline>("pipelines_l").unwrap().all().unwrap().len(), 3);
}

#[test]
fn two_sessions_on_one_table() {
    let sample = Sample::new();
    let open = || {
        Db::builder()
            .initialize_host(false)
            .open_table_path::<Airport>(Json, sample.path().join("airport_pt"))
            .unwrap()
    };

    let first = open();
    let second = open();

    let yellowknife = Airport {
        name: "Yellowknife".to_string(),
        ..Airport::default()
    };

    let a = first.insert([&yellowknife]).unwrap();
    let b = second.insert([&yellowknife]).unwrap();
    assert_eq!(a, [8]);
    assert_eq!(b, [9]);

    let ids: Vec<i64> = open()
        .all()
        .unwrap()
        .iter()
        .map(|airport| airport.objectid)
        .collect();
    assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    assert_eq!(first.all().unwrap().len(), 9);
}
