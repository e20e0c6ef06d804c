use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use strata::{stmt::Type, Mapping, Record};
use tests::{airport_schema, Airport, ProtectedArea, Sample};

#[test]
fn building_twice_gives_the_same_mapping() {
    let schema = airport_schema();
    let renames = IndexMap::new();

    let first = Mapping::build(&Airport::attributes(), &schema, &renames).unwrap();
    let second = Mapping::build(&Airport::attributes(), &schema, &renames).unwrap();
    assert_eq!(first, second);

    let sample = Sample::new();
    let db = sample.connect();
    let a = db.open::<Airport>("airport_pt").unwrap();
    let b = db.open::<Airport>("airport_pt").unwrap();
    assert_eq!(a.mapping(), b.mapping());
    assert_eq!(a.mapping(), &first);
}

#[test]
fn columns_are_resolved() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();
    let mapping = airports.mapping();

    assert_eq!(mapping.identifier().name, "OBJECTID");
    assert_eq!(
        mapping.projection(),
        ["OBJECTID", "name_e", "Class", "Elevation", "Opened", "Shape"]
    );
    assert_eq!(mapping.by_attribute("name").unwrap().column.name, "name_e");
    assert_eq!(mapping.by_column("CLASS").unwrap().attribute.name, "class");

    let writable: Vec<_> = mapping.writable().map(|f| f.column.name.as_str()).collect();
    assert_eq!(writable, ["name_e", "Class", "Elevation", "Opened", "Shape"]);
}

#[test]
fn flattened_attributes_follow_own_attributes() {
    let names: Vec<_> = ProtectedArea::attributes()
        .into_iter()
        .map(|attribute| attribute.name)
        .collect();
    assert_eq!(names, ["name", "area_km2", "objectid", "shape"]);
    assert_eq!(ProtectedArea::ATTRIBUTE_COUNT, 4);

    let sample = Sample::new();
    let areas = sample
        .connect()
        .open::<ProtectedArea>("prot_areas_p")
        .unwrap();

    let area = areas
        .filter(ProtectedArea::fields().feature().objectid().eq(2))
        .unwrap()
        .first()
        .unwrap()
        .unwrap();

    assert_eq!(area.name.as_deref(), Some("Nahanni"));
    assert_eq!(area.feature.objectid, 2);
    assert!(area.feature.shape.is_some());
}

#[test]
fn attribute_types() {
    let attributes = Airport::attributes();

    let types: Vec<_> = attributes
        .iter()
        .map(|attribute| (attribute.ty, attribute.nullable))
        .collect();

    assert_eq!(
        types,
        [
            (Type::I64, false),
            (Type::String, false),
            (Type::String, true),
            (Type::I32, true),
            (Type::Timestamp, true),
            (Type::Geometry, true),
        ]
    );
    assert_eq!(attributes[1].column.as_deref(), Some("name_e"));
}

#[test]
fn rename_overrides_declared_column() {
    #[derive(Debug, Default, Record)]
    struct Label {
        objectid: i64,
        label: Option<String>,
    }

    let sample = Sample::new();
    let db = sample.connect();

    let err = db.open::<Label>("airport_pt").unwrap_err();
    assert!(err.is_schema_mismatch(), "{err}");
    assert_eq!(
        err.to_string(),
        "schema mismatch: 'label' was not found in 'airport_pt'"
    );

    let labels = db
        .table::<Label>("airport_pt")
        .rename("LABEL", "NAME_E")
        .open()
        .unwrap();

    let mut labels: Vec<_> = labels
        .all()
        .unwrap()
        .into_iter()
        .filter_map(|record| record.label)
        .collect();
    labels.sort();
    assert_eq!(labels.first().map(String::as_str), Some("Abbotsford"));

    let err = db
        .table::<Airport>("airport_pt")
        .rename("name", "runway")
        .open()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "schema mismatch: 'runway' (mapped from 'name') was not found in 'airport_pt'"
    );
}

#[test]
fn two_attributes_on_one_column() {
    #[derive(Debug, Default, Record)]
    struct Twice {
        objectid: i64,
        #[column("name_e")]
        first: String,
        #[column("NAME_E")]
        second: String,
    }

    let sample = Sample::new();
    let err = sample.connect().open::<Twice>("airport_pt").unwrap_err();
    assert!(err.is_schema_mismatch(), "{err}");
}

#[test]
fn materialization_errors_name_the_attribute() {
    #[derive(Debug, Default, Record)]
    struct BadClass {
        objectid: i64,
        class: Option<i32>,
    }

    let sample = Sample::new();
    let records = sample.connect().open::<BadClass>("airport_pt").unwrap();

    let mut cursor = records.query().unwrap();
    let err = cursor.next().unwrap().unwrap_err();

    assert!(err.is_materialization(), "{err}");
    assert!(err.is_type_conversion(), "{err}");
    assert!(err.to_string().contains("BadClass.class"), "{err}");
    assert!(err.to_string().starts_with("could not convert String to i32"), "{err}");

    // The cursor stops after an error.
    assert!(cursor.is_failed());
    assert!(cursor.next().is_none());
}
