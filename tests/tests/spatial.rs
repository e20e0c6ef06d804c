use pretty_assertions::assert_eq;
use strata::{
    Db, Envelope, FeatureClass, Geometry, Point, SpatialReference, SpatialRelationship,
};
use strata_driver_json::Json;
use tests::{Airport, Pipeline, Sample};

fn eastern_canada() -> Geometry {
    Envelope::new(-95.0, 41.0, -74.0, 57.0).into()
}

fn airport_names(airports: &FeatureClass<Airport>) -> Vec<String> {
    airports
        .all()
        .unwrap()
        .into_iter()
        .map(|airport| airport.name)
        .collect()
}

#[test]
fn filter_by_envelope() {
    let sample = Sample::new();
    let db = sample.connect();

    let airports = db
        .open::<Airport>("airport_pt")
        .unwrap()
        .filter_spatial(eastern_canada(), SpatialRelationship::Intersects);
    assert_eq!(airport_names(&airports), ["Ottawa"]);

    let pipelines = db
        .open::<Pipeline>("pipelines_l")
        .unwrap()
        .filter_spatial(eastern_canada(), SpatialRelationship::EnvelopeIntersects)
        .all()
        .unwrap();
    assert_eq!(pipelines.len(), 1);
    assert_eq!(pipelines[0].operator.as_deref(), Some("TC Energy"));
}

#[test]
fn later_spatial_filter_replaces_earlier() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let arctic: Geometry = Envelope::new(-100.0, 60.0, -50.0, 85.0).into();
    let narrowed = airports
        .filter_spatial(eastern_canada(), SpatialRelationship::Intersects)
        .filter_spatial(arctic, SpatialRelationship::Intersects);

    let mut names = airport_names(&narrowed);
    names.sort();
    assert_eq!(names, ["Alert", "Iqaluit"]);
}

#[test]
fn spatial_and_attribute_filters_combine() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let west: Geometry = Envelope::new(-130.0, 40.0, -90.0, 60.0).into();
    let filtered = airports
        .filter_spatial(west.clone(), SpatialRelationship::Intersects)
        .filter(Airport::fields().elevation().lt(100))
        .unwrap();
    assert_eq!(airport_names(&filtered), ["Abbotsford"]);

    assert_eq!(
        airports
            .filter_spatial(west, SpatialRelationship::Intersects)
            .delete()
            .unwrap(),
        2
    );
}

#[test]
fn unsupported_relationship() {
    let sample = Sample::new();
    let airports = sample.connect().open::<Airport>("airport_pt").unwrap();

    let err = airports
        .filter_spatial(eastern_canada(), SpatialRelationship::Crosses)
        .query()
        .err()
        .unwrap();
    assert!(err.is_unsupported_expression(), "{err}");
}

#[test]
fn output_spatial_reference() {
    let sample = Sample::new();
    let db = sample.connect();

    let ottawa = db
        .table::<Airport>("airport_pt")
        .output_spatial_reference(SpatialReference::WEB_MERCATOR)
        .open()
        .unwrap()
        .filter(Airport::fields().name().eq("Ottawa"))
        .unwrap()
        .first()
        .unwrap()
        .unwrap();

    let Some(Geometry::Point(p)) = ottawa.shape else {
        panic!("expected a point, got {:?}", ottawa.shape);
    };
    assert!(p.x < -8.4e6 && p.x > -8.5e6, "{p:?}");
    assert!(p.y > 5.6e6 && p.y < 5.7e6, "{p:?}");
}

#[test]
fn insert_in_output_spatial_reference() {
    let sample = Sample::new();
    let db = Db::builder()
        .initialize_host(false)
        .output_spatial_reference(SpatialReference::WEB_MERCATOR)
        .connect(Json, sample.path())
        .unwrap();

    let airports = db.open::<Airport>("airport_pt").unwrap();
    let origin = airports
        .insert_one(&Airport {
            name: "Null Island".to_string(),
            shape: Some(Geometry::point(0.0, 0.0)),
            ..Airport::default()
        })
        .unwrap();

    let stored = sample
        .connect()
        .open::<Airport>("airport_pt")
        .unwrap()
        .filter(Airport::fields().objectid().eq(origin.objectid))
        .unwrap()
        .first()
        .unwrap()
        .unwrap();

    assert_eq!(stored.shape, Some(Geometry::Point(Point::new(0.0, 0.0))));
}
