mod records;
pub use records::{Airport, Feature, Pipeline, ProtectedArea};

use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use strata::{
    geometry::{Point, SpatialReference},
    schema::{Field, TableSchema},
    stmt::Type,
    Db, Geometry,
};
use strata_driver_json::Json;
use tempfile::TempDir;

/// A sample catalog of Canadian features, written to a temporary directory
/// that is removed when the fixture is dropped.
pub struct Sample {
    /// Keeps the directory alive
    _dir: TempDir,

    path: PathBuf,
}

impl Sample {
    /// Builds a `.geodatabase` catalog holding `airport_pt`, `pipelines_l`
    /// and `prot_areas_p`, each seeded with a handful of rows.
    pub fn new() -> Sample {
        Sample::with_catalog("Canada.geodatabase")
    }

    /// Like [`Sample::new`], with the catalog stored under `name`. The
    /// extension picks the layout.
    pub fn with_catalog(name: &str) -> Sample {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);

        Json::create_table(&path, airport_schema()).unwrap();
        Json::create_table(&path, pipeline_schema()).unwrap();
        Json::create_table(&path, protected_area_schema()).unwrap();

        let sample = Sample { _dir: dir, path };
        let db = sample.connect();

        db.open::<Airport>("airport_pt")
            .unwrap()
            .insert(&airports())
            .unwrap();
        db.open::<Pipeline>("pipelines_l")
            .unwrap()
            .insert(&pipelines())
            .unwrap();
        db.open::<ProtectedArea>("prot_areas_p")
            .unwrap()
            .insert(&protected_areas())
            .unwrap();

        sample
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the catalog without setting up the store host.
    pub fn connect(&self) -> Db {
        Db::builder()
            .initialize_host(false)
            .connect(Json, &self.path)
            .unwrap()
    }
}

impl Default for Sample {
    fn default() -> Self {
        Sample::new()
    }
}

pub fn airport_schema() -> TableSchema {
    TableSchema::new(
        "airport_pt",
        vec![
            Field::identifier("OBJECTID"),
            Field::new("name_e", Type::String),
            Field::new("Class", Type::String),
            Field::new("Elevation", Type::I32),
            Field::new("Opened", Type::Timestamp),
            Field::new("Shape", Type::Geometry),
        ],
    )
    .with_spatial_reference(SpatialReference::WGS84)
}

pub fn pipeline_schema() -> TableSchema {
    TableSchema::new(
        "pipelines_l",
        vec![
            Field::identifier("OBJECTID"),
            Field::new("Operator", Type::String),
            Field::new("Length_km", Type::F64),
            Field::new("Shape", Type::Geometry),
        ],
    )
    .with_spatial_reference(SpatialReference::WGS84)
}

pub fn protected_area_schema() -> TableSchema {
    TableSchema::new(
        "prot_areas_p",
        vec![
            Field::identifier("OBJECTID"),
            Field::new("Name_EN", Type::String),
            Field::new("Area_km2", Type::F64),
            Field::new("Shape", Type::Geometry),
        ],
    )
    .with_spatial_reference(SpatialReference::WGS84)
}

fn airport(name: &str, class: Option<&str>, elevation: Option<i32>, x: f64, y: f64) -> Airport {
    Airport {
        name: name.to_string(),
        class: class.map(str::to_string),
        elevation,
        shape: Some(Geometry::point(x, y)),
        ..Airport::default()
    }
}

/// The opening date of the Ottawa airport in `airports()`.
pub fn ottawa_opened() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1938, 7, 20)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Airports in insertion order.
pub fn airports() -> Vec<Airport> {
    vec![
        Airport {
            opened: Some(ottawa_opened()),
            ..airport("Ottawa", Some("Major"), Some(114), -75.67, 45.32)
        },
        airport("Iqaluit", Some("Regional"), Some(34), -68.55, 63.76),
        airport("Alert", None, Some(30), -62.34, 82.52),
        airport("Abbotsford", Some("Regional"), Some(59), -122.36, 49.03),
        airport("Gander", Some("Major"), Some(151), -54.57, 48.94),
        airport("Bagotville", None, None, -70.99, 48.33),
        airport("Brandon", Some("Local"), Some(409), -99.95, 49.91),
    ]
}

pub fn pipelines() -> Vec<Pipeline> {
    let line = |operator: &str, length_km: f64, path: &[(f64, f64)]| Pipeline {
        operator: Some(operator.to_string()),
        length_km: Some(length_km),
        shape: Some(Geometry::Polyline {
            paths: vec![path.iter().map(|&(x, y)| Point::new(x, y)).collect()],
        }),
        ..Pipeline::default()
    };

    vec![
        line("Enbridge", 1660.0, &[(-113.5, 53.5), (-97.1, 49.9)]),
        line("TC Energy", 4324.0, &[(-110.7, 50.0), (-79.4, 43.7)]),
        line("Trans Mountain", 1150.0, &[(-113.5, 53.5), (-122.9, 49.2)]),
    ]
}

pub fn protected_areas() -> Vec<ProtectedArea> {
    let area = |name: &str, area_km2: f64, (x, y): (f64, f64)| ProtectedArea {
        name: Some(name.to_string()),
        area_km2: Some(area_km2),
        feature: Feature {
            shape: Some(Geometry::polygon(vec![vec![
                Point::new(x, y),
                Point::new(x + 1.0, y),
                Point::new(x + 1.0, y + 1.0),
                Point::new(x, y + 1.0),
                Point::new(x, y),
            ]])),
            ..Feature::default()
        },
    };

    vec![
        area("Columbia Icefield", 215.0, (-117.3, 52.1)),
        area("Nahanni", 30050.0, (-125.6, 61.5)),
        area("Ice Age Trail Reserve", 12.5, (-89.9, 48.4)),
        area("Quttinirpaaq", 37775.0, (-73.0, 82.0)),
        area("Gros Morne", 1805.0, (-57.8, 49.6)),
    ]
}

/// Names of `airports()` in ascending order.
pub fn sorted_airport_names() -> Vec<String> {
    let mut names: Vec<_> = airports().into_iter().map(|a| a.name).collect();
    names.sort();
    names
}
