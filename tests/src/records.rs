use chrono::NaiveDateTime;
use strata::{Geometry, Record};

/// An airport, with the name attribute stored in `name_e`.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Airport {
    pub objectid: i64,

    #[column("name_e")]
    pub name: String,

    pub class: Option<String>,

    pub elevation: Option<i32>,

    pub opened: Option<NaiveDateTime>,

    pub shape: Option<Geometry>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Pipeline {
    pub objectid: i64,

    pub operator: Option<String>,

    pub length_km: Option<f64>,

    pub shape: Option<Geometry>,
}

/// Attributes every feature class carries.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Feature {
    pub objectid: i64,

    pub shape: Option<Geometry>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct ProtectedArea {
    #[column("Name_EN")]
    pub name: Option<String>,

    pub area_km2: Option<f64>,

    #[flatten]
    pub feature: Feature,
}
