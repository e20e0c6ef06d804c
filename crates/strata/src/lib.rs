pub mod cursor;
pub use cursor::{Cursor, Updates};

pub mod db;
pub use db::Db;

mod feature_class;
pub use feature_class::FeatureClass;

mod materialize;
pub use materialize::{to_record, to_row};

pub mod query;
pub use query::Query;

mod record;
pub use record::{no_such_attribute, Record};

pub mod stmt;

pub use strata_core::{
    driver,
    geometry::{self, Envelope, Geometry, Point, SpatialReference, SpatialRelationship},
    schema::{self, Attribute, Mapping},
    Error, Result,
};

pub use strata_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        record::no_such_attribute,
        stmt::{Path, Primitive},
        Record, Result,
    };
    pub use std::{convert::Into, option::Option};
    pub use strata_core::{schema::Attribute, stmt::Value};
}
