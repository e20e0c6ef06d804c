use crate::geometry::{Geometry, SpatialReference, SpatialRelationship};

/// A shape that row geometries must relate to.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialFilter {
    pub geometry: Geometry,
    pub relationship: SpatialRelationship,
}

/// Everything a store needs to run a search or a bulk delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    /// Columns to return; empty means all columns.
    pub sub_fields: Vec<String>,

    /// Predicate text; empty matches every row.
    pub where_clause: String,

    /// Trailing clause such as `ORDER BY name DESC`.
    pub postfix_clause: Option<String>,

    pub spatial_filter: Option<SpatialFilter>,

    /// Coordinate system returned geometries are projected into.
    pub output_spatial_reference: Option<SpatialReference>,
}

impl QueryFilter {
    pub fn has_where_clause(&self) -> bool {
        !self.where_clause.trim().is_empty()
    }
}
