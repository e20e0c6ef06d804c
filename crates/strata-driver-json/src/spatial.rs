use strata_core::{
    bail,
    driver::SpatialFilter,
    err,
    geometry::{Envelope, SpatialReference, SpatialRelationship},
    schema::TableSchema,
    stmt::Value,
    Error, Result,
};

/// A spatial filter prepared against a table. Shapes are compared by their
/// envelopes.
#[derive(Debug, Clone)]
pub(crate) struct SpatialMatch {
    /// Position of the geometry column
    column: usize,
    envelope: Envelope,
    relationship: SpatialRelationship,
}

impl SpatialMatch {
    pub(crate) fn new(filter: &SpatialFilter, schema: &TableSchema) -> Result<SpatialMatch> {
        let column = schema
            .fields
            .iter()
            .position(|field| field.ty.is_geometry())
            .ok_or_else(|| err!("'{}' has no geometry column", schema.name))?;

        let envelope = filter
            .geometry
            .envelope()
            .ok_or_else(|| err!("the spatial filter shape is empty"))?;

        match filter.relationship {
            SpatialRelationship::Intersects
            | SpatialRelationship::EnvelopeIntersects
            | SpatialRelationship::Contains
            | SpatialRelationship::Within
            | SpatialRelationship::Touches => {}
            relationship => {
                return Err(Error::unsupported_expression(format!(
                    "spatial relationship '{relationship}'"
                )))
            }
        }

        Ok(SpatialMatch {
            column,
            envelope,
            relationship: filter.relationship,
        })
    }

    pub(crate) fn matches(&self, row: &[Value]) -> bool {
        let Some(shape) = row[self.column].as_geometry().and_then(|g| g.envelope()) else {
            return false;
        };

        let filter = &self.envelope;

        match self.relationship {
            SpatialRelationship::Contains => filter.contains(&shape),
            SpatialRelationship::Within => shape.contains(filter),
            SpatialRelationship::Touches => filter.touches(&shape),
            _ => filter.intersects(&shape),
        }
    }
}

/// Converts geometries between a table's coordinate system and the one a
/// caller reads and writes in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Projection {
    pub(crate) table: SpatialReference,
    pub(crate) output: SpatialReference,
}

impl Projection {
    /// Returns `None` when no conversion is needed.
    pub(crate) fn between(
        schema: &TableSchema,
        output: Option<SpatialReference>,
    ) -> Result<Option<Projection>> {
        let Some(output) = output else {
            return Ok(None);
        };

        if schema.geometry_field().is_none() {
            return Ok(None);
        }

        match schema.spatial_reference {
            Some(table) if table == output => Ok(None),
            Some(table) => Ok(Some(Projection { table, output })),
            None => bail!(
                "'{}' has no spatial reference to project into {output}",
                schema.name
            ),
        }
    }

    pub(crate) fn to_output(&self, value: Value) -> Result<Value> {
        reproject(value, self.table, self.output)
    }

    pub(crate) fn to_table(&self, value: Value) -> Result<Value> {
        reproject(value, self.output, self.table)
    }
}

fn reproject(value: Value, from: SpatialReference, to: SpatialReference) -> Result<Value> {
    match value {
        Value::Geometry(geometry) => Ok(Value::Geometry(geometry.project(from, to)?)),
        value => Ok(value),
    }
}
