//! Shape values carried by geometry columns and spatial filters.

mod envelope;
pub use envelope::Envelope;

mod point;
pub use point::Point;

mod relationship;
pub use relationship::SpatialRelationship;

mod spatial_reference;
pub use spatial_reference::SpatialReference;

use crate::Result;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Point(Point),
    Multipoint { points: Vec<Point> },
    Polyline { paths: Vec<Vec<Point>> },
    Polygon { rings: Vec<Vec<Point>> },
    Envelope(Envelope),
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point::new(x, y))
    }

    pub fn polygon(rings: Vec<Vec<Point>>) -> Self {
        Self::Polygon { rings }
    }

    /// Returns the type of shape as a lower-case name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Multipoint { .. } => "multipoint",
            Self::Polyline { .. } => "polyline",
            Self::Polygon { .. } => "polygon",
            Self::Envelope(_) => "envelope",
        }
    }

    /// Returns the smallest envelope enclosing every vertex, or `None` when
    /// the shape has no vertices.
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Self::Point(p) => Some(Envelope::from_point(*p)),
            Self::Envelope(env) => Some(*env),
            Self::Multipoint { points } => Envelope::from_points(points.iter()),
            Self::Polyline { paths: parts } | Self::Polygon { rings: parts } => {
                Envelope::from_points(parts.iter().flatten())
            }
        }
    }

    /// Applies `f` to every vertex.
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Result<Point>) -> Result<Self> {
        Ok(match self {
            Self::Point(p) => Self::Point(f(*p)?),
            Self::Multipoint { points } => Self::Multipoint {
                points: points.iter().map(|p| f(*p)).collect::<Result<_>>()?,
            },
            Self::Polyline { paths } => Self::Polyline {
                paths: map_parts(paths, &mut f)?,
            },
            Self::Polygon { rings } => Self::Polygon {
                rings: map_parts(rings, &mut f)?,
            },
            Self::Envelope(env) => {
                let min = f(Point::new(env.xmin, env.ymin))?;
                let max = f(Point::new(env.xmax, env.ymax))?;
                Self::Envelope(Envelope::new(min.x, min.y, max.x, max.y))
            }
        })
    }

    /// Reprojects the shape from one spatial reference to another.
    pub fn project(&self, from: SpatialReference, to: SpatialReference) -> Result<Self> {
        if from == to {
            return Ok(self.clone());
        }

        self.map_points(|p| from.project_point(p, to))
    }
}

fn map_parts(
    parts: &[Vec<Point>],
    f: &mut impl FnMut(Point) -> Result<Point>,
) -> Result<Vec<Vec<Point>>> {
    parts
        .iter()
        .map(|part| part.iter().map(|p| f(*p)).collect())
        .collect()
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<Envelope> for Geometry {
    fn from(value: Envelope) -> Self {
        Self::Envelope(value)
    }
}
