/// How a row's shape must relate to the shape of a spatial filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialRelationship {
    #[default]
    Intersects,
    EnvelopeIntersects,
    /// The filter shape contains the row shape.
    Contains,
    /// The filter shape lies within the row shape.
    Within,
    Touches,
    Crosses,
    Overlaps,
}

impl SpatialRelationship {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intersects => "intersects",
            Self::EnvelopeIntersects => "envelope_intersects",
            Self::Contains => "contains",
            Self::Within => "within",
            Self::Touches => "touches",
            Self::Crosses => "crosses",
            Self::Overlaps => "overlaps",
        }
    }
}

impl std::fmt::Display for SpatialRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
