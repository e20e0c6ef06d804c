use super::Point;

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Envelope {
    /// Creates an envelope, normalizing the corners so that min <= max.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            xmin: x1.min(x2),
            ymin: y1.min(y2),
            xmax: x1.max(x2),
            ymax: y1.max(y2),
        }
    }

    pub fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |env, p| {
            Some(match env {
                None => Self::from_point(*p),
                Some(env) => env.expand(*p),
            })
        })
    }

    pub fn expand(self, p: Point) -> Self {
        Self {
            xmin: self.xmin.min(p.x),
            ymin: self.ymin.min(p.y),
            xmax: self.xmax.max(p.x),
            ymax: self.ymax.max(p.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns `true` if the two envelopes share at least one point.
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }

    /// Returns `true` if `other` lies entirely inside this envelope.
    pub fn contains(&self, other: &Envelope) -> bool {
        self.xmin <= other.xmin
            && self.ymin <= other.ymin
            && other.xmax <= self.xmax
            && other.ymax <= self.ymax
    }

    /// Returns `true` if the envelopes meet only along their boundaries.
    pub fn touches(&self, other: &Envelope) -> bool {
        self.intersects(other)
            && (self.xmin == other.xmax
                || self.xmax == other.xmin
                || self.ymin == other.ymax
                || self.ymax == other.ymin)
    }
}
