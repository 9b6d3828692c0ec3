use crate::error::CartoGeometryError;
use geo::BoundingRect;
use geo_types::{Geometry, Rect};
use serde::{Deserialize, Serialize};

/// Rectangular bounds of a map view in projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapExtent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl MapExtent {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }

    /// Bounds of all geometries, `None` when there is nothing with a bounding box
    pub fn from_geometries<'a>(geometries: impl IntoIterator<Item = &'a Geometry<f64>>) -> Option<Self> {
        geometries
            .into_iter()
            .filter_map(|g| g.bounding_rect())
            .map(|r| Self::from_rect(&r))
            .reduce(|a, b| a.union(&b))
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// True when the extent has no positive area (or contains NaN)
    pub fn is_degenerate(&self) -> bool {
        !(self.xmin < self.xmax && self.ymin < self.ymax)
    }

    pub fn validate(&self) -> Result<(), CartoGeometryError> {
        if self.is_degenerate() {
            Err(CartoGeometryError::DegenerateExtent(format!("{self:?}")))
        } else {
            Ok(())
        }
    }

    /// Grow the extent by `margin` map units on every side
    pub fn padded(&self, margin: f64) -> Self {
        Self::new(
            self.xmin - margin,
            self.xmax + margin,
            self.ymin - margin,
            self.ymax + margin,
        )
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.xmin.min(other.xmin),
            self.xmax.max(other.xmax),
            self.ymin.min(other.ymin),
            self.ymax.max(other.ymax),
        )
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }
}
