use crate::error::CartoGeometryError;
use crate::extent::MapExtent;
use serde::{Deserialize, Serialize};

/// Placement of a map extent on the canvas.
///
/// Canvas coordinates are in points with y growing downwards and are local
/// to the frame: `(0, 0)` is the top-left corner of the frame, which itself
/// sits at `origin` on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapFrame {
    pub extent: MapExtent,
    pub origin: [f32; 2],
    pub size: [f32; 2],
}

impl MapFrame {
    pub fn new(extent: MapExtent, origin: [f32; 2], size: [f32; 2]) -> Result<Self, CartoGeometryError> {
        extent.validate()?;
        if !(size[0] > 0.0 && size[1] > 0.0) {
            return Err(CartoGeometryError::InvalidFrameSize(size));
        }
        Ok(Self {
            extent,
            origin,
            size,
        })
    }

    /// Largest frame with the extent's aspect ratio that fits in `max_size`
    pub fn fit(extent: MapExtent, origin: [f32; 2], max_size: [f32; 2]) -> Result<Self, CartoGeometryError> {
        extent.validate()?;
        let aspect = extent.aspect_ratio() as f32;
        let size = if max_size[0] / max_size[1] > aspect {
            [max_size[1] * aspect, max_size[1]]
        } else {
            [max_size[0], max_size[0] / aspect]
        };
        Self::new(extent, origin, size)
    }

    /// Canvas points per map unit along x
    pub fn x_scale(&self) -> f64 {
        self.size[0] as f64 / self.extent.width()
    }

    /// Canvas points per map unit along y
    pub fn y_scale(&self) -> f64 {
        self.size[1] as f64 / self.extent.height()
    }

    /// Map coordinates to frame-local canvas coordinates
    pub fn to_canvas(&self, x: f64, y: f64) -> [f32; 2] {
        [
            ((x - self.extent.xmin) * self.x_scale()) as f32,
            ((self.extent.ymax - y) * self.y_scale()) as f32,
        ]
    }

    /// Frame-local canvas coordinates back to map coordinates
    pub fn to_map(&self, cx: f32, cy: f32) -> [f64; 2] {
        [
            self.extent.xmin + cx as f64 / self.x_scale(),
            self.extent.ymax - cy as f64 / self.y_scale(),
        ]
    }
}
