/// Logical size of a drawing surface in points (1/72 inch), plus the factor
/// used to convert points into physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasDimensions {
    pub size: [f32; 2],
    pub scale: f32,
}

pub const POINTS_PER_INCH: f32 = 72.0;

impl CanvasDimensions {
    /// Canvas of `size` points rasterized at `dpi` dots per inch
    pub fn from_dpi(size: [f32; 2], dpi: f32) -> Self {
        Self {
            size,
            scale: dpi / POINTS_PER_INCH,
        }
    }

    pub fn dpi(&self) -> f32 {
        self.scale * POINTS_PER_INCH
    }

    pub fn to_physical_width(&self) -> u32 {
        (self.size[0] * self.scale).round() as u32
    }

    pub fn to_physical_height(&self) -> u32 {
        (self.size[1] * self.scale).round() as u32
    }
}
