use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartoGeometryError {
    #[error("Invalid UTM zone {0}, expected 1..=60")]
    InvalidUtmZone(u8),

    #[error("Degenerate extent: {0}")]
    DegenerateExtent(String),

    #[error("Invalid frame size: {0:?}")]
    InvalidFrameSize([f32; 2]),
}
