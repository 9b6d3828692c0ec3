use carto_geometry::error::CartoGeometryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartoGuidesError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Geometry error: {0}")]
    GeometryError(#[from] CartoGeometryError),
}
