use carto_data::error::CartoDataError;
use carto_geometry::error::CartoGeometryError;
use carto_guides::error::CartoGuidesError;
use carto_svg::error::CartoSvgError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartoMapError {
    #[error("Data error: {0}")]
    DataError(#[from] CartoDataError),

    #[error("Geometry error: {0}")]
    GeometryError(#[from] CartoGeometryError),

    #[error("Guides error: {0}")]
    GuidesError(#[from] CartoGuidesError),

    #[error("Rendering error: {0}")]
    SvgError(#[from] CartoSvgError),

    #[error("Invalid config: {0}")]
    ConfigError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Layer `{0}` has no features")]
    EmptyLayer(String),
}
