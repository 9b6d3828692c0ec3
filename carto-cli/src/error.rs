use carto_map::error::CartoMapError;
use carto_svg::error::CartoSvgError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartoCliError {
    #[error("{0}")]
    MapError(#[from] CartoMapError),

    #[error("{0}")]
    SvgError(#[from] CartoSvgError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
