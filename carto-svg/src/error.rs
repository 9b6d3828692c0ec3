use carto_image::error::CartoImageError;
use carto_scenegraph::error::CartoSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartoSvgError {
    #[error("Scene graph error: {0}")]
    SceneGraphError(#[from] CartoSceneGraphError),

    #[error("Image error: {0}")]
    ImageError(#[from] CartoImageError),

    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}
