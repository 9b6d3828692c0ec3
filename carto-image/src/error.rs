#[derive(Debug, thiserror::Error)]
pub enum CartoImageError {
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("image error")]
    ImageError(#[from] image::ImageError),

    #[error("usvg error: {0}")]
    UsvgError(#[from] usvg::Error),

    #[error("roxml Error: {0}")]
    RoxmlError(#[from] usvg::roxmltree::Error),

    #[error("Invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}
