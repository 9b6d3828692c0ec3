use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartoDataError {
    #[error("Failed to read shapefile {path}: {source}")]
    ShapefileError {
        path: PathBuf,
        #[source]
        source: shapefile::Error,
    },

    #[error("Unsupported geometry in {path}: {message}")]
    UnsupportedGeometry { path: PathBuf, message: String },

    #[error("Layer `{layer}` has no attribute `{field}`")]
    MissingAttribute { layer: String, field: String },
}
