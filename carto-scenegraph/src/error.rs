use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartoSceneGraphError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("Mark `{name}` has {len} instances but its `{channel}` channel has {found} values")]
    InvalidChannelLength {
        name: String,
        channel: &'static str,
        len: usize,
        found: usize,
    },
}
