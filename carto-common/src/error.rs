use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartoCommonError {
    #[error("Invalid color specification: `{0}`")]
    InvalidColor(String),
}
