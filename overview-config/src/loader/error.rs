use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("card_width_proportion must be in (0, 1], got {value}")]
    InvalidCardProportion { value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: f32 },
    #[error("label '{field}' cannot be empty")]
    EmptyLabel { field: &'static str },
    #[error("failed to read card file {path}")]
    CardFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse card file {path}: {message}")]
    CardFileFormat { path: PathBuf, message: String },
    #[error("invalid card list in {path}")]
    InvalidCards {
        path: PathBuf,
        #[source]
        source: overview_model::ModelError,
    },
}
