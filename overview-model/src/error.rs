use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("card id cannot be empty")]
    EmptyCardId,
    #[error("duplicate card id '{0}'")]
    DuplicateCardId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
