use overview_model::{CardId, ModelError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The surface reported a page that does not exist. This means the
    /// surface and the controller disagree on the card list.
    #[error("page {index} is out of range for a gallery of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("card '{0}' is not part of the gallery")]
    UnknownCard(CardId),

    #[error("invalid card list: {0}")]
    InvalidCards(#[from] ModelError),
}

pub type GalleryResult<T> = std::result::Result<T, GalleryError>;
