//! Presentation focused snapshot of the model surface.
//! Prefer importing from this module when writing gallery surfaces.

pub use super::card::{Card, CardBuilder, CardState, CardType};
pub use super::error::ModelError;
pub use super::ids::CardId;
pub use super::image::{ImageOutcome, ImageSlot, ImageSource};
