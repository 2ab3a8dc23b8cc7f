//! Card data model shared across the overview gallery crates.
#![allow(missing_docs)]

pub mod card;
pub mod error;
pub mod ids;
pub mod image;
pub mod prelude;

// Curated re-exports for downstream consumers.
pub use card::{Card, CardBuilder, CardState, CardType};
pub use error::{ModelError, Result as ModelResult};
pub use ids::CardId;
pub use image::{ImageOutcome, ImageSlot, ImageSource};
