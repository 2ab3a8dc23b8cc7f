//! # Overview Core
//!
//! Selection logic and presentation read model for the card overview
//! gallery: a horizontally paged carousel of payment cards with a details
//! panel for the selected card.
//!
//! - [`gallery`]: the selection controller that keeps the selected card and
//!   the pager page consistent in both directions.
//! - [`view`]: plain data snapshots the rendering layer draws each frame.
//! - [`image`]: bookkeeping for asynchronously resolved card images.
//! - [`sample`]: the built-in sample card set.
//!
//! ```
//! use overview_core::gallery::GallerySelectionController;
//! use overview_core::sample::sample_cards;
//!
//! let mut gallery = GallerySelectionController::new(sample_cards())?;
//! let transition = gallery.on_page_changed(2)?;
//! assert!(transition.scroll_target().is_none());
//! assert_eq!(gallery.selected_card_id().map(|id| id.as_str()), Some("3"));
//! # Ok::<(), overview_core::GalleryError>(())
//! ```
#![allow(missing_docs)]

pub mod error;
pub mod gallery;
pub mod image;
pub mod sample;
pub mod view;

pub use error::{GalleryError, GalleryResult};
pub use gallery::{
    GalleryEvent, GalleryLabels, GalleryListener, GallerySelectionController,
    Transition,
};
pub use view::{GalleryView, PagerLayout};
