//! Card gallery selection state
//!
//! The gallery owns an ordered card list, the selected card and the pager's
//! current page. [`GallerySelectionController`] is the only way to mutate
//! them and guarantees that, after every call, the selected card is the one
//! shown on the current page.

pub mod controller;
pub mod events;
pub mod labels;
pub mod state;

pub use controller::GallerySelectionController;
pub use events::{GalleryEvent, GalleryListener, Transition};
pub use labels::GalleryLabels;
pub use state::GalleryState;
