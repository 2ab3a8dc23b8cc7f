//! Configuration for the card overview gallery.
//!
//! Centralizes display labels, pager layout and the card source, with the
//! lookup order `$OVERVIEW_CONFIG_PATH` → `$OVERVIEW_CONFIG_JSON` → default
//! files → built-in defaults.
#![allow(missing_docs)]

pub mod cards;
pub mod loader;
pub mod models;
pub mod validation;

pub use cards::{CardFile, load_cards};
pub use loader::{ConfigSource, error::ConfigLoadError};
pub use models::{CardSource, GalleryConfig, LabelConfig, LayoutConfig};
