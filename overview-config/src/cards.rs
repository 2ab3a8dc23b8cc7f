//! Card list files.
//!
//! A card file holds a top-level `cards` array in JSON or TOML:
//!
//! ```toml
//! [[cards]]
//! id = "1"
//! owner_name = "Owen Smith"
//! number = "1234 5678 9012 3456"
//! image_url = "https://example.test/standard.jpg"
//! custom_name = "Personal Card"
//! ```

use log::debug;
use overview_core::sample::sample_cards;
use overview_model::{Card, ids::ensure_unique};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::loader::error::ConfigLoadError;
use crate::models::{CardSource, GalleryConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardFile {
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Read and validate a card file. The format follows the extension, with
/// TOML tried before JSON for anything else.
pub fn load_cards(path: &Path) -> Result<Vec<Card>, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::CardFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let parsed: CardFile = match path.extension().and_then(|ext| ext.to_str())
    {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| format_error(path, err.to_string()))?,
        Some("toml") | Some("tml") => toml::from_str(&contents)
            .map_err(|err| format_error(path, err.to_string()))?,
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|json_err| {
                format_error(
                    path,
                    format!("toml error: {toml_err}; json error: {json_err}"),
                )
            })
        })?,
    };

    ensure_unique(parsed.cards.iter().map(Card::id)).map_err(|source| {
        ConfigLoadError::InvalidCards {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Loaded {} cards from {}", parsed.cards.len(), path.display());
    Ok(parsed.cards)
}

fn format_error(path: &Path, message: String) -> ConfigLoadError {
    ConfigLoadError::CardFileFormat {
        path: path.to_path_buf(),
        message,
    }
}

impl GalleryConfig {
    /// Resolve the configured card source into a card list.
    pub fn load_cards(&self) -> Result<Vec<Card>, ConfigLoadError> {
        match &self.cards {
            CardSource::Sample => Ok(sample_cards()),
            CardSource::File(path) => load_cards(path),
        }
    }
}
