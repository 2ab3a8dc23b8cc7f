use overview_core::{GalleryLabels, PagerLayout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level gallery settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub labels: LabelConfig,
    pub layout: LayoutConfig,
    /// Where the card list comes from.
    pub cards: CardSource,
}

/// Display strings. Override these to localize the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Label above the selected standard card.
    pub standard_card: String,
    /// Custom-name row text for cards without a name.
    pub no_custom_name: String,
    pub empty_gallery: String,
    pub details_title: String,
    pub disabled: String,
    pub premium_badge: String,
    /// Shown on premium cards that have no IBAN.
    pub missing_iban: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        GalleryLabels::default().into()
    }
}

impl From<GalleryLabels> for LabelConfig {
    fn from(labels: GalleryLabels) -> Self {
        Self {
            standard_card: labels.standard_card,
            no_custom_name: labels.no_custom_name,
            empty_gallery: labels.empty_gallery,
            details_title: labels.details_title,
            disabled: labels.disabled,
            premium_badge: labels.premium_badge,
            missing_iban: labels.missing_iban,
        }
    }
}

impl From<&LabelConfig> for GalleryLabels {
    fn from(config: &LabelConfig) -> Self {
        GalleryLabels {
            standard_card: config.standard_card.clone(),
            no_custom_name: config.no_custom_name.clone(),
            empty_gallery: config.empty_gallery.clone(),
            details_title: config.details_title.clone(),
            disabled: config.disabled.clone(),
            premium_badge: config.premium_badge.clone(),
            missing_iban: config.missing_iban.clone(),
        }
    }
}

/// Pager geometry. Card width is `screen_width * card_width_proportion`,
/// the remainder is split into equal side padding.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub screen_width: f32,
    /// Share of the screen a card takes, in `(0, 1]`.
    pub card_width_proportion: f32,
    pub page_spacing: f32,
    pub card_aspect_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        PagerLayout::default().into()
    }
}

impl From<PagerLayout> for LayoutConfig {
    fn from(layout: PagerLayout) -> Self {
        Self {
            screen_width: layout.screen_width,
            card_width_proportion: layout.card_width_proportion,
            page_spacing: layout.page_spacing,
            card_aspect_ratio: layout.card_aspect_ratio,
        }
    }
}

impl From<&LayoutConfig> for PagerLayout {
    fn from(config: &LayoutConfig) -> Self {
        PagerLayout {
            screen_width: config.screen_width,
            card_width_proportion: config.card_width_proportion,
            page_spacing: config.page_spacing,
            card_aspect_ratio: config.card_aspect_ratio,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSource {
    /// Built-in three card sample set.
    #[default]
    Sample,
    /// JSON or TOML file holding a `cards` array. A relative path is taken
    /// relative to the config file that names it.
    File(PathBuf),
}

impl CardSource {
    /// Anchor a relative card file path at `base`. Absolute paths and the
    /// sample source are left alone.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if let CardSource::File(path) = self
            && path.is_relative()
        {
            *path = base.join(&*path);
        }
    }
}

impl GalleryConfig {
    pub fn gallery_labels(&self) -> GalleryLabels {
        (&self.labels).into()
    }

    pub fn pager_layout(&self) -> PagerLayout {
        (&self.layout).into()
    }
}
