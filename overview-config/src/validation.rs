use crate::loader::error::ConfigLoadError;
use crate::models::{GalleryConfig, LabelConfig, LayoutConfig};

impl GalleryConfig {
    /// Reject settings the gallery cannot render sensibly.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.layout.validate()?;
        self.labels.validate()
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let proportion = self.card_width_proportion;
        if !(proportion > 0.0 && proportion <= 1.0) {
            return Err(ConfigLoadError::InvalidCardProportion {
                value: proportion,
            });
        }
        for (field, value) in [
            ("screen_width", self.screen_width),
            ("card_aspect_ratio", self.card_aspect_ratio),
        ] {
            if !(value > 0.0) {
                return Err(ConfigLoadError::NonPositiveDimension {
                    field,
                    value,
                });
            }
        }
        if self.page_spacing < 0.0 || self.page_spacing.is_nan() {
            return Err(ConfigLoadError::NonPositiveDimension {
                field: "page_spacing",
                value: self.page_spacing,
            });
        }
        Ok(())
    }
}

impl LabelConfig {
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let labels = [
            ("standard_card", &self.standard_card),
            ("no_custom_name", &self.no_custom_name),
            ("empty_gallery", &self.empty_gallery),
            ("details_title", &self.details_title),
            ("disabled", &self.disabled),
            ("premium_badge", &self.premium_badge),
            ("missing_iban", &self.missing_iban),
        ];
        match labels.iter().find(|(_, text)| text.trim().is_empty()) {
            Some((field, _)) => Err(ConfigLoadError::EmptyLabel { field: *field }),
            None => Ok(()),
        }
    }
}
