/// Display strings the gallery hands to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLabels {
    /// Label above the selected standard card.
    pub standard_card: String,
    /// Custom-name row content for a card without a name, when other
    /// cards in the gallery have one.
    pub no_custom_name: String,
    pub empty_gallery: String,
    /// Details panel title for a card without a custom name.
    pub details_title: String,
    pub disabled: String,
    pub premium_badge: String,
    pub missing_iban: String,
}

impl Default for GalleryLabels {
    fn default() -> Self {
        Self {
            standard_card: "Standard Card".to_string(),
            no_custom_name: "No custom name".to_string(),
            empty_gallery: "No cards available".to_string(),
            details_title: "Card Details".to_string(),
            disabled: "Disabled".to_string(),
            premium_badge: "PREMIUM DEBIT".to_string(),
            missing_iban: "N/A".to_string(),
        }
    }
}
