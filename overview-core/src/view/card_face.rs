use overview_model::{Card, CardType, ImageSource};

use crate::gallery::GalleryLabels;

/// Text drawn on top of a card image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    pub owner_name: String,
    pub line: FaceLine,
    /// Overlay text for disabled cards.
    pub disabled_overlay: Option<String>,
    pub image: ImageSource,
}

/// Identifier line under the owner name. Standard cards show their number,
/// premium cards their IBAN plus a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceLine {
    Number(String),
    Premium { iban: String, badge: String },
}

impl CardFace {
    pub fn from_card(card: &Card, labels: &GalleryLabels) -> Self {
        let line = match card.card_type() {
            CardType::Standard => FaceLine::Number(card.number().to_string()),
            CardType::Premium => FaceLine::Premium {
                iban: card
                    .iban()
                    .unwrap_or(labels.missing_iban.as_str())
                    .to_string(),
                badge: labels.premium_badge.clone(),
            },
        };
        Self {
            owner_name: card.owner_name().to_string(),
            line,
            disabled_overlay: card.is_disabled().then(|| labels.disabled.clone()),
            image: card.image_url().clone(),
        }
    }

    /// Lines in drawing order, without the overlay.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.owner_name.clone()];
        match &self.line {
            FaceLine::Number(number) => {
                lines.push(format!("Card Number: {number}"));
            }
            FaceLine::Premium { iban, badge } => {
                lines.push(format!("Iban: {iban}"));
                lines.push(badge.clone());
            }
        }
        lines
    }
}
