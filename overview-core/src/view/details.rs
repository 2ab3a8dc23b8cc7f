use overview_model::{Card, CardState};

use crate::gallery::GalleryLabels;

/// Color intent of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Negative,
}

/// Details panel for the selected card, shown below the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub title: String,
    pub owner: String,
    pub number: String,
    pub iban: Option<String>,
    pub card_type: String,
    pub status: String,
    pub status_tone: StatusTone,
}

impl CardDetails {
    pub fn from_card(card: &Card, labels: &GalleryLabels) -> Self {
        Self {
            title: card
                .custom_name()
                .unwrap_or(labels.details_title.as_str())
                .to_string(),
            owner: format!("Owner: {}", card.owner_name()),
            number: format!("Card Number: {}", card.number()),
            iban: card.iban().map(|iban| format!("IBAN: {iban}")),
            card_type: format!("Type: {}", card.card_type()),
            status: format!("Status: {}", card.state()),
            status_tone: match card.state() {
                CardState::Active => StatusTone::Positive,
                CardState::Disabled => StatusTone::Negative,
            },
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![
            self.title.as_str(),
            self.owner.as_str(),
            self.number.as_str(),
        ];
        lines.extend(self.iban.as_deref());
        lines.push(&self.card_type);
        lines.push(&self.status);
        lines
    }
}
