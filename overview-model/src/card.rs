use std::fmt::{self, Display, Formatter};

use crate::ids::CardId;
use crate::image::ImageSource;

/// Whether a card can currently be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardState {
    #[default]
    Active,
    Disabled,
}

impl Display for CardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Active => write!(f, "Active"),
            CardState::Disabled => write!(f, "Disabled"),
        }
    }
}

/// Product tier of a card. Decides which identifier the card face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Shows the card number.
    #[default]
    Standard,
    /// Shows the IBAN and a premium badge.
    Premium,
}

impl Display for CardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Standard => write!(f, "Standard"),
            CardType::Premium => write!(f, "Premium"),
        }
    }
}

/// A payment card as shown in the overview gallery.
///
/// Immutable once built. Use [`Card::builder`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    id: CardId,
    owner_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    custom_name: Option<String>,
    number: String,
    #[cfg_attr(feature = "serde", serde(default))]
    iban: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    state: CardState,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    card_type: CardType,
    image_url: ImageSource,
}

impl Card {
    pub fn builder(
        id: CardId,
        owner_name: impl Into<String>,
        number: impl Into<String>,
        image_url: impl Into<ImageSource>,
    ) -> CardBuilder {
        CardBuilder {
            card: Card {
                id,
                owner_name: owner_name.into(),
                custom_name: None,
                number: number.into(),
                iban: None,
                state: CardState::default(),
                card_type: CardType::default(),
                image_url: image_url.into(),
            },
        }
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// The user-chosen card name. Empty names count as absent.
    pub fn custom_name(&self) -> Option<&str> {
        self.custom_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn image_url(&self) -> &ImageSource {
        &self.image_url
    }

    pub fn is_disabled(&self) -> bool {
        self.state == CardState::Disabled
    }

    pub fn is_standard(&self) -> bool {
        self.card_type == CardType::Standard
    }
}

/// Builder for the optional parts of a [`Card`].
#[derive(Debug, Clone)]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    pub fn custom_name(mut self, name: impl Into<String>) -> Self {
        self.card.custom_name = Some(name.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.card.iban = Some(iban.into());
        self
    }

    pub fn state(mut self, state: CardState) -> Self {
        self.card.state = state;
        self
    }

    pub fn card_type(mut self, card_type: CardType) -> Self {
        self.card.card_type = card_type;
        self
    }

    pub fn build(self) -> Card {
        self.card
    }
}
