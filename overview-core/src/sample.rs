//! Built-in sample card set used when no card source is configured.

use overview_model::{Card, CardState, CardType, card_id};

const STANDARD_IMAGE: &str =
    "https://www.dummyimage.com/300x200/0011ff/fafafa.jpg&text=standard";
const PREMIUM_IMAGE: &str =
    "https://www.dummyimage.com/300x200/0011ff/fafafa.jpg&text=premium";

/// Three cards: an active named standard card, a disabled unnamed standard
/// card and an active premium card without IBAN.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::builder(
            card_id!("1"),
            "Owen Smith",
            "1234 5678 9012 3456",
            STANDARD_IMAGE,
        )
        .custom_name("Personal Card")
        .iban("DE89370400440532013000")
        .build(),
        Card::builder(
            card_id!("2"),
            "Owen Smith",
            "2345 6789 0123 4567",
            STANDARD_IMAGE,
        )
        .iban("DE89370400440532013001")
        .state(CardState::Disabled)
        .build(),
        Card::builder(
            card_id!("3"),
            "Owen Smith",
            "3456 7890 1234 5678",
            PREMIUM_IMAGE,
        )
        .custom_name("Premium Card")
        .card_type(CardType::Premium)
        .build(),
    ]
}
