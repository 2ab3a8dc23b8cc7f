use std::borrow::Borrow;
use std::collections::HashSet;

use crate::error::ModelError;

/// Opaque identifier of a card. Never empty; unique within a gallery.
///
/// Identity comparisons between cards go through this type only, so two
/// cards that happen to share every other field are still told apart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::EmptyCardId);
        }
        Ok(CardId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for CardId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CardId::new(value)
    }
}

impl TryFrom<&str> for CardId {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CardId::new(value)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a [`CardId`] from a string literal, checked while compiling.
///
/// ```
/// let id = overview_model::card_id!("visa-1");
/// assert_eq!(id.as_str(), "visa-1");
/// ```
///
/// Literals without a visible ASCII character are rejected at compile time:
///
/// ```compile_fail
/// let id = overview_model::card_id!("  ");
/// ```
#[macro_export]
macro_rules! card_id {
    ($raw:literal) => {{
        const _: () = assert!(
            $crate::ids::has_visible_ascii($raw),
            "card id literal must contain a visible ASCII character"
        );
        $crate::ids::CardId::from_checked_literal($raw)
    }};
}

#[doc(hidden)]
pub const fn has_visible_ascii(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_graphic() {
            return true;
        }
        i += 1;
    }
    false
}

impl CardId {
    // Only reachable through `card_id!`, which has already checked `raw`.
    #[doc(hidden)]
    pub fn from_checked_literal(raw: &'static str) -> Self {
        CardId(raw.to_owned())
    }
}

/// Check that every id in the sequence is unique.
///
/// Emptiness is already ruled out by [`CardId::new`].
pub fn ensure_unique<'a, I>(ids: I) -> Result<(), ModelError>
where
    I: IntoIterator<Item = &'a CardId>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ModelError::DuplicateCardId(id.to_string()));
        }
    }
    Ok(())
}
