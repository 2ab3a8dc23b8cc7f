//! Contract types shared with the external image resolution service.
//!
//! The gallery never fetches image bytes itself. It hands an [`ImageSource`]
//! to the resolver and receives an [`ImageOutcome`] back; the presentation
//! surface shows an [`ImageSlot`] for each card in the meantime.

use std::fmt::{self, Display, Formatter};

/// Opaque reference to a remotely resolved card image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(url: impl Into<String>) -> Self {
        ImageSource(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageSource {
    fn from(url: String) -> Self {
        ImageSource(url)
    }
}

impl From<&str> for ImageSource {
    fn from(url: &str) -> Self {
        ImageSource(url.to_string())
    }
}

impl Display for ImageSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result reported by the resolver for one source. Resolvers never panic
/// into the caller; failures come back as [`ImageOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Resolved image, identified by a resolver-defined handle (cache key,
    /// texture id, file path).
    Ready { handle: String },
    Failed { reason: String },
}

/// What the surface draws for a card image right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSlot {
    /// Shown immediately while resolution is pending.
    #[default]
    Placeholder,
    Ready { handle: String },
    /// Resolution failed; drawn with the same fill as the placeholder.
    Failed { reason: String },
}

impl From<ImageOutcome> for ImageSlot {
    fn from(outcome: ImageOutcome) -> Self {
        match outcome {
            ImageOutcome::Ready { handle } => ImageSlot::Ready { handle },
            ImageOutcome::Failed { reason } => ImageSlot::Failed { reason },
        }
    }
}

impl ImageSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSlot::Placeholder)
    }

    /// Handle of the resolved image, if any.
    pub fn handle(&self) -> Option<&str> {
        match self {
            ImageSlot::Ready { handle } => Some(handle),
            _ => None,
        }
    }
}
