//! Image slot bookkeeping
//!
//! Resolution itself happens outside the gallery. The surface asks an
//! [`ImageResolver`] for each card's image, shows a placeholder in the
//! meantime and feeds results back through [`ImageSlots::apply`], which
//! drops results for cards that left the gallery while they were pending.

use std::collections::HashMap;

use log::{debug, trace};
use overview_model::{CardId, ImageOutcome, ImageSlot, ImageSource};

use crate::gallery::GallerySelectionController;

/// External image resolution service.
///
/// Implementations must not panic; failures are reported as
/// [`ImageOutcome::Failed`] so the surface can keep drawing the fallback.
pub trait ImageResolver {
    fn resolve(&self, source: &ImageSource) -> ImageOutcome;
}

#[derive(Debug, Clone, Default)]
pub struct ImageSlots {
    slots: HashMap<CardId, ImageSlot>,
}

impl ImageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a placeholder for every card that has no slot yet and forget
    /// cards that are gone.
    pub fn sync(&mut self, gallery: &GallerySelectionController) {
        self.retain(gallery);
        for card in gallery.cards() {
            self.slots.entry(card.id().clone()).or_default();
        }
    }

    /// Drop slots of cards no longer in the gallery.
    pub fn retain(&mut self, gallery: &GallerySelectionController) {
        let before = self.slots.len();
        self.slots.retain(|id, _| gallery.card(id).is_some());
        let dropped = before - self.slots.len();
        if dropped > 0 {
            debug!("Dropped {dropped} image slots for removed cards");
        }
    }

    /// Store a resolution result. Returns `false` and discards the result
    /// when the card is no longer part of the gallery.
    pub fn apply(
        &mut self,
        id: &CardId,
        outcome: ImageOutcome,
        gallery: &GallerySelectionController,
    ) -> bool {
        if gallery.card(id).is_none() {
            trace!("Discarding stale image result for card '{id}'");
            self.slots.remove(id);
            return false;
        }
        self.slots.insert(id.clone(), outcome.into());
        true
    }

    /// Resolve every placeholder synchronously with `resolver`.
    pub fn resolve_pending<R: ImageResolver + ?Sized>(
        &mut self,
        resolver: &R,
        gallery: &GallerySelectionController,
    ) -> usize {
        let mut resolved = 0;
        for card in gallery.cards() {
            let slot = self.slots.entry(card.id().clone()).or_default();
            if slot.is_placeholder() {
                *slot = resolver.resolve(card.image_url()).into();
                resolved += 1;
            }
        }
        resolved
    }

    pub fn slot(&self, id: &CardId) -> &ImageSlot {
        static PLACEHOLDER: ImageSlot = ImageSlot::Placeholder;
        self.slots.get(id).unwrap_or(&PLACEHOLDER)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
