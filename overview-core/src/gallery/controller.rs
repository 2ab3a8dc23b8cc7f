//! Gallery selection controller
//!
//! Keeps the selected card and the pager's current page consistent while
//! either side changes. Card list updates and explicit selections flow
//! outward as [`GalleryEvent::ScrollToPage`] instructions; swipes reported
//! by the surface flow inward through [`GallerySelectionController::on_page_changed`].

use std::fmt;

use log::{debug, trace, warn};
use overview_model::{Card, CardId, ids::ensure_unique};

use super::events::{GalleryEvent, GalleryListener, Transition};
use super::labels::GalleryLabels;
use super::state::GalleryState;
use crate::error::{GalleryError, GalleryResult};

pub struct GallerySelectionController {
    state: GalleryState,
    labels: GalleryLabels,
    listeners: Vec<Box<dyn GalleryListener>>,
}

impl fmt::Debug for GallerySelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GallerySelectionController")
            .field("state", &self.state)
            .field("labels", &self.labels)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GallerySelectionController {
    /// Create a controller with the default display labels.
    pub fn new(cards: Vec<Card>) -> GalleryResult<Self> {
        Self::with_labels(cards, GalleryLabels::default())
    }

    pub fn with_labels(
        cards: Vec<Card>,
        labels: GalleryLabels,
    ) -> GalleryResult<Self> {
        ensure_unique(cards.iter().map(Card::id))?;
        let state = GalleryState::new(cards);
        debug!(
            "Gallery created with {} cards, selected={:?}",
            state.len(),
            state.selected().map(CardId::as_str)
        );
        Ok(Self {
            state,
            labels,
            listeners: Vec::new(),
        })
    }

    /// Register a listener notified after every committed transition.
    pub fn subscribe(&mut self, listener: impl GalleryListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the card list and reconcile the selection.
    ///
    /// The selected card survives if its id is still present, even at a new
    /// position. Otherwise the first card is selected, or nothing when the
    /// list is empty. Calling this again with the same list is a no-op.
    pub fn set_cards(&mut self, cards: Vec<Card>) -> GalleryResult<Transition> {
        if let Err(err) = ensure_unique(cards.iter().map(Card::id)) {
            warn!("Rejected card list update: {err}");
            return Err(err.into());
        }

        let mut transition = Transition::default();
        let previous = self.selection_snapshot();

        let target = self
            .state
            .selected()
            .and_then(|id| cards.iter().position(|card| card.id() == id))
            .or(if cards.is_empty() { None } else { Some(0) });

        if self.state.cards() != cards.as_slice() {
            transition.push(GalleryEvent::CardsReplaced { count: cards.len() });
            self.state.replace_cards(cards);
        }

        self.reconcile(target, previous, &mut transition);
        Ok(self.commit("set_cards", transition))
    }

    /// Record a page settled by the user (swipe) and select its card.
    ///
    /// Out of range pages are a surface bug and are reported, not clamped.
    pub fn on_page_changed(&mut self, page: usize) -> GalleryResult<Transition> {
        let len = self.state.len();
        if page >= len {
            warn!("Surface reported page {page} but gallery has {len} cards");
            return Err(GalleryError::IndexOutOfRange { index: page, len });
        }

        // The surface is already showing this page, so no scroll goes back.
        self.state.set_displayed_page(page);
        if self.state.current_page() == Some(page) {
            trace!("Page {page} already current");
            return Ok(Transition::default());
        }

        let mut transition = Transition::default();
        let previous = self.selection_snapshot();
        self.reconcile(Some(page), previous, &mut transition);
        Ok(self.commit("on_page_changed", transition))
    }

    /// Select a card by id on behalf of an external caller.
    ///
    /// Unknown ids leave the state untouched.
    pub fn select_card(&mut self, id: &CardId) -> GalleryResult<Transition> {
        let Some(page) = self.state.index_of(id) else {
            warn!("Selection requested for unknown card '{id}'");
            return Err(GalleryError::UnknownCard(id.clone()));
        };

        let mut transition = Transition::default();
        let previous = self.selection_snapshot();
        self.reconcile(Some(page), previous, &mut transition);
        Ok(self.commit("select_card", transition))
    }

    fn selection_snapshot(&self) -> (Option<CardId>, Option<usize>) {
        (self.state.selected().cloned(), self.state.current_page())
    }

    /// Point the selection at `target` and queue the events describing the
    /// change relative to `previous`.
    fn reconcile(
        &mut self,
        target: Option<usize>,
        previous: (Option<CardId>, Option<usize>),
        transition: &mut Transition,
    ) {
        self.state.select_page(target);

        let (previous_id, previous_page) = previous;
        let current_id = self.state.selected().cloned();
        let current_page = self.state.current_page();
        if previous_id != current_id || previous_page != current_page {
            transition.push(GalleryEvent::SelectionChanged {
                previous: previous_id,
                current: current_id,
                page: current_page,
            });
        }

        if let Some(page) = current_page
            && page != self.state.displayed_page()
        {
            self.state.set_displayed_page(page);
            transition.push(GalleryEvent::ScrollToPage(page));
        }
    }

    fn commit(&mut self, origin: &str, transition: Transition) -> Transition {
        debug_assert!(
            self.state.is_consistent(),
            "gallery state inconsistent after {origin}: {:?}",
            self.state
        );

        if transition.is_noop() {
            trace!("{origin}: no change");
            return transition;
        }

        debug!(
            "{origin}: page={:?} selected={:?} events={}",
            self.state.current_page(),
            self.state.selected().map(CardId::as_str),
            transition.events().len()
        );
        for listener in &mut self.listeners {
            for event in transition.events() {
                listener.on_event(event);
            }
        }
        transition
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn labels(&self) -> &GalleryLabels {
        &self.labels
    }

    pub fn cards(&self) -> &[Card] {
        self.state.cards()
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.state.card(id)
    }

    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.state.index_of(id)
    }

    pub fn selected_card_id(&self) -> Option<&CardId> {
        self.state.selected()
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.state.selected_card()
    }

    pub fn current_page(&self) -> Option<usize> {
        self.state.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The "standard card" label sits above the selected card only, and
    /// only when that card is a standard one.
    pub fn is_standard_label_visible(&self, id: &CardId) -> bool {
        self.state.selected() == Some(id)
            && self.state.card(id).is_some_and(Card::is_standard)
    }

    pub fn standard_label(&self, id: &CardId) -> Option<&str> {
        self.is_standard_label_visible(id)
            .then_some(self.labels.standard_card.as_str())
    }

    /// Whether any card carries a custom name. The custom-name row is shown
    /// for every card of the gallery once one card opts in.
    pub fn has_custom_names(&self) -> bool {
        self.state
            .cards()
            .iter()
            .any(|card| card.custom_name().is_some())
    }

    /// Content of the custom-name row for `id`, or `None` when the row is
    /// hidden or the card is unknown.
    pub fn displayed_custom_name(&self, id: &CardId) -> Option<&str> {
        if !self.has_custom_names() {
            return None;
        }
        let card = self.state.card(id)?;
        Some(
            card.custom_name()
                .unwrap_or(self.labels.no_custom_name.as_str()),
        )
    }
}
