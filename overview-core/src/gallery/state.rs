//! GalleryState: card list plus the selection/page pair kept in sync

use overview_model::{Card, CardId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    // Content. Order is page order: page `i` shows `cards[i]`.
    cards: Vec<Card>,

    // Selection
    selected: Option<CardId>,
    current_page: Option<usize>,

    /// Page the surface is last known to display. A freshly laid out pager
    /// starts at page 0, so this falls back to 0 whenever the list empties.
    ///
    /// Between controller calls it always equals `current_page` (or 0 when
    /// empty). It only differs mid-transition, where the gap decides
    /// whether a `ScrollToPage` is emitted.
    displayed_page: usize,
}

impl GalleryState {
    /// Build a state for an already validated card list, selecting the
    /// first card if there is one.
    pub(crate) fn new(cards: Vec<Card>) -> Self {
        let mut state = Self {
            cards,
            ..Self::default()
        };
        let first = if state.cards.is_empty() { None } else { Some(0) };
        state.select_page(first);
        state
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn selected(&self) -> Option<&CardId> {
        self.selected.as_ref()
    }

    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    pub fn displayed_page(&self) -> usize {
        self.displayed_page
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.current_page.and_then(|page| self.cards.get(page))
    }

    /// True when the selection and page agree with each other and with
    /// the card list.
    pub fn is_consistent(&self) -> bool {
        match (self.cards.is_empty(), &self.selected, self.current_page) {
            (true, None, None) => true,
            (false, Some(id), Some(page)) => self
                .cards
                .get(page)
                .is_some_and(|card| card.id() == id),
            _ => false,
        }
    }

    pub(crate) fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Point selection and page at `page`, or clear both. `page` must be a
    /// valid index into the current cards.
    pub(crate) fn select_page(&mut self, page: Option<usize>) {
        match page.and_then(|page| self.cards.get(page).map(|c| (page, c))) {
            Some((page, card)) => {
                self.selected = Some(card.id().clone());
                self.current_page = Some(page);
            }
            None => {
                self.selected = None;
                self.current_page = None;
                self.displayed_page = 0;
            }
        }
    }

    pub(crate) fn set_displayed_page(&mut self, page: usize) {
        self.displayed_page = page;
    }
}
