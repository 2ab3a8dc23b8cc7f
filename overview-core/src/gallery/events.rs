//! Change notifications emitted by the selection controller.

use overview_model::CardId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// The card list was replaced with a list of a different content.
    CardsReplaced { count: usize },
    /// The selected card or its page index changed.
    SelectionChanged {
        previous: Option<CardId>,
        current: Option<CardId>,
        page: Option<usize>,
    },
    /// One-way instruction for the surface to move its pager. The surface
    /// must not call back into the controller while handling it.
    ScrollToPage(usize),
}

/// Ordered events produced by one controller call.
///
/// An empty transition means the call changed nothing observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    events: Vec<GalleryEvent>,
}

impl Transition {
    pub(crate) fn push(&mut self, event: GalleryEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GalleryEvent] {
        &self.events
    }

    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    /// Page the surface has been asked to move to, if any.
    pub fn scroll_target(&self) -> Option<usize> {
        self.events.iter().find_map(|event| match event {
            GalleryEvent::ScrollToPage(page) => Some(*page),
            _ => None,
        })
    }

    pub fn selection_changed(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, GalleryEvent::SelectionChanged { .. }))
    }
}

impl IntoIterator for Transition {
    type Item = GalleryEvent;
    type IntoIter = std::vec::IntoIter<GalleryEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Observer notified after each committed transition.
///
/// Listeners only see shared references, so they cannot mutate the
/// controller from inside a notification.
pub trait GalleryListener {
    fn on_event(&mut self, event: &GalleryEvent);
}

impl<F> GalleryListener for F
where
    F: FnMut(&GalleryEvent),
{
    fn on_event(&mut self, event: &GalleryEvent) {
        self(event)
    }
}
