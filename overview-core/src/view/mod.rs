//! Gallery read model
//!
//! Snapshots of everything the rendering layer needs to draw the gallery:
//! one [`PageView`] per card, the optional custom-name row, the page
//! indicator and the details panel of the selected card. Snapshots are
//! rebuilt from the controller after each transition and carry no
//! references back into it.

pub mod card_face;
pub mod details;
pub mod indicator;
pub mod layout;

use overview_model::CardId;

use crate::gallery::GallerySelectionController;

pub use card_face::{CardFace, FaceLine};
pub use details::{CardDetails, StatusTone};
pub use indicator::{DotSize, PageIndicator};
pub use layout::{PagerLayout, PagerPadding};

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    Empty {
        message: String,
    },
    Populated {
        pages: Vec<PageView>,
        current_page: usize,
        /// Present when at least one card in the gallery has a custom name.
        custom_name_row: Option<String>,
        indicator: Option<PageIndicator>,
        details: CardDetails,
        padding: PagerPadding,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub card_id: CardId,
    pub standard_label: Option<String>,
    pub face: CardFace,
}

impl GalleryView {
    pub fn build(
        gallery: &GallerySelectionController,
        layout: &PagerLayout,
    ) -> Self {
        let labels = gallery.labels();
        let (Some(current_page), Some(selected)) =
            (gallery.current_page(), gallery.selected_card())
        else {
            return GalleryView::Empty {
                message: labels.empty_gallery.clone(),
            };
        };

        let pages = gallery
            .cards()
            .iter()
            .map(|card| PageView {
                card_id: card.id().clone(),
                standard_label: gallery
                    .standard_label(card.id())
                    .map(str::to_string),
                face: CardFace::from_card(card, labels),
            })
            .collect();

        GalleryView::Populated {
            pages,
            current_page,
            custom_name_row: gallery
                .displayed_custom_name(selected.id())
                .map(str::to_string),
            indicator: PageIndicator::new(gallery.page_count(), current_page),
            details: CardDetails::from_card(selected, labels),
            padding: layout.padding(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GalleryView::Empty { .. })
    }

    /// Plain text rendering, one element per line.
    pub fn render_text(&self) -> Vec<String> {
        match self {
            GalleryView::Empty { message } => vec![message.clone()],
            GalleryView::Populated {
                pages,
                current_page,
                custom_name_row,
                indicator,
                details,
                ..
            } => {
                let mut out = Vec::new();
                if let Some(page) = pages.get(*current_page) {
                    out.extend(page.standard_label.iter().cloned());
                    for line in page.face.lines() {
                        out.push(format!("  {line}"));
                    }
                    if let Some(overlay) = &page.face.disabled_overlay {
                        out.push(format!("  [{overlay}]"));
                    }
                }
                out.extend(custom_name_row.iter().cloned());
                if let Some(indicator) = indicator {
                    let dots = indicator
                        .dots()
                        .map(|(_, size)| match size {
                            DotSize::Selected => "●",
                            DotSize::Regular => "○",
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    out.push(format!("{dots}  ({})", indicator.caption()));
                }
                out.push(String::new());
                out.extend(details.lines().into_iter().map(str::to_string));
                out
            }
        }
    }
}
