use std::io::{self, Write};

use overview_core::gallery::{GalleryEvent, GallerySelectionController};
use overview_core::{GalleryView, PagerLayout, Transition};

pub fn describe_event(event: &GalleryEvent) -> String {
    match event {
        GalleryEvent::CardsReplaced { count } => {
            format!("cards replaced ({count})")
        }
        GalleryEvent::SelectionChanged { current, page, .. } => {
            match (current, page) {
                (Some(id), Some(page)) => {
                    format!("selected {id} (page {page})")
                }
                _ => "selection cleared".to_string(),
            }
        }
        GalleryEvent::ScrollToPage(page) => format!("scroll -> page {page}"),
    }
}

pub fn write_transition<W: Write>(
    out: &mut W,
    transition: &Transition,
) -> io::Result<()> {
    for event in transition.events() {
        writeln!(out, "> {}", describe_event(event))?;
    }
    Ok(())
}

pub fn write_view<W: Write>(
    out: &mut W,
    gallery: &GallerySelectionController,
    layout: &PagerLayout,
) -> io::Result<()> {
    for line in GalleryView::build(gallery, layout).render_text() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
