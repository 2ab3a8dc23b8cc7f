//! Pager geometry derived from the screen width.

/// Static layout inputs for the card pager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerLayout {
    /// Available width in density independent pixels.
    pub screen_width: f32,
    /// Share of the screen width a card occupies.
    pub card_width_proportion: f32,
    pub page_spacing: f32,
    /// Width / height of a card.
    pub card_aspect_ratio: f32,
}

impl Default for PagerLayout {
    fn default() -> Self {
        Self {
            screen_width: 360.0,
            card_width_proportion: 0.85,
            page_spacing: 16.0,
            card_aspect_ratio: 1.586,
        }
    }
}

impl PagerLayout {
    pub fn padding(&self) -> PagerPadding {
        PagerPadding::for_width(self.screen_width, self.card_width_proportion)
    }

    pub fn card_width(&self) -> f32 {
        self.screen_width.max(0.0) - 2.0 * self.padding().horizontal
    }

    pub fn card_height(&self) -> f32 {
        let ratio = self.card_aspect_ratio;
        if ratio <= 0.0 {
            return 0.0;
        }
        self.card_width() / ratio
    }
}

/// Horizontal content padding that centers a card of the configured width
/// and lets the neighbouring cards peek in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PagerPadding {
    pub horizontal: f32,
}

impl PagerPadding {
    pub fn for_width(screen_width: f32, proportion: f32) -> Self {
        let width = screen_width.max(0.0);
        let proportion = if proportion > 0.0 {
            proportion.min(1.0)
        } else {
            1.0
        };
        let card_width = width * proportion;
        Self {
            horizontal: (width - card_width) / 2.0,
        }
    }
}
