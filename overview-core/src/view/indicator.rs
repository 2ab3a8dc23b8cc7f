/// Dot row under the pager. Only built for galleries with two or more
/// pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub total: usize,
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotSize {
    Regular,
    Selected,
}

impl PageIndicator {
    pub fn new(total: usize, selected: usize) -> Option<Self> {
        (total > 1 && selected < total).then_some(Self { total, selected })
    }

    pub fn dots(&self) -> impl Iterator<Item = (usize, DotSize)> + '_ {
        (0..self.total).map(move |index| {
            let size = if index == self.selected {
                DotSize::Selected
            } else {
                DotSize::Regular
            };
            (index, size)
        })
    }

    /// Human readable position, 1-based.
    pub fn caption(&self) -> String {
        format!("Page {} of {}", self.selected + 1, self.total)
    }
}
