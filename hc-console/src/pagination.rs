//! Client-side pagination
//!
//! The whole list is always fetched; paging only decides which slice is
//! rendered.

use std::fmt;
use std::ops::Range;

/// Page-size choices offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::TwentyFive, Self::Fifty, Self::Hundred];

    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Enabled state of the navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

/// Current page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    page_size: PageSize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: PageSize::default(),
        }
    }
}

impl Paginator {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current: 1,
            page_size,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// ceil(len / page size); zero for an empty list
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.get())
    }

    /// Highest reachable page; an empty list still shows page 1
    fn last_page(&self, len: usize) -> usize {
        self.total_pages(len).max(1)
    }

    /// Changing the size always returns to page 1
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current = 1;
    }

    /// Jump to `page`, clamped into the valid range
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current = page.clamp(1, self.last_page(len));
    }

    pub fn first(&mut self) {
        self.current = 1;
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.current + 1, len);
    }

    pub fn last(&mut self, len: usize) {
        self.current = self.last_page(len);
    }

    /// Pull the current page back in range after the list shrank
    pub fn clamp(&mut self, len: usize) {
        self.go_to(self.current, len);
    }

    /// Which navigation buttons are enabled. An empty list counts as a single
    /// page here, so Next and Last are disabled instead of pointing past page 0.
    pub fn controls(&self, len: usize) -> NavControls {
        let at_start = self.current <= 1;
        let at_end = self.current >= self.last_page(len);
        NavControls {
            first: !at_start,
            previous: !at_start,
            next: !at_end,
            last: !at_end,
        }
    }

    pub fn bounds(&self, len: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = ((self.current - 1) * size).min(len);
        let end = (start + size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds(items.len())]
    }
}
