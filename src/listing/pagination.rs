use std::ops::Range;

/// 1-based pagination over `total` items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Paginator {
    /// Creates a paginator with `page` clamped to the available pages
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total,
        }
        .with_page(page)
    }

    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: page.clamp(1, self.page_count()),
            ..self
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages, at least one even when there is nothing to show
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Index range of the current page's items
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);

        start..end
    }
}
