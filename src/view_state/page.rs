//! Pagination over the ordered record list.

/// Records shown per page.
pub const PAGE_SIZE: usize = 5;

/// Pages shown on each side of the current page in the page strip.
const STRIP_DELTA: usize = 2;

/// Number of pages needed for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, total]`.
pub fn clamp_page(page_number: usize, total: usize) -> usize {
    page_number.clamp(1, total.max(1))
}

/// Slice of `list` shown on 1-based `page_number`, clamped to bounds.
pub fn page<T>(list: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(list.len());
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Resolved pagination for one rendering of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
    pub total_pages: usize,
}

impl Page {
    /// Resolve `requested` against `filtered_len` items, clamping the
    /// page number into range.
    pub fn resolve(requested: usize, size: usize, filtered_len: usize) -> Self {
        let total_pages = total_pages(filtered_len, size);
        Self {
            number: clamp_page(requested, total_pages),
            size,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// One entry of the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(usize),
    /// Elided run of pages.
    Gap,
}

/// Page strip around `current`: first page, a window of
/// [`STRIP_DELTA`] pages on each side, last page, with gaps where pages
/// are elided. Empty when there is only one page.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }

    let mut strip = vec![PageMarker::Number(1)];
    if current > STRIP_DELTA + 2 {
        strip.push(PageMarker::Gap);
    }

    let low = current.saturating_sub(STRIP_DELTA).max(2);
    let high = current.saturating_add(STRIP_DELTA).min(total - 1);
    strip.extend((low..=high).map(PageMarker::Number));

    if current.saturating_add(STRIP_DELTA) < total - 1 {
        strip.push(PageMarker::Gap);
    }
    strip.push(PageMarker::Number(total));
    strip
}
