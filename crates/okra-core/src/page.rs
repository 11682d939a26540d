/// One page of a larger result list, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub number: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    pub fn is_last(&self) -> bool {
        self.number == self.total_pages
    }
}

/// Slice `items` into pages of `page_size` and return the requested one.
///
/// `total_pages` is at least 1 even when `items` is empty, so an empty
/// result renders as "no items" rather than "page 1 of 0". A requested
/// page outside `[1, total_pages]` clamps to the nearest bound.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let number = requested_page.clamp(1, total_pages);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        number,
        total_pages,
        items,
    }
}
