/// Rows shown per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of numbered buttons in the pager.
const PAGE_WINDOW: usize = 5;

/// ceil(count / page_size), never below one so an empty table still has a page 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Rows `[(page - 1) * size, page * size)` clamped to the sequence.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers for the pager, centred on the current page where possible.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let current = clamp_page(current, total_pages);

    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }

    let first = if current <= 3 {
        1
    } else if current >= total_pages - 2 {
        total_pages - (PAGE_WINDOW - 1)
    } else {
        current - 2
    };

    (first..first + PAGE_WINDOW).collect()
}
