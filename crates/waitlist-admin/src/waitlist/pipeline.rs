use super::domain::WaitlistRecord;
use super::filter::{filter_records, FilterCriteria, SearchQuery};
use super::pagination::{clamp_page, page_slice, total_pages};
use super::sort::SortState;

/// Inputs to one pass of filter → sort → paginate.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery<'q> {
    pub criteria: &'q FilterCriteria,
    pub search: &'q SearchQuery,
    pub sort: SortState,
    pub page: usize,
    pub page_size: usize,
}

/// Output of one pipeline pass. `page` is already clamped to `1..=total_pages`.
#[derive(Debug, Clone)]
pub struct PageSlice<'a> {
    pub rows: Vec<&'a WaitlistRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// Every record passing the criteria and search, in sorted order.
pub fn ordered_matches<'a>(
    records: &'a [WaitlistRecord],
    criteria: &FilterCriteria,
    search: &SearchQuery,
    sort: SortState,
) -> Vec<&'a WaitlistRecord> {
    let mut matches = filter_records(records, criteria, search);
    sort.apply(&mut matches);
    matches
}

pub fn compute_page<'a>(records: &'a [WaitlistRecord], query: PageQuery<'_>) -> PageSlice<'a> {
    let ordered = ordered_matches(records, query.criteria, query.search, query.sort);
    let total = ordered.len();
    let total_pages = total_pages(total, query.page_size);
    let page = clamp_page(query.page, total_pages);
    let rows = page_slice(&ordered, page, query.page_size).to_vec();

    PageSlice {
        rows,
        page,
        total_pages,
        total,
    }
}
