use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::detail::RecordDetail;
use super::domain::{RecordId, WaitlistError, WaitlistRecord, WaitlistRowView};
use super::filter::{FilterCriteria, SearchQuery};
use super::notify::Notifier;
use super::pagination::{clamp_page, page_window};
use super::pipeline::{compute_page, ordered_matches, PageQuery, PageSlice};
use super::sort::{SortColumn, SortState};
use super::store::RecordStore;

pub const FILTERS_APPLIED_MESSAGE: &str = "Filters applied successfully!";
pub const FILTERS_CLEARED_MESSAGE: &str = "All filters cleared!";

/// Rendered table page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistPage {
    pub rows: Vec<WaitlistRowView>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub page_size: usize,
    pub page_window: Vec<usize>,
    pub sort: SortState,
    pub search: String,
    pub all_selected: bool,
    pub selected_count: usize,
}

/// Draft and applied sidebar snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSnapshot {
    pub draft: FilterCriteria,
    pub applied: FilterCriteria,
}

/// Dashboard session state: filters, search, sort, page, selection, and the open detail.
///
/// The table only ever reflects the applied criteria. The draft is replaced wholesale as the
/// sidebar changes and becomes visible through [`WaitlistView::apply_filters`].
pub struct WaitlistView<N> {
    store: Arc<RecordStore>,
    notifier: Arc<N>,
    page_size: usize,
    draft: FilterCriteria,
    applied: FilterCriteria,
    search: String,
    sort: SortState,
    page: usize,
    selection: BTreeSet<RecordId>,
    open_detail: Option<RecordId>,
}

impl<N> WaitlistView<N>
where
    N: Notifier,
{
    pub fn new(store: Arc<RecordStore>, notifier: Arc<N>, page_size: usize) -> Self {
        Self {
            store,
            notifier,
            page_size: page_size.max(1),
            draft: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            search: String::new(),
            sort: SortState::default(),
            page: 1,
            selection: BTreeSet::new(),
            open_detail: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    pub fn filters(&self) -> FilterSnapshot {
        FilterSnapshot {
            draft: self.draft.clone(),
            applied: self.applied.clone(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.slice().page
    }

    pub fn selection(&self) -> &BTreeSet<RecordId> {
        &self.selection
    }

    pub fn open_detail_id(&self) -> Option<RecordId> {
        self.open_detail
    }

    /// Replace the sidebar draft. The visible table is unaffected.
    pub fn set_draft(&mut self, draft: FilterCriteria) {
        self.draft = draft;
    }

    /// Commit the draft and return to page 1.
    pub fn apply_filters(&mut self) {
        self.applied = self.draft.clone();
        self.page = 1;
        info!(
            unconstrained = self.applied.is_unconstrained(),
            matches = self.slice().total,
            "waitlist filters applied"
        );
        self.notifier.notify(FILTERS_APPLIED_MESSAGE);
    }

    /// Reset both snapshots to the unconstrained default and return to page 1.
    pub fn clear_filters(&mut self) {
        self.draft = FilterCriteria::default();
        self.applied = FilterCriteria::default();
        self.page = 1;
        info!("waitlist filters cleared");
        self.notifier.notify(FILTERS_CLEARED_MESSAGE);
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Toggle the sort for a column. The current page is kept.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = self.sort.toggled(column);
        debug!(column = column.label(), direction = ?self.sort.direction, "waitlist sorted");
    }

    /// Jump to a page, clamped to the pages the current result set has.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let total_pages = self.slice().total_pages;
        self.page = clamp_page(page, total_pages);
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        let current = self.current_page();
        self.go_to_page(current.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        let current = self.current_page();
        self.go_to_page(current.saturating_sub(1))
    }

    /// Returns true when the row ends up selected.
    pub fn toggle_row(&mut self, id: RecordId) -> bool {
        if self.selection.remove(&id) {
            false
        } else {
            self.selection.insert(id);
            true
        }
    }

    /// Select every row on the visible page, or deselect them if all already are.
    /// Rows on other pages keep their selection.
    pub fn toggle_select_all(&mut self) {
        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }

        if visible.iter().all(|id| self.selection.contains(id)) {
            for id in &visible {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(visible);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn open_detail(&mut self, id: RecordId) -> Result<RecordDetail, WaitlistError> {
        let record = self
            .store
            .get(id)
            .ok_or(WaitlistError::RecordNotFound(id))?;
        self.open_detail = Some(id);
        Ok(RecordDetail::from(record))
    }

    pub fn close_detail(&mut self) -> Option<RecordId> {
        self.open_detail.take()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.slice().rows.iter().map(|record| record.id).collect()
    }

    /// All rows passing the applied criteria and search, sorted, without paging.
    pub fn matching_records(&self) -> Vec<&WaitlistRecord> {
        let search = SearchQuery::new(&self.search);
        ordered_matches(self.store.records(), &self.applied, &search, self.sort)
    }

    /// Recompute the visible page from the store.
    pub fn visible_page(&self) -> WaitlistPage {
        let slice = self.slice();
        let rows: Vec<WaitlistRowView> = slice
            .rows
            .iter()
            .map(|record| record.row_view(self.selection.contains(&record.id)))
            .collect();
        let all_selected = !rows.is_empty() && rows.iter().all(|row| row.selected);

        WaitlistPage {
            page_window: page_window(slice.page, slice.total_pages),
            rows,
            page: slice.page,
            total_pages: slice.total_pages,
            total: slice.total,
            page_size: self.page_size,
            sort: self.sort,
            search: self.search.clone(),
            all_selected,
            selected_count: self.selection.len(),
        }
    }

    fn slice(&self) -> PageSlice<'_> {
        let search = SearchQuery::new(&self.search);
        compute_page(
            self.store.records(),
            PageQuery {
                criteria: &self.applied,
                search: &search,
                sort: self.sort,
                page: self.page,
                page_size: self.page_size,
            },
        )
    }
}
