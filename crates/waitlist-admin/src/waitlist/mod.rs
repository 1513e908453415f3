//! Waitlist dashboard core: record store, filter → sort → paginate pipeline, and the session
//! view that the sidebar, table, detail modal, and toast drive.

pub mod detail;
pub mod domain;
pub mod export;
pub mod filter;
pub mod notify;
pub mod pagination;
pub mod pipeline;
pub mod router;
pub mod sort;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use detail::{ContactDetails, RecordDetail};
pub use domain::{
    RecordId, ServiceOffering, SignupStatus, VendorType, WaitlistError, WaitlistRecord,
    WaitlistRowView, SIGNUP_DATE_FORMAT,
};
pub use export::write_csv;
pub use filter::{filter_records, parse_date_bound, FilterCriteria, FilterPredicate, SearchQuery};
pub use notify::{Notifier, Toast, ToastNotifier};
pub use pagination::{clamp_page, page_slice, page_window, total_pages, DEFAULT_PAGE_SIZE};
pub use pipeline::{compute_page, ordered_matches, PageQuery, PageSlice};
pub use router::{waitlist_router, SharedWaitlist};
pub use sort::{SortColumn, SortDirection, SortState};
pub use store::{RecordStore, SAMPLE_RECORD_COUNT};
pub use view::{
    FilterSnapshot, WaitlistPage, WaitlistView, FILTERS_APPLIED_MESSAGE, FILTERS_CLEARED_MESSAGE,
};
