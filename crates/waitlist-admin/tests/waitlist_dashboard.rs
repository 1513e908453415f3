use std::sync::{Arc, Mutex};

use waitlist_admin::waitlist::{
    compute_page, ordered_matches, total_pages, write_csv, FilterCriteria, Notifier, PageQuery,
    RecordId, RecordStore, SearchQuery, SortColumn, SortDirection, SortState, WaitlistView,
    DEFAULT_PAGE_SIZE,
};

#[derive(Default)]
struct CollectingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier mutex poisoned")
            .push(message.to_string());
    }
}

fn dashboard() -> WaitlistView<CollectingNotifier> {
    WaitlistView::new(
        Arc::new(RecordStore::sample()),
        Arc::new(CollectingNotifier::default()),
        DEFAULT_PAGE_SIZE,
    )
}

#[test]
fn sidebar_workflow_filters_sorts_and_pages() {
    let mut view = dashboard();

    view.set_draft(FilterCriteria {
        company: true,
        ..FilterCriteria::default()
    });
    assert_eq!(view.visible_page().total, 52);

    view.apply_filters();
    let page = view.visible_page();
    assert_eq!(page.total, 26);
    assert_eq!(page.total_pages, 3);
    assert!(page.rows.iter().all(|row| row.vendor_type_label == "Company"));

    view.sort_by(SortColumn::Postcode);
    let page = view.visible_page();
    let postcodes: Vec<&str> = page.rows.iter().map(|row| row.postcode.as_str()).collect();
    let mut expected = postcodes.clone();
    expected.sort();
    assert_eq!(postcodes, expected);

    assert_eq!(view.go_to_page(3), 3);
    assert_eq!(view.visible_page().rows.len(), 6);

    view.set_search("pending");
    let page = view.visible_page();
    assert_eq!(page.page, 1);
    assert!(page.rows.iter().all(|row| row.status_label == "Pending"));
}

#[test]
fn every_page_concatenates_to_the_sorted_result() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        onboarded: true,
        rejected: true,
        ..FilterCriteria::default()
    };
    let search = SearchQuery::default();
    let sort = SortState::by(SortColumn::Email, SortDirection::Descending);

    let full: Vec<RecordId> = ordered_matches(store.records(), &criteria, &search, sort)
        .iter()
        .map(|record| record.id)
        .collect();
    let pages = total_pages(full.len(), DEFAULT_PAGE_SIZE);
    assert_eq!(pages, 3);

    let mut rebuilt = Vec::new();
    for page in 1..=pages {
        let slice = compute_page(
            store.records(),
            PageQuery {
                criteria: &criteria,
                search: &search,
                sort,
                page,
                page_size: DEFAULT_PAGE_SIZE,
            },
        );
        assert_eq!(slice.page, page);
        rebuilt.extend(slice.rows.iter().map(|record| record.id));
    }

    assert_eq!(rebuilt, full);
}

#[test]
fn export_writes_all_matching_rows_unpaginated() {
    let mut view = dashboard();
    view.set_draft(FilterCriteria {
        postcode: "ox1".to_string(),
        ..FilterCriteria::default()
    });
    view.apply_filters();

    let mut buffer = Vec::new();
    write_csv(&view.matching_records(), &mut buffer).expect("export succeeds");
    let text = String::from_utf8(buffer).expect("utf8");

    assert_eq!(text.lines().count(), 1 + 9);
    assert!(text.lines().skip(1).all(|line| line.contains("OX1 2JD")));
}
