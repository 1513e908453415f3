use super::common::*;

use crate::waitlist::domain::{VendorType, WaitlistRecord};
use crate::waitlist::filter::{FilterCriteria, SearchQuery};
use crate::waitlist::pipeline::ordered_matches;
use crate::waitlist::sort::{SortColumn, SortDirection, SortState};
use crate::waitlist::store::RecordStore;

fn sorted(store: &RecordStore, sort: SortState) -> Vec<&WaitlistRecord> {
    ordered_matches(
        store.records(),
        &FilterCriteria::default(),
        &SearchQuery::default(),
        sort,
    )
}

#[test]
fn no_column_keeps_generation_order() {
    let store = RecordStore::sample();
    let rows = sorted(&store, SortState::default());
    assert_eq!(ids(&rows), (1..=52).collect::<Vec<_>>());
}

#[test]
fn toggling_twice_restores_ascending_order() {
    let store = RecordStore::sample();
    let first = SortState::default().toggled(SortColumn::Email);
    let ascending = ids(&sorted(&store, first));

    let flipped = first.toggled(SortColumn::Email);
    assert_eq!(flipped.direction, SortDirection::Descending);
    let restored = flipped.toggled(SortColumn::Email);

    assert_eq!(ids(&sorted(&store, restored)), ascending);
}

#[test]
fn equal_keys_keep_relative_order_in_both_directions() {
    let store = RecordStore::sample();
    let odd: Vec<u32> = (1..=52).filter(|i| i % 2 == 1).collect();
    let even: Vec<u32> = (1..=52).filter(|i| i % 2 == 0).collect();

    let ascending = sorted(&store, SortState::by(SortColumn::VendorType, SortDirection::Ascending));
    assert_eq!(ascending[0].vendor_type, VendorType::Company);
    assert_eq!(ids(&ascending), [odd.clone(), even.clone()].concat());

    let descending = sorted(&store, SortState::by(SortColumn::VendorType, SortDirection::Descending));
    assert_eq!(descending[0].vendor_type, VendorType::Independent);
    assert_eq!(ids(&descending), [even, odd].concat());
}

#[test]
fn text_columns_sort_lexicographically() {
    let store = RecordStore::sample();
    let rows = sorted(&store, SortState::by(SortColumn::Status, SortDirection::Ascending));
    let labels: Vec<&str> = rows.iter().map(|record| record.status.label()).collect();

    let mut expected = labels.clone();
    expected.sort();
    assert_eq!(labels, expected);
    assert_eq!(labels[0], "-");
    assert_eq!(labels[51], "Rejected");
}

#[test]
fn signup_date_sorts_chronologically() {
    let store = RecordStore::sample();
    let rows = sorted(&store, SortState::by(SortColumn::SignupDate, SortDirection::Descending));
    assert!(rows
        .windows(2)
        .all(|pair| pair[0].signup_date >= pair[1].signup_date));
    assert_eq!(ids(&rows[..4]), vec![23, 47, 11, 35]);
}
