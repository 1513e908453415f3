use super::common::*;
use chrono::NaiveDate;

use crate::waitlist::domain::{ServiceOffering, SignupStatus, VendorType};
use crate::waitlist::filter::{filter_records, FilterCriteria, SearchQuery};
use crate::waitlist::store::{RecordStore, POSTCODES};

#[test]
fn default_criteria_pass_every_record() {
    let store = RecordStore::sample();
    let matched = filter_records(store.records(), &FilterCriteria::default(), &SearchQuery::default());
    assert_eq!(matched.len(), 52);
    assert_eq!(ids(&matched), (1..=52).collect::<Vec<_>>());
}

#[test]
fn empty_search_is_no_constraint() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        company: true,
        onboarded: true,
        ..FilterCriteria::default()
    };

    let unsearched = filter_records(store.records(), &criteria, &SearchQuery::default());
    for blank in ["", "   ", "\t\n"] {
        let searched = filter_records(store.records(), &criteria, &SearchQuery::new(blank));
        assert_eq!(ids(&searched), ids(&unsearched), "query {blank:?}");
    }
}

#[test]
fn postcode_substring_matches_generated_postcode_only() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        postcode: "sw1a".to_string(),
        ..FilterCriteria::default()
    };

    let matched = filter_records(store.records(), &criteria, &SearchQuery::default());
    let expected: Vec<u32> = (1..=52u32)
        .filter(|i| POSTCODES[*i as usize % POSTCODES.len()] == "SW1A 1AA")
        .collect();

    assert_eq!(ids(&matched), expected);
    assert_eq!(matched.len(), 8);
    assert!(matched.iter().all(|record| record.postcode == "SW1A 1AA"));
}

#[test]
fn status_flags_are_or_within_group() {
    let store = RecordStore::sample();
    let both = FilterCriteria {
        onboarded: true,
        rejected: true,
        ..FilterCriteria::default()
    };
    let matched = filter_records(store.records(), &both, &SearchQuery::default());

    assert_eq!(matched.len(), 26);
    assert!(matched
        .iter()
        .all(|record| matches!(record.status, SignupStatus::Onboarded | SignupStatus::Rejected)));
}

#[test]
fn groups_are_and_across_categories() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        independent: true,
        housekeeping: true,
        window_cleaning: true,
        ..FilterCriteria::default()
    };

    let matched = filter_records(store.records(), &criteria, &SearchQuery::default());
    assert!(!matched.is_empty());
    for record in &matched {
        assert_eq!(record.vendor_type, VendorType::Independent);
        assert!(matches!(
            record.service_offering,
            ServiceOffering::Housekeeping | ServiceOffering::WindowCleaning
        ));
    }

    let expected = store
        .records()
        .iter()
        .filter(|record| {
            record.vendor_type == VendorType::Independent
                && matches!(
                    record.service_offering,
                    ServiceOffering::Housekeeping | ServiceOffering::WindowCleaning
                )
        })
        .count();
    assert_eq!(matched.len(), expected);
}

#[test]
fn unflagged_offerings_pass_only_without_service_constraint() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        car_valet: true,
        ..FilterCriteria::default()
    };

    let matched = filter_records(store.records(), &criteria, &SearchQuery::default());
    assert!(matched
        .iter()
        .all(|record| record.service_offering == ServiceOffering::CarValet));
    assert!(!matched.iter().any(|record| matches!(
        record.service_offering,
        ServiceOffering::Gardening | ServiceOffering::Plumbing
    )));
}

#[test]
fn date_range_is_inclusive_and_half_open_bounds_work() {
    let store = RecordStore::sample();
    let start = NaiveDate::from_ymd_opt(2024, 2, 2).expect("valid");
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid");

    let bounded = FilterCriteria {
        start_date: "2024-02-02".to_string(),
        end_date: "31/12/2024".to_string(),
        ..FilterCriteria::default()
    };
    let matched = filter_records(store.records(), &bounded, &SearchQuery::default());
    assert!(matched.iter().any(|record| record.signup_date == start));
    assert!(matched
        .iter()
        .all(|record| record.signup_date >= start && record.signup_date <= end));

    let from_only = FilterCriteria {
        start_date: "2025-01-01".to_string(),
        ..FilterCriteria::default()
    };
    let matched = filter_records(store.records(), &from_only, &SearchQuery::default());
    assert_eq!(
        matched.len(),
        store
            .records()
            .iter()
            .filter(|record| record.signup_date.format("%Y").to_string() == "2025")
            .count()
    );
}

#[test]
fn malformed_date_bound_applies_no_date_constraint() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        start_date: "2024-99-01".to_string(),
        ..FilterCriteria::default()
    };

    let matched = filter_records(store.records(), &criteria, &SearchQuery::default());
    assert_eq!(matched.len(), 52);
}

#[test]
fn search_matches_any_displayed_column() {
    let store = RecordStore::sample();

    let by_email = filter_records(store.records(), &FilterCriteria::default(), &SearchQuery::new("GLER@APP"));
    assert!(!by_email.is_empty());
    assert!(by_email.iter().all(|record| record.email == "Gler@app.com"));

    let by_phone = filter_records(
        store.records(),
        &FilterCriteria::default(),
        &SearchQuery::new("  20   8888 "),
    );
    assert!(by_phone.iter().all(|record| record.phone == "+44 20 8888 9999"));
    assert_eq!(by_phone.len(), 13);

    let by_date = filter_records(store.records(), &FilterCriteria::default(), &SearchQuery::new("02/02/2024"));
    assert_eq!(ids(&by_date), vec![1]);

    let by_offering =
        filter_records(store.records(), &FilterCriteria::default(), &SearchQuery::new("car valet"));
    assert!(by_offering
        .iter()
        .all(|record| record.service_offering == ServiceOffering::CarValet));

    let by_dash = filter_records(store.records(), &FilterCriteria::default(), &SearchQuery::new("-"));
    assert!(by_dash
        .iter()
        .all(|record| record.status == SignupStatus::Unset));
}

#[test]
fn search_and_filters_combine() {
    let store = RecordStore::sample();
    let criteria = FilterCriteria {
        rejected: true,
        ..FilterCriteria::default()
    };

    let matched = filter_records(store.records(), &criteria, &SearchQuery::new("sw1a"));
    assert!(matched.iter().all(|record| {
        record.status == SignupStatus::Rejected && record.postcode == "SW1A 1AA"
    }));
    assert_eq!(ids(&matched), vec![6, 18, 30, 42]);
}
