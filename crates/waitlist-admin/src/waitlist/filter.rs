use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ServiceOffering, SignupStatus, VendorType, WaitlistRecord};

const DATE_BOUND_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Sidebar filter controls captured as a single immutable snapshot.
///
/// Flags in the same group are OR-ed together; groups are AND-ed. A group with no flag set
/// does not constrain the result. Date bounds are kept as entered so a half-typed value can
/// sit in the draft without being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub postcode: String,
    pub onboarded: bool,
    pub rejected: bool,
    pub start_date: String,
    pub end_date: String,
    pub independent: bool,
    pub company: bool,
    pub housekeeping: bool,
    pub window_cleaning: bool,
    pub car_valet: bool,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self.predicate().is_identity()
    }

    pub fn predicate(&self) -> FilterPredicate {
        FilterPredicate::from_criteria(self)
    }
}

/// Parse a date bound, accepting the date-input form and the table's display form.
/// Anything else is treated as no bound.
pub fn parse_date_bound(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_BOUND_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Compiled form of [`FilterCriteria`], ready to test records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicate {
    postcode: Option<String>,
    statuses: Vec<SignupStatus>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    vendor_types: Vec<VendorType>,
    offerings: Vec<ServiceOffering>,
}

impl FilterPredicate {
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let postcode = criteria.postcode.trim();
        let postcode = (!postcode.is_empty()).then(|| postcode.to_lowercase());

        let statuses = flagged([
            (criteria.onboarded, SignupStatus::Onboarded),
            (criteria.rejected, SignupStatus::Rejected),
        ]);
        let vendor_types = flagged([
            (criteria.independent, VendorType::Independent),
            (criteria.company, VendorType::Company),
        ]);
        let offerings = flagged([
            (criteria.housekeeping, ServiceOffering::Housekeeping),
            (criteria.window_cleaning, ServiceOffering::WindowCleaning),
            (criteria.car_valet, ServiceOffering::CarValet),
        ]);

        Self {
            postcode,
            statuses,
            start: parse_date_bound(&criteria.start_date),
            end: parse_date_bound(&criteria.end_date),
            vendor_types,
            offerings,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &WaitlistRecord) -> bool {
        if let Some(postcode) = &self.postcode {
            if !record.postcode.to_lowercase().contains(postcode.as_str()) {
                return false;
            }
        }

        if !any_or_vacuous(&self.statuses, record.status) {
            return false;
        }

        if let Some(start) = self.start {
            if record.signup_date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if record.signup_date > end {
                return false;
            }
        }

        any_or_vacuous(&self.vendor_types, record.vendor_type)
            && any_or_vacuous(&self.offerings, record.service_offering)
    }
}

fn flagged<T: Copy, const N: usize>(flags: [(bool, T); N]) -> Vec<T> {
    flags
        .into_iter()
        .filter_map(|(set, value)| set.then_some(value))
        .collect()
}

fn any_or_vacuous<T: PartialEq>(allowed: &[T], value: T) -> bool {
    allowed.is_empty() || allowed.contains(&value)
}

/// Free-text search across every displayed column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Trim, collapse whitespace runs, and lowercase. Blank input matches everything.
    pub fn new(raw: &str) -> Self {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let needle = (!collapsed.is_empty()).then(|| collapsed.to_lowercase());
        Self { needle }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, record: &WaitlistRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        let date_label = record.signup_date_label();
        [
            record.email.as_str(),
            record.phone.as_str(),
            record.postcode.as_str(),
            record.vendor_type.label(),
            record.service_offering.label(),
            date_label.as_str(),
            record.status.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

/// Applied criteria AND search, preserving store order.
pub fn filter_records<'a>(
    records: &'a [WaitlistRecord],
    criteria: &FilterCriteria,
    search: &SearchQuery,
) -> Vec<&'a WaitlistRecord> {
    let predicate = criteria.predicate();
    records
        .iter()
        .filter(|record| predicate.matches(record) && search.matches(record))
        .collect()
}
