use chrono::NaiveDate;

use super::domain::{RecordId, ServiceOffering, SignupStatus, VendorType, WaitlistRecord};

/// Number of entries generated for the stock sample set.
pub const SAMPLE_RECORD_COUNT: u32 = 52;

const EMAILS: [&str; 6] = [
    "jonesadam@gmail.com",
    "Gler@app.com",
    "Albertwatson@gmail.com",
    "sarah.parker@email.com",
    "mike.johnson@mail.com",
    "emma.wilson@inbox.com",
];

const PHONES: [&str; 4] = [
    "+44 20 7946 0958",
    "+44 20 7123 4567",
    "+44 20 8888 9999",
    "+44 20 5555 6666",
];

pub const POSTCODES: [&str; 6] = [
    "SW1A 1AA", "M1 1AE", "OX1 2JD", "EC1A 1BB", "W1A 0AX", "SE1 9SG",
];

/// Read-only collection of waitlist entries in generation order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<WaitlistRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<WaitlistRecord>) -> Self {
        Self { records }
    }

    /// The stock 52-entry sample set.
    pub fn sample() -> Self {
        Self::generate(SAMPLE_RECORD_COUNT)
    }

    /// Deterministically generate `count` entries with ids `1..=count`.
    pub fn generate(count: u32) -> Self {
        Self::new((1..=count).map(generate_record).collect())
    }

    pub fn records(&self) -> &[WaitlistRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&WaitlistRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn generate_record(index: u32) -> WaitlistRecord {
    let i = index as usize;
    let vendor_types = VendorType::ordered();
    let offerings = ServiceOffering::ordered();
    let statuses = SignupStatus::ordered();

    WaitlistRecord {
        id: RecordId(index),
        email: EMAILS[i % EMAILS.len()].to_string(),
        phone: PHONES[i % PHONES.len()].to_string(),
        postcode: POSTCODES[i % POSTCODES.len()].to_string(),
        vendor_type: vendor_types[i % vendor_types.len()],
        service_offering: offerings[i % offerings.len()],
        signup_date: signup_date(index),
        status: statuses[i % statuses.len()],
    }
}

// Day never exceeds 28, so every generated month/day pair is valid.
fn signup_date(index: u32) -> NaiveDate {
    let year = 2023 + (index % 3) as i32;
    let month = (index % 12) + 1;
    let day = (index % 28) + 1;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_sequential_ids() {
        let store = RecordStore::sample();
        assert_eq!(store.len(), 52);
        let ids: Vec<u32> = store.records().iter().map(|record| record.id.0).collect();
        assert_eq!(ids, (1..=52).collect::<Vec<_>>());
    }

    #[test]
    fn generator_cycles_fields_by_index() {
        let store = RecordStore::sample();
        let first = store.get(RecordId(1)).expect("record 1 exists");
        assert_eq!(first.email, "Gler@app.com");
        assert_eq!(first.phone, "+44 20 7123 4567");
        assert_eq!(first.postcode, "M1 1AE");
        assert_eq!(first.vendor_type, VendorType::Company);
        assert_eq!(first.service_offering, ServiceOffering::WindowCleaning);
        assert_eq!(first.status, SignupStatus::Onboarded);
        assert_eq!(first.signup_date_label(), "02/02/2024");

        let sixth = store.get(RecordId(6)).expect("record 6 exists");
        assert_eq!(sixth.postcode, "SW1A 1AA");
        assert_eq!(sixth.status, SignupStatus::Rejected);
    }

    #[test]
    fn unknown_id_is_absent() {
        assert!(RecordStore::sample().get(RecordId(53)).is_none());
        assert!(RecordStore::generate(0).is_empty());
    }
}
