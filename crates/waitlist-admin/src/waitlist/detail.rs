use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{RecordId, ServiceOffering, SignupStatus, VendorType, WaitlistRecord};

/// Contact block of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub postcode: String,
}

/// Everything the detail/edit modal shows for one record, taken from the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDetail {
    pub id: RecordId,
    pub contact: ContactDetails,
    pub signup_date: NaiveDate,
    pub signup_date_label: String,
    pub vendor_type: VendorType,
    pub vendor_type_label: &'static str,
    pub service_offering: ServiceOffering,
    pub services: Vec<&'static str>,
    pub status: SignupStatus,
    pub status_label: &'static str,
}

impl From<&WaitlistRecord> for RecordDetail {
    fn from(record: &WaitlistRecord) -> Self {
        Self {
            id: record.id,
            contact: ContactDetails {
                email: record.email.clone(),
                phone: record.phone.clone(),
                postcode: record.postcode.clone(),
            },
            signup_date: record.signup_date,
            signup_date_label: record.signup_date_label(),
            vendor_type: record.vendor_type,
            vendor_type_label: record.vendor_type.label(),
            service_offering: record.service_offering,
            services: vec![record.service_offering.label()],
            status: record.status,
            status_label: record.status.label(),
        }
    }
}
