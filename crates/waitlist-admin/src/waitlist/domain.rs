use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format used for signup dates in the table and in free-text search.
pub const SIGNUP_DATE_FORMAT: &str = "%d/%m/%Y";

/// Identifier wrapper for waitlist entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorType {
    Independent,
    Company,
}

impl VendorType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Independent, Self::Company]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Independent => "Independent",
            Self::Company => "Company",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOffering {
    Housekeeping,
    WindowCleaning,
    CarValet,
    Gardening,
    Plumbing,
}

impl ServiceOffering {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Housekeeping,
            Self::WindowCleaning,
            Self::CarValet,
            Self::Gardening,
            Self::Plumbing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Housekeeping => "Housekeeping",
            Self::WindowCleaning => "Window Cleaning",
            Self::CarValet => "Car Valet",
            Self::Gardening => "Gardening",
            Self::Plumbing => "Plumbing",
        }
    }
}

/// Registration progress for a signup. `Unset` renders as a dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupStatus {
    Unset,
    Onboarded,
    Rejected,
    Pending,
}

impl SignupStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Unset, Self::Onboarded, Self::Rejected, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "-",
            Self::Onboarded => "Onboarded",
            Self::Rejected => "Rejected",
            Self::Pending => "Pending",
        }
    }
}

/// One provider or customer signup on the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistRecord {
    pub id: RecordId,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    pub vendor_type: VendorType,
    pub service_offering: ServiceOffering,
    pub signup_date: NaiveDate,
    pub status: SignupStatus,
}

impl WaitlistRecord {
    pub fn signup_date_label(&self) -> String {
        self.signup_date.format(SIGNUP_DATE_FORMAT).to_string()
    }

    pub fn row_view(&self, selected: bool) -> WaitlistRowView {
        WaitlistRowView {
            id: self.id,
            email: self.email.clone(),
            phone: self.phone.clone(),
            postcode: self.postcode.clone(),
            vendor_type: self.vendor_type,
            vendor_type_label: self.vendor_type.label(),
            service_offering: self.service_offering,
            service_offering_label: self.service_offering.label(),
            signup_date: self.signup_date,
            signup_date_label: self.signup_date_label(),
            status: self.status,
            status_label: self.status.label(),
            selected,
        }
    }
}

/// Table row as rendered on the visible page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistRowView {
    pub id: RecordId,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    pub vendor_type: VendorType,
    pub vendor_type_label: &'static str,
    pub service_offering: ServiceOffering,
    pub service_offering_label: &'static str,
    pub signup_date: NaiveDate,
    pub signup_date_label: String,
    pub status: SignupStatus,
    pub status_label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("waitlist record {0} not found")]
    RecordNotFound(RecordId),
}
