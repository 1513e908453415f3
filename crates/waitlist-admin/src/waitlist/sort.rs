use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::WaitlistRecord;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Email,
    Phone,
    Postcode,
    VendorType,
    ServiceOffering,
    SignupDate,
    Status,
}

impl SortColumn {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Email,
            Self::Phone,
            Self::Postcode,
            Self::VendorType,
            Self::ServiceOffering,
            Self::SignupDate,
            Self::Status,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Postcode => "Postcode",
            Self::VendorType => "Vendor Type",
            Self::ServiceOffering => "Service Offering",
            Self::SignupDate => "Signup Date",
            Self::Status => "Status",
        }
    }

    /// Accepts the snake_case key or the header label, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ordered().into_iter().find(|column| {
            let label = column.label().to_ascii_lowercase().replace(' ', "_");
            normalized == column_key(*column) || normalized == label
        })
    }

    /// Text columns compare on their displayed value; the signup date compares as a date.
    pub fn compare(self, left: &WaitlistRecord, right: &WaitlistRecord) -> Ordering {
        match self {
            Self::Email => left.email.cmp(&right.email),
            Self::Phone => left.phone.cmp(&right.phone),
            Self::Postcode => left.postcode.cmp(&right.postcode),
            Self::VendorType => left.vendor_type.label().cmp(right.vendor_type.label()),
            Self::ServiceOffering => left
                .service_offering
                .label()
                .cmp(right.service_offering.label()),
            Self::SignupDate => left.signup_date.cmp(&right.signup_date),
            Self::Status => left.status.label().cmp(right.status.label()),
        }
    }
}

const fn column_key(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Email => "email",
        SortColumn::Phone => "phone",
        SortColumn::Postcode => "postcode",
        SortColumn::VendorType => "vendor_type",
        SortColumn::ServiceOffering => "service_offering",
        SortColumn::SignupDate => "signup_date",
        SortColumn::Status => "status",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active table sort. No column means generation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Same column flips direction; a different column starts ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self::by(column, self.direction.flipped())
        } else {
            Self::by(column, SortDirection::Ascending)
        }
    }

    /// Stable in both directions: descending reverses the comparison, not the sequence,
    /// so ties keep their incoming order.
    pub fn apply(&self, rows: &mut [&WaitlistRecord]) {
        let Some(column) = self.column else {
            return;
        };

        match self.direction {
            SortDirection::Ascending => rows.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Descending => rows.sort_by(|a, b| column.compare(b, a)),
        }
    }
}
