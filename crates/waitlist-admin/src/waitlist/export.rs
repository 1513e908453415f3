use std::io::Write;

use serde::Serialize;

use super::domain::WaitlistRecord;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u32,
    email: &'a str,
    phone: &'a str,
    postcode: &'a str,
    vendor_type: &'static str,
    service_offering: &'static str,
    signup_date: String,
    status: &'static str,
}

impl<'a> From<&'a WaitlistRecord> for CsvRow<'a> {
    fn from(record: &'a WaitlistRecord) -> Self {
        Self {
            id: record.id.0,
            email: &record.email,
            phone: &record.phone,
            postcode: &record.postcode,
            vendor_type: record.vendor_type.label(),
            service_offering: record.service_offering.label(),
            signup_date: record.signup_date_label(),
            status: record.status.label(),
        }
    }
}

/// Write rows with a header line, using the labels shown in the table.
pub fn write_csv<W: Write>(records: &[&WaitlistRecord], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(CsvRow::from(*record))?;
    }
    writer.flush()?;
    Ok(())
}
