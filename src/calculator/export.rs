use std::io::Write;

use crate::{calculator::state::Calculator, prelude::*};

const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();

const HEADER: [&str; 8] = [
    "Name",
    "Category",
    "Power (W)",
    "Hours/day",
    "Days/week",
    "kWh/day",
    "kWh/week",
    "kWh/month",
];

/// Write the devices as CSV, prefixed with the UTF-8 byte order mark.
#[instrument(skip_all, fields(n_devices = calculator.devices().len()))]
pub fn write_csv<W: Write>(calculator: &Calculator, mut writer: W) -> Result {
    writer.write_all(BYTE_ORDER_MARK)?;
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for device in calculator.devices() {
        writer.write_record([
            device.name.clone(),
            device.category.to_string(),
            device.power.0.to_string(),
            device.hours_per_day.0.to_string(),
            device.days_per_week.to_string(),
            format!("{:.3}", device.daily_consumption().0),
            format!("{:.3}", device.weekly_consumption().0),
            format!("{:.3}", device.monthly_consumption().0),
        ])?;
    }
    writer.flush().context("failed to flush the CSV")?;
    info!("exported");
    Ok(())
}
