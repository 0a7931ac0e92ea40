//! CSV export for the generated reading store.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::sim::types::EnergyReading;

/// Column header for the readings export.
const HEADER: &str = "id,department_id,department_code,date,source_type,kwh_used,\
                      cost_usd,carbon_kg,efficiency,temperature_c,humidity_pct,condition";

/// Exports readings to a CSV file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_readings_csv(readings: &[EnergyReading], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_readings_csv(readings, io::BufWriter::new(file))
}

/// Writes readings as CSV to any writer, one row per reading in store order.
///
/// Output is byte-identical for identical inputs.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_readings_csv(readings: &[EnergyReading], writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in readings {
        wtr.write_record(&[
            r.id.to_string(),
            r.department_id.to_string(),
            r.department_code.clone(),
            r.timestamp.to_string(),
            r.source_type.as_str().to_string(),
            format!("{:.2}", r.kwh_used),
            format!("{:.4}", r.cost_usd),
            format!("{:.4}", r.carbon_kg),
            format!("{:.2}", r.efficiency),
            format!("{:.1}", r.weather.temperature),
            format!("{:.2}", r.weather.humidity),
            r.weather.condition.as_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
