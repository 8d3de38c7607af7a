use crate::domain::model::{RideItem, RideVector};
use crate::utils::error::{PlannerError, Result};
use std::path::Path;
use std::sync::Arc;

/// Load all valid ride items from a caret-delimited database file.
///
/// The first line is a header and is skipped. Each record carries exactly
/// three fields: description, cost in dollars, time in minutes. Records with
/// unparsable numbers or failing item validation are skipped; a record with
/// the wrong field count aborts the whole load. An unreadable file is a load
/// failure, distinct from an empty catalog.
pub fn load_ride_database<P: AsRef<Path>>(path: P) -> Result<RideVector> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'^')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_path(path)?;

    let mut rides = RideVector::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != 3 {
            return Err(PlannerError::MalformedRecord {
                line,
                found: record.len(),
            });
        }

        let cost_dollars: f64 = match record[1].trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!("Skipping line {}: unparsable cost '{}'", line, &record[1]);
                continue;
            }
        };
        let time_minutes: f64 = match record[2].trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!("Skipping line {}: unparsable time '{}'", line, &record[2]);
                continue;
            }
        };

        match RideItem::new(&record[0], cost_dollars, time_minutes) {
            Ok(item) => rides.push(Arc::new(item)),
            Err(e) => {
                tracing::debug!("Skipping line {}: {}", line, e);
            }
        }
    }

    Ok(rides)
}
