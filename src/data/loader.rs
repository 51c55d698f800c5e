use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::model::{City, TripRecord, TripTable};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row as it appears on disk. Timestamps stay as text here because
/// an empty field is legal (a null) while a malformed one is not, and serde
/// alone can't tell the two apart.
#[derive(Debug, Deserialize)]
struct RawTrip {
    /// The export's leading index column has an empty header.
    #[serde(rename = "")]
    id: u64,
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    // Chicago and New York City only
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_record(self, row: usize) -> Result<TripRecord> {
        Ok(TripRecord {
            id: self.id,
            start_time: parse_timestamp(&self.start_time)
                .with_context(|| format!("row {row}: bad 'Start Time'"))?,
            end_time: parse_timestamp(&self.end_time)
                .with_context(|| format!("row {row}: bad 'End Time'"))?,
            duration_secs: self.duration_secs,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: self.user_type.filter(|s| !s.is_empty()),
            gender: self.gender.filter(|s| !s.is_empty()),
            birth_year: self.birth_year.map(|y| y as i32),
        })
    }
}

/// Empty field → null; anything else must parse or the load fails.
fn parse_timestamp(field: &str) -> Result<Option<NaiveDateTime>> {
    if field.trim().is_empty() {
        return Ok(None);
    }
    let ts = NaiveDateTime::parse_from_str(field.trim(), TIMESTAMP_FORMAT)
        .with_context(|| format!("unparseable timestamp {field:?}"))?;
    Ok(Some(ts))
}

/// Load all trip records for a city from `data_dir`.
///
/// Rows with an empty start time are kept (the filter drops them); a missing
/// file, a malformed row, or an unparseable non-empty timestamp aborts the
/// load.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = data_dir.join(city.data_file());
    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<RawTrip>().enumerate() {
        // Row 1 is the first data row; the header is row 0.
        let row_no = i + 1;
        let raw = row.with_context(|| format!("row {row_no}: malformed record"))?;
        records.push(raw.into_record(row_no)?);
    }

    let null_starts = records.iter().filter(|r| r.start_time.is_none()).count();
    if null_starts > 0 {
        log::warn!(
            "{}: {null_starts} of {} records have no start time",
            city,
            records.len()
        );
    }
    log::info!("loaded {} trip records for {}", records.len(), city);

    Ok(TripTable {
        city,
        records,
        has_gender,
        has_birth_year,
    })
}
