use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// City – the three supported datasets
// ---------------------------------------------------------------------------

/// One of the three cities we ship data for. Each maps to a fixed CSV file
/// name resolved against the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// File name of the city's trip data.
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown city: {0:?}")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(UnknownCity(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Calendar name lookups
// ---------------------------------------------------------------------------

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display name for a 1-based month number. Panics on 0 or >12, which never
/// come out of a parsed timestamp.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Parse a month name the user may filter by (the datasets cover
/// January–June only). Case-insensitive.
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES[..6]
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full weekday name, case-insensitive.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .find(|d| weekday_name(*d).eq_ignore_ascii_case(name))
}

// ---------------------------------------------------------------------------
// TripRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single bike-share ride.
///
/// `start_time` is `None` when the source field was empty; such rows survive
/// loading but are dropped by every filter pass. `gender` and `birth_year`
/// are `None` both for missing values and for cities whose files lack the
/// column entirely — [`TripTable`] records which of the two it is.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Row id from the CSV's leading unnamed index column.
    pub id: u64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Trip duration in seconds.
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Month number (1–12) derived from the start time.
    pub fn month(&self) -> Option<u32> {
        self.start_time.map(|t| t.month())
    }

    /// Weekday derived from the start time.
    pub fn weekday(&self) -> Option<Weekday> {
        self.start_time.map(|t| t.weekday())
    }

    /// Start hour (0–23) derived from the start time.
    pub fn start_hour(&self) -> Option<u32> {
        self.start_time.map(|t| t.hour())
    }

    /// Concatenated route label, always `"{start station} to {end station}"`.
    pub fn route_label(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

// ---------------------------------------------------------------------------
// TripTable – the loaded (or filtered) dataset
// ---------------------------------------------------------------------------

/// One city's trip records in file order, plus schema flags for the two
/// columns not every city ships.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub records: Vec<TripRecord>,
    /// Whether the source file had a `Gender` column at all.
    pub has_gender: bool,
    /// Whether the source file had a `Birth Year` column at all.
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
