use std::fmt;

use super::mode_first;
use crate::data::model::TripTable;

/// The most popular stations and route.
#[derive(Debug, PartialEq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub route: Option<String>,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Self {
        StationStats {
            start_station: mode_first(table.records.iter().map(|r| r.start_station.clone())),
            end_station: mode_first(table.records.iter().map(|r| r.end_station.clone())),
            route: mode_first(table.records.iter().map(|r| r.route_label())),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.start_station, &self.end_station, &self.route) {
            (Some(start), Some(end), Some(route)) => {
                writeln!(f, "Most common start station: {start}")?;
                writeln!(f, "Most common end station: {end}")?;
                write!(f, "Most common start to end station trip: {route}")
            }
            _ => write!(f, "No trips match the current filter."),
        }
    }
}
