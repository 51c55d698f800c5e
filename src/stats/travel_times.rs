use std::fmt;

use chrono::Weekday;

use super::mode_first;
use crate::data::model::{month_name, weekday_name, TripTable};

/// The most frequent times of travel: modal month, weekday, and start hour.
#[derive(Debug, PartialEq)]
pub struct TravelTimeStats {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub start_hour: Option<u32>,
}

impl TravelTimeStats {
    pub fn compute(table: &TripTable) -> Self {
        TravelTimeStats {
            month: mode_first(table.records.iter().filter_map(|r| r.month())),
            weekday: mode_first(table.records.iter().filter_map(|r| r.weekday())),
            start_hour: mode_first(table.records.iter().filter_map(|r| r.start_hour())),
        }
    }
}

impl fmt::Display for TravelTimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.weekday, self.start_hour) {
            (Some(month), Some(weekday), Some(hour)) => {
                writeln!(f, "Most common month: {}", month_name(month))?;
                writeln!(f, "Most common day of week: {}", weekday_name(weekday))?;
                write!(f, "Most common start hour: {hour}")
            }
            _ => write!(f, "No trips match the current filter."),
        }
    }
}
