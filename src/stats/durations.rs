use std::fmt;

use chrono::Weekday;

use super::mode_first;
use crate::data::model::{month_name, weekday_name, TripTable};

/// Travel time over the subset of trips matching the table's modal month,
/// modal weekday, and modal route all at once.
#[derive(Debug, PartialEq)]
pub enum DurationWindow {
    /// More than one matching trip: only the extremes are reported.
    Multiple { min_secs: f64, max_secs: f64 },
    /// Exactly one matching trip.
    Single { total_secs: f64 },
    /// No trip matches the three modal values simultaneously.
    Empty,
}

/// Trip-duration report.
///
/// The min/max window deliberately intersects the three *independent* modal
/// values of the input table (month, weekday, route) rather than reusing the
/// user's month/day selection — that is how the tool has always behaved, and
/// the subset is often tiny or empty. The mean is over the whole input
/// table.
#[derive(Debug, PartialEq)]
pub struct DurationStats {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub route: Option<String>,
    pub window: DurationWindow,
    pub mean_secs: Option<f64>,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Self {
        let month = mode_first(table.records.iter().filter_map(|r| r.month()));
        let weekday = mode_first(table.records.iter().filter_map(|r| r.weekday()));
        let route = mode_first(table.records.iter().map(|r| r.route_label()));

        let window = match (month, weekday, route.as_deref()) {
            (Some(m), Some(w), Some(route)) => {
                let durations: Vec<f64> = table
                    .records
                    .iter()
                    .filter(|r| {
                        r.month() == Some(m)
                            && r.weekday() == Some(w)
                            && r.route_label() == route
                    })
                    .map(|r| r.duration_secs)
                    .collect();
                match durations.as_slice() {
                    [] => DurationWindow::Empty,
                    [only] => DurationWindow::Single { total_secs: *only },
                    many => DurationWindow::Multiple {
                        min_secs: many.iter().copied().fold(f64::INFINITY, f64::min),
                        max_secs: many.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                    },
                }
            }
            _ => DurationWindow::Empty,
        };

        let mean_secs = if table.is_empty() {
            None
        } else {
            let sum: f64 = table.records.iter().map(|r| r.duration_secs).sum();
            Some(sum / table.len() as f64)
        };

        DurationStats {
            month,
            weekday,
            route,
            window,
            mean_secs,
        }
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(month), Some(weekday), Some(route)) =
            (self.month, self.weekday, self.route.as_deref())
        else {
            return write!(f, "No trips match the current filter.");
        };
        let month = month_name(month);
        let weekday = weekday_name(weekday);

        writeln!(f, "Most popular trip: {route} in {month} on {weekday}")?;
        match self.window {
            DurationWindow::Multiple { min_secs, max_secs } => {
                writeln!(
                    f,
                    "More than one trip matches, so only the minimum and maximum travel time are shown."
                )?;
                writeln!(f, "Total travel time (min): {min_secs}")?;
                write!(f, "Total travel time (max): {max_secs}")?;
            }
            DurationWindow::Single { total_secs } => {
                write!(f, "Total travel time: {total_secs}")?;
            }
            DurationWindow::Empty => {
                write!(f, "No data for trips in {month} on {weekday}.")?;
            }
        }
        if let Some(mean) = self.mean_secs {
            write!(f, "\nAverage travel time: {mean}")?;
        }
        Ok(())
    }
}
