use std::fmt;

use super::{modes, value_counts};
use crate::data::model::TripTable;

/// Gender breakdown for cities whose files carry the column.
#[derive(Debug, PartialEq)]
pub struct GenderCounts {
    /// Counts per value, sorted by descending value.
    pub counts: Vec<(String, usize)>,
    /// Records with the column present but no value.
    pub omitted: usize,
}

/// Birth-year summary for cities whose files carry the column.
#[derive(Debug, PartialEq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    /// All years tied for most common, in first-occurrence order.
    pub most_common: Vec<i32>,
}

/// User demographics: user-type counts plus the optional gender and
/// birth-year breakdowns. The optional parts are `None` when the city's
/// file lacks the column (or, for birth year, has no values at all) and the
/// report degrades to an informational line.
#[derive(Debug, PartialEq)]
pub struct UserStats {
    /// Counts per user type, descending count, missing values excluded.
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<GenderCounts>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Self {
        let (user_types, _) =
            value_counts(table.records.iter().map(|r| r.user_type.clone()));

        let genders = table.has_gender.then(|| {
            let (mut counts, omitted) =
                value_counts(table.records.iter().map(|r| r.gender.clone()));
            counts.sort_by(|a, b| b.0.cmp(&a.0));
            GenderCounts { counts, omitted }
        });

        let years: Vec<i32> = table.records.iter().filter_map(|r| r.birth_year).collect();
        let birth_years = (table.has_birth_year && !years.is_empty()).then(|| BirthYearStats {
            earliest: years.iter().copied().min().unwrap_or_default(),
            most_recent: years.iter().copied().max().unwrap_or_default(),
            most_common: modes(years.iter().copied()),
        });

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }
}

/// Join years as `"1989, 1990 & 1991"` — commas between all but the last
/// pair, which gets an ampersand.
fn join_years(years: &[i32]) -> String {
    let mut out = String::new();
    for (i, year) in years.iter().enumerate() {
        if i > 0 {
            out.push_str(if i == years.len() - 1 { " & " } else { ", " });
        }
        out.push_str(&year.to_string());
    }
    out
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user_types.is_empty() {
            writeln!(f, "No user type data available.")?;
        }
        for (user_type, count) in &self.user_types {
            writeln!(f, "{user_type} Counts: {count}")?;
        }
        match &self.genders {
            Some(genders) => {
                for (gender, count) in &genders.counts {
                    writeln!(f, "{gender} counts: {count}")?;
                }
                if genders.omitted > 0 {
                    writeln!(f, "Gender Omitted Counts: {}", genders.omitted)?;
                }
            }
            None => writeln!(f, "No gender data available.")?,
        }
        match &self.birth_years {
            Some(years) => {
                writeln!(f, "The earliest birth year: {}", years.earliest)?;
                writeln!(f, "The most recent birth year: {}", years.most_recent)?;
                write!(f, "The most common birth year: {}", join_years(&years.most_common))
            }
            None => write!(f, "No birth year data available."),
        }
    }
}
