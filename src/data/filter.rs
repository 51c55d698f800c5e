use chrono::Weekday;

use super::model::{month_from_name, weekday_from_name, TripTable};

// ---------------------------------------------------------------------------
// Selectors – a dimension constraint or the "all" sentinel
// ---------------------------------------------------------------------------

/// Month constraint. The prompts only offer January–June since that's all
/// the datasets cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    All,
    Month(u32),
}

impl MonthSelector {
    /// Parse user input: a month name or `all`, case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(MonthSelector::All);
        }
        month_from_name(input).map(MonthSelector::Month)
    }
}

/// Weekday constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    All,
    Day(Weekday),
}

impl DaySelector {
    /// Parse user input: a full weekday name or `all`, case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(DaySelector::All);
        }
        weekday_from_name(input).map(DaySelector::Day)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the subset of `table` matching both selectors.
///
/// `All` puts no constraint on its dimension. Records with a null start
/// time are always dropped, even under `All`/`All`. The result may be
/// empty; the reporters are expected to cope.
pub fn apply(table: &TripTable, month: MonthSelector, day: DaySelector) -> TripTable {
    let records: Vec<_> = table
        .records
        .iter()
        .filter(|r| match month {
            MonthSelector::All => r.start_time.is_some(),
            MonthSelector::Month(m) => r.month() == Some(m),
        })
        .filter(|r| match day {
            DaySelector::All => true,
            DaySelector::Day(d) => r.weekday() == Some(d),
        })
        .cloned()
        .collect();

    log::debug!(
        "filter ({month:?}, {day:?}): {} of {} records kept",
        records.len(),
        table.len()
    );

    TripTable {
        city: table.city,
        records,
        has_gender: table.has_gender,
        has_birth_year: table.has_birth_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{City, TripRecord};
    use chrono::NaiveDateTime;

    fn trip(id: u64, start: Option<&str>) -> TripRecord {
        TripRecord {
            id,
            start_time: start.map(|s| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
            }),
            end_time: None,
            duration_secs: 300.0,
            start_station: "A".into(),
            end_station: "B".into(),
            user_type: Some("Subscriber".into()),
            gender: None,
            birth_year: None,
        }
    }

    /// 10 rows: ids 0–5 in January on a Monday, 6–7 in June on a Friday,
    /// 8 in February on a Monday, 9 with a null start time.
    fn sample_table() -> TripTable {
        let records = vec![
            trip(0, Some("2017-01-02 08:00:00")),
            trip(1, Some("2017-01-02 09:00:00")),
            trip(2, Some("2017-01-09 10:00:00")),
            trip(3, Some("2017-01-09 11:00:00")),
            trip(4, Some("2017-01-16 12:00:00")),
            trip(5, Some("2017-01-23 13:00:00")),
            trip(6, Some("2017-06-02 14:00:00")),
            trip(7, Some("2017-06-09 15:00:00")),
            trip(8, Some("2017-02-06 16:00:00")),
            trip(9, None),
        ];
        TripTable {
            city: City::Chicago,
            records,
            has_gender: false,
            has_birth_year: false,
        }
    }

    fn ids(table: &TripTable) -> Vec<u64> {
        table.records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn selector_parsing() {
        assert_eq!(MonthSelector::parse("ALL"), Some(MonthSelector::All));
        assert_eq!(MonthSelector::parse("march"), Some(MonthSelector::Month(3)));
        assert_eq!(MonthSelector::parse("monday"), None);
        assert_eq!(DaySelector::parse("all"), Some(DaySelector::All));
        assert_eq!(
            DaySelector::parse("Friday"),
            Some(DaySelector::Day(Weekday::Fri))
        );
        assert_eq!(DaySelector::parse("january"), None);
    }

    #[test]
    fn month_and_day_together() {
        let out = apply(
            &sample_table(),
            MonthSelector::Month(1),
            DaySelector::Day(Weekday::Mon),
        );
        assert_eq!(ids(&out), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn month_only() {
        let out = apply(&sample_table(), MonthSelector::Month(6), DaySelector::All);
        assert_eq!(ids(&out), vec![6, 7]);
    }

    #[test]
    fn day_only() {
        let out = apply(
            &sample_table(),
            MonthSelector::All,
            DaySelector::Day(Weekday::Mon),
        );
        assert_eq!(ids(&out), vec![0, 1, 2, 3, 4, 5, 8]);
    }

    #[test]
    fn all_all_drops_only_null_start_times() {
        let out = apply(&sample_table(), MonthSelector::All, DaySelector::All);
        assert_eq!(ids(&out), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn filtering_is_idempotent_under_all_all() {
        let once = apply(&sample_table(), MonthSelector::All, DaySelector::All);
        let twice = apply(&once, MonthSelector::All, DaySelector::All);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn unmatched_combination_yields_empty_table() {
        let out = apply(
            &sample_table(),
            MonthSelector::Month(2),
            DaySelector::Day(Weekday::Fri),
        );
        assert!(out.is_empty());
        // schema flags survive filtering
        assert_eq!(out.has_gender, false);
    }
}
