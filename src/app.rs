//! Interactive controller: the session loop that ties prompts, loading,
//! filtering, the four reports, and the raw-record browser together.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::browser;
use crate::data::filter::{self, DaySelector, MonthSelector};
use crate::data::loader;
use crate::data::model::{City, TripTable};
use crate::prompt::{ask, read_reply, Answer};
use crate::stats::durations::DurationStats;
use crate::stats::stations::StationStats;
use crate::stats::travel_times::TravelTimeStats;
use crate::stats::users::UserStats;

const SEPARATOR: &str = "----------------------------------------";

const CITY_QUESTION: &str =
    "Do you want to analyze data from Chicago, New York City, or Washington?";
const MONTH_QUESTION: &str =
    "Which month - January, February, March, April, May, June, or all?";
const DAY_QUESTION: &str =
    "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or all?";

/// Which dimensions the user wants to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "both" => Some(FilterMode::Both),
            "none" => Some(FilterMode::None),
            _ => None,
        }
    }
}

/// Run the tool against stdin/stdout, reading data files from the working
/// directory.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    run_loop(&mut stdin.lock(), &mut io::stdout(), Path::new("."))
}

/// The session loop. Returns `Ok(())` both for a normal restart-declined
/// exit and for a user quit mid-prompt; only I/O and data errors are `Err`.
pub fn run_loop<R, W>(input: &mut R, out: &mut W, data_dir: &Path) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "\nHello! Let's explore some US bikeshare data!")?;

        let city = match prompt_city(input, out)? {
            Answer::Value(city) => city,
            Answer::Quit => return Ok(()),
        };
        let (month, day) = match prompt_filters(input, out, city)? {
            Answer::Value(selectors) => selectors,
            Answer::Quit => return Ok(()),
        };
        writeln!(out, "{SEPARATOR}")?;

        let table = loader::load_city(data_dir, city)?;
        let table = filter::apply(&table, month, day);

        report(out, &table)?;

        if browser::browse(&table, input, out)? == Answer::Quit {
            return Ok(());
        }

        writeln!(out, "\nWould you like to restart? Enter yes or no.")?;
        out.flush()?;
        match read_reply(input)?.as_deref() {
            Some("yes") | Some("y") => continue,
            _ => return Ok(()),
        }
    }
}

fn prompt_city<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Answer<City>> {
    ask(
        input,
        out,
        CITY_QUESTION,
        "Sorry. I can't find your city.",
        |reply| reply.parse::<City>().ok(),
    )
}

/// Ask for the filter mode, then for the month and/or day it calls for.
/// Dimensions not covered by the mode stay unconstrained.
fn prompt_filters<R, W>(
    input: &mut R,
    out: &mut W,
    city: City,
) -> io::Result<Answer<(MonthSelector, DaySelector)>>
where
    R: BufRead,
    W: Write,
{
    let mode_question = format!(
        "Would you like to filter {city}'s data by month, day, both, or not at all? \
         Type \"none\" for no time filter."
    );
    let mode = match ask(
        input,
        out,
        &mode_question,
        "Sorry. I don't understand.",
        FilterMode::parse,
    )? {
        Answer::Value(mode) => mode,
        Answer::Quit => return Ok(Answer::Quit),
    };

    let month = if matches!(mode, FilterMode::Month | FilterMode::Both) {
        match ask(
            input,
            out,
            MONTH_QUESTION,
            "Sorry. I can't find the month you want.",
            MonthSelector::parse,
        )? {
            Answer::Value(month) => month,
            Answer::Quit => return Ok(Answer::Quit),
        }
    } else {
        MonthSelector::All
    };

    let day = if matches!(mode, FilterMode::Day | FilterMode::Both) {
        match ask(
            input,
            out,
            DAY_QUESTION,
            "Sorry. I can't find the day you want.",
            DaySelector::parse,
        )? {
            Answer::Value(day) => day,
            Answer::Quit => return Ok(Answer::Quit),
        }
    } else {
        DaySelector::All
    };

    Ok(Answer::Value((month, day)))
}

/// Render the four report sections, each with an elapsed-time footer.
fn report<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    section(out, "Calculating The Most Frequent Times of Travel...", || {
        TravelTimeStats::compute(table)
    })?;
    section(out, "Calculating The Most Popular Stations and Trip...", || {
        StationStats::compute(table)
    })?;
    section(out, "Calculating Trip Duration Stats...", || {
        DurationStats::compute(table)
    })?;
    section(out, "Calculating User Stats...", || {
        UserStats::compute(table)
    })?;
    Ok(())
}

fn section<W, D, F>(out: &mut W, heading: &str, compute: F) -> Result<()>
where
    W: Write,
    D: fmt::Display,
    F: FnOnce() -> D,
{
    writeln!(out, "\n{heading}\n")?;
    let started = Instant::now();
    let stats = compute();
    writeln!(out, "{stats}")?;
    writeln!(out, "\nThis took {:.6} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn write_chicago(dir: &TempDir) {
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:00:00,2017-01-02 08:10:00,600.0,Clark St,Lake Ave,Subscriber,Male,1990.0
1,2017-01-02 09:00:00,2017-01-02 09:05:00,300.0,Clark St,Lake Ave,Subscriber,Female,1990.0
2,2017-01-09 10:00:00,2017-01-09 10:20:00,1200.0,State St,Clark St,Customer,,1985.0
3,2017-06-02 11:00:00,2017-06-02 11:30:00,1800.0,Clark St,Lake Ave,Subscriber,Male,2000.0
";
        fs::write(dir.path().join("chicago.csv"), csv).unwrap();
    }

    fn run_session(dir: &TempDir, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_loop(&mut input, &mut out, dir.path()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_session_with_both_filters() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        let out = run_session(&dir, "chicago\nboth\njanuary\nmonday\nno\nno\n");
        assert!(out.contains("Hello! Let's explore some US bikeshare data!"));
        assert!(out.contains("Most common month: January"));
        assert!(out.contains("Most common day of week: Monday"));
        assert!(out.contains("Most common start station: Clark St"));
        assert!(out.contains("Subscriber Counts: 2"));
        assert!(out.contains("The earliest birth year: 1985"));
        assert!(out.contains("The most common birth year: 1990"));
        // only one session ran
        assert_eq!(
            out.matches("Hello! Let's explore some US bikeshare data!").count(),
            1
        );
    }

    #[test]
    fn no_filter_mode_reports_over_everything() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        let out = run_session(&dir, "chicago\nnone\nno\nno\n");
        assert!(out.contains("Most common month: January"));
        assert!(out.contains("Subscriber Counts: 3"));
        assert!(out.contains("Customer Counts: 1"));
    }

    #[test]
    fn restart_runs_a_second_session() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        let out = run_session(&dir, "chicago\nnone\nno\nyes\nchicago\nnone\nno\nno\n");
        assert_eq!(
            out.matches("Hello! Let's explore some US bikeshare data!").count(),
            2
        );
    }

    #[test]
    fn quitting_at_the_city_prompt_exits_cleanly() {
        let dir = TempDir::new().unwrap();
        let out = run_session(&dir, "atlantis\nn\n");
        assert!(out.contains("Sorry. I can't find your city."));
        assert!(!out.contains("Calculating"));
    }

    #[test]
    fn empty_filter_result_still_reports() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        // No June Mondays in the fixture (2017-06-02 was a Friday)
        let out = run_session(&dir, "chicago\nboth\njune\nmonday\nno\nno\n");
        assert!(out.contains("No trips match the current filter."));
    }

    #[test]
    fn missing_data_file_is_a_fatal_error() {
        let dir = TempDir::new().unwrap();
        let mut input = Cursor::new(b"chicago\nnone\n".to_vec());
        let mut out = Vec::new();
        assert!(run_loop(&mut input, &mut out, dir.path()).is_err());
    }

    #[test]
    fn filter_mode_parsing() {
        assert_eq!(FilterMode::parse("month"), Some(FilterMode::Month));
        assert_eq!(FilterMode::parse("none"), Some(FilterMode::None));
        assert_eq!(FilterMode::parse("weekly"), None);
    }
}
