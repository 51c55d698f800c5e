//! Raw record browser: on request, page through the filtered table five
//! records at a time, re-asking between batches.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::data::model::{TripRecord, TripTable};
use crate::prompt::{ask_yes_no, Answer};

const BATCH_SIZE: usize = 5;
const VIEW_QUESTION: &str = "Would you like to view individual trip data? Enter yes or no.";
const SORRY: &str = "Sorry. I don't understand.";

/// Offer the raw-record view for `table`.
///
/// Returns `Answer::Quit` when the user opts out of an invalid-input
/// confirmation (the caller terminates the program); `Answer::Value(())`
/// when browsing finished normally, whether by "no" or by running out of
/// records.
pub fn browse<R, W>(table: &TripTable, input: &mut R, out: &mut W) -> Result<Answer<()>>
where
    R: BufRead,
    W: Write,
{
    match ask_yes_no(input, out, VIEW_QUESTION, SORRY)? {
        Answer::Quit => return Ok(Answer::Quit),
        Answer::Value(false) => return Ok(Answer::Value(())),
        Answer::Value(true) => {}
    }

    let records = &table.records;
    let mut offset = 0;
    loop {
        if offset >= records.len() {
            writeln!(out, "\nNo more data to show ...")?;
            return Ok(Answer::Value(()));
        }

        let end = (offset + BATCH_SIZE).min(records.len());
        for record in &records[offset..end] {
            print_record(out, record, table)?;
        }
        offset = end;

        if offset >= records.len() {
            writeln!(out, "\nNo more data to show ...")?;
            return Ok(Answer::Value(()));
        }

        match ask_yes_no(input, out, VIEW_QUESTION, SORRY)? {
            Answer::Quit => return Ok(Answer::Quit),
            Answer::Value(false) => return Ok(Answer::Value(())),
            Answer::Value(true) => {}
        }
    }
}

fn print_record<W: Write>(out: &mut W, record: &TripRecord, table: &TripTable) -> Result<()> {
    let birth_year = match (table.has_birth_year, record.birth_year) {
        (true, Some(year)) => year.to_string(),
        _ => "unknown".to_string(),
    };
    let gender = match (table.has_gender, &record.gender) {
        (true, Some(gender)) => gender.clone(),
        _ => "unknown".to_string(),
    };
    let fmt_time = |t: Option<chrono::NaiveDateTime>| match t {
        Some(t) => t.to_string(),
        None => "unknown".to_string(),
    };

    writeln!(
        out,
        "\n{{Id: {}\n Birth Year: {}\n Gender: {}\n Start Time: {}\n End Time: {}\n Trip Duration: {}\n Start Station: {}\n End Station: {}}}",
        record.id,
        birth_year,
        gender,
        fmt_time(record.start_time),
        fmt_time(record.end_time),
        record.duration_secs,
        record.start_station,
        record.end_station,
    )?;
    Ok(())
}
