use chrono::{Datelike, NaiveDate};

use crate::errors::TontineError;

/// Parses a date as supplied by the spreadsheet backend: a bare ISO-8601 date
/// (`2026-02-15`) or a full timestamp (`2026-02-15T13:45:00.000Z`). The time
/// portion, when present, is discarded before any monthly bucketing.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate, TontineError> {
    let date_part = raw
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(raw)
        .trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| TontineError::InvalidDate(raw.to_string()))
}

/// Absolute month index (`year * 12 + month0`), the comparison key used for
/// all slot and bucketing arithmetic. Avoids calendar edge cases entirely.
pub fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}

/// Absolute month index for a raw year/month pair.
pub fn month_index_of(year: i32, month: u32) -> i32 {
    year * 12 + month as i32 - 1
}

/// First day of the month identified by an absolute month index.
pub fn first_of_month(index: i32) -> NaiveDate {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).expect("month index in range")
}

/// French month abbreviation as rendered by the portal's savings chart.
pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Fév",
        3 => "Mar",
        4 => "Avr",
        5 => "Mai",
        6 => "Juin",
        7 => "Juil",
        8 => "Août",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Déc",
        _ => "",
    }
}
