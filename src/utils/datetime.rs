//! Date utility functions
//!
//! This module provides functions for due date parsing and human-readable
//! formatting ("yesterday", "today", "tomorrow", ...).

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Standard date format used for due dates and the config header
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date with offset from today
pub fn date_with_offset(days_offset: i64) -> NaiveDate {
    today() + Duration::days(days_offset)
}

/// Format a due date relative to the current local date
pub fn format_human_date(date: NaiveDate) -> String {
    format_human_date_from(date, today())
}

/// Format a due date relative to `today`
///
/// # Examples
/// * one day before `today` gives "yesterday"
/// * three days after `today` gives "next <weekday>"
/// * twelve days after `today` gives "in 12 days"
pub fn format_human_date_from(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            // "Jan 15", or "Jan 15, 2025" outside the current year
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
