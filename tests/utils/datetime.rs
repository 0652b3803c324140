use chrono::{Duration, NaiveDate};
use todoflow::utils::datetime::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(date(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date(" 2025-01-15 ").unwrap(), date(2025, 1, 15));
    assert!(parse_date("15/01/2025").is_err());
    assert!(parse_date("2025-02-30").is_err());
}

#[test]
fn test_format_human_date_near_days() {
    let today = date(2025, 1, 15); // Wednesday
    assert_eq!(format_human_date_from(today, today), "today");
    assert_eq!(format_human_date_from(date(2025, 1, 16), today), "tomorrow");
    assert_eq!(format_human_date_from(date(2025, 1, 14), today), "yesterday");
    assert_eq!(format_human_date_from(date(2025, 1, 18), today), "next Saturday");
    assert_eq!(format_human_date_from(date(2025, 1, 12), today), "last Sunday");
}

#[test]
fn test_format_human_date_far_days() {
    let today = date(2025, 1, 15);
    assert_eq!(format_human_date_from(date(2025, 1, 27), today), "in 12 days");
    assert_eq!(format_human_date_from(date(2025, 1, 5), today), "10 days ago");
    assert_eq!(format_human_date_from(date(2025, 3, 1), today), "Mar 01");
    assert_eq!(format_human_date_from(date(2026, 3, 1), today), "Mar 01, 2026");
}

#[test]
fn test_date_with_offset() {
    assert_eq!(date_with_offset(0), today());
    assert_eq!(date_with_offset(3), today() + Duration::days(3));
    assert_eq!(format_human_date(today()), "today");
}
