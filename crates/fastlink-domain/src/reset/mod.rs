//! Monthly traffic reset calculation
//!
//! The portal resets the traffic quota once a month. The reset day is taken from
//! the account's `Class_Expire` date when it is known, otherwise day 25 is assumed.
//! Dates are built with calendar rollover: asking for the 31st of a 30-day month
//! yields the 1st of the following month.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Reset day-of-month used when no expiry date is available
pub const FALLBACK_RESET_DAY: u32 = 25;

/// Display format for reset dates
pub const RESET_DATE_FORMAT: &str = "%Y-%m-%d";

const EXPIRY_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parse the portal's expiry date string, tolerating the formats it has been seen to use
pub fn parse_expiry_date(expiry_date: &str) -> Option<NaiveDate> {
    let expiry_date = expiry_date.trim();
    if expiry_date.is_empty() {
        return None;
    }

    for format in EXPIRY_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(expiry_date, format) {
            return Some(datetime.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(expiry_date, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(expiry_date)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Reset day-of-month for an expiry date string (empty or unparsable → fallback)
pub fn reset_day(expiry_date: &str) -> u32 {
    parse_expiry_date(expiry_date)
        .map(|date| date.day())
        .unwrap_or(FALLBACK_RESET_DAY)
}

/// Next reset date strictly after `today`
pub fn next_reset_date(expiry_date: &str, today: NaiveDate) -> NaiveDate {
    next_occurrence(reset_day(expiry_date), today)
}

/// Whole days (rounded up) from `now` until the next day-25 reset at midnight
///
/// Always uses the fallback day, even when an expiry date is known.
pub fn days_until_reset(now: NaiveDateTime) -> i64 {
    let next_reset = next_occurrence(FALLBACK_RESET_DAY, now.date()).and_time(NaiveTime::MIN);
    let millis = (next_reset - now).num_milliseconds();

    (millis + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY)
}

pub fn format_reset_date(date: NaiveDate) -> String {
    date.format(RESET_DATE_FORMAT).to_string()
}

fn next_occurrence(day: u32, today: NaiveDate) -> NaiveDate {
    let candidate = rollover_date(today.year(), today.month0(), day);

    if today.day() >= day {
        rollover_date(candidate.year(), candidate.month0() + 1, candidate.day())
    } else {
        candidate
    }
}

/// Build a date, carrying month and day overflow forward
fn rollover_date(year: i32, month0: u32, day: u32) -> NaiveDate {
    let year = year + (month0 / 12) as i32;
    let month = month0 % 12 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day.saturating_sub(1)))))
        .expect("month is in 1..=12 and the year is within chrono's range")
}
