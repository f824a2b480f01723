//! Day-of-year helpers for booked nights.

use crate::refund::SECONDS_PER_DAY;

pub const MIN_YEAR: u32 = 1970;
pub const MAX_YEAR: u32 = 9999;

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: u32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub fn is_valid_night(year: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year) && day >= 1 && day <= days_in_year(year)
}

// Leap days in years 1..year (exclusive)
fn leap_days_before(year: u32) -> u64 {
    let y = (year - 1) as u64;
    y / 4 - y / 100 + y / 400
}

/// Unix timestamp of 00:00 UTC on day `day` of `year`.
pub fn night_start(year: u32, day: u32) -> Option<u64> {
    if !is_valid_night(year, day) {
        return None;
    }

    let years = (year - MIN_YEAR) as u64;
    let days_before_year = years * 365 + leap_days_before(year) - leap_days_before(MIN_YEAR);
    let days = days_before_year + (day - 1) as u64;

    Some(days * SECONDS_PER_DAY)
}
