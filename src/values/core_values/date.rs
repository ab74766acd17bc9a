use crate::values::value_container::ValueError;
use chrono::{DateTime, Month, NaiveDate, Weekday};
use core::fmt::Display;

/// Largest distance from the epoch a date may have, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A point in time stored as milliseconds since the Unix epoch.
/// Invalid dates hold NaN.
#[derive(Debug, Clone, Copy)]
pub struct Date(f64);

impl Date {
    /// Creates a date from epoch milliseconds. Non-finite or out of range
    /// values produce an invalid date, fractions are truncated.
    pub fn from_epoch_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
            return Date::invalid();
        }
        // adding 0.0 turns -0 into +0
        Date(millis.trunc() + 0.0)
    }

    pub fn invalid() -> Self {
        Date(f64::NAN)
    }

    /// Parses an RFC 3339 timestamp or a date-only `YYYY-MM-DD` string,
    /// which is taken as midnight UTC.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
            return Ok(Date::from_epoch_millis(
                date_time.timestamp_millis() as f64,
            ));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|date_time| {
                Date::from_epoch_millis(
                    date_time.and_utc().timestamp_millis() as f64,
                )
            })
            .ok_or_else(|| ValueError::InvalidDate(text.to_string()))
    }

    pub fn epoch_millis(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_nan()
    }

    /// Splits the epoch value into UTC calendar fields. Covers the whole
    /// valid range of `±8.64e15` ms, which reaches further than
    /// `chrono::DateTime`.
    fn civil_fields(&self) -> Option<CivilFields> {
        if !self.is_valid() {
            return None;
        }
        let millis = self.0 as i64;
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let millis_of_day = millis.rem_euclid(MILLIS_PER_DAY);

        // days since 0000-03-01, split into 400 year eras
        let shifted = days + 719_468;
        let era = shifted.div_euclid(146_097);
        let day_of_era = shifted.rem_euclid(146_097);
        let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36_524
            - day_of_era / 146_096)
            / 365;
        let day_of_year =
            day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = year_of_era + era * 400 + i64::from(month <= 2);

        // 1970-01-01 was a Thursday, Monday is 0
        let weekday = Weekday::try_from((days + 3).rem_euclid(7) as u8).ok()?;
        let month = Month::try_from(month as u8).ok()?;

        Some(CivilFields {
            year,
            month,
            day,
            weekday,
            hours: millis_of_day / 3_600_000,
            minutes: millis_of_day / 60_000 % 60,
            seconds: millis_of_day / 1000 % 60,
        })
    }

    /// Renders the date in UTC, e.g.
    /// `Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)`.
    /// Years before 0 carry a `-` sign, years are padded to four digits.
    pub fn to_text(&self) -> String {
        let Some(fields) = self.civil_fields() else {
            return "Invalid Date".to_string();
        };
        let sign = if fields.year < 0 { "-" } else { "" };
        format!(
            "{} {} {:02} {sign}{:04} {:02}:{:02}:{:02} GMT+0000 (Coordinated Universal Time)",
            fields.weekday,
            &fields.month.name()[..3],
            fields.day,
            fields.year.abs(),
            fields.hours,
            fields.minutes,
            fields.seconds,
        )
    }
}

struct CivilFields {
    year: i64,
    month: Month,
    day: i64,
    weekday: Weekday,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "{}", self.to_text())
    }
}
