mod attributes;
mod consts;
mod format;
mod prelude;
mod types;
mod zodiac;

pub use attributes::{AttributeError, DateAttributes};
pub use consts::*;
pub use format::{FormatOptions, format_date, format_indonesian_date};
pub use types::{DayOfWeek, LookupError, Month, day_name, month_name};
pub use zodiac::{MonthDay, ZODIAC_RANGES, Zodiac, ZodiacRange, zodiac_sign};

use crate::prelude::*;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use std::str::FromStr;

/// A decomposed local date and time, the value every Indonesian formatting
/// and derivation operates on.
///
/// Components are wall-clock values; no time zone conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", "_0.format(STORAGE_FORMAT)")]
pub struct IndonesianDate(NaiveDateTime);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl IndonesianDate {
    /// Creates a date from calendar components, rejecting impossible dates and times.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` or `ParseError::InvalidTime`.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, ParseError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ParseError::InvalidTime { hour, minute })?;
        Ok(Self(date.and_time(time)))
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1 = January)
    pub fn month(&self) -> Month {
        Month::from_chrono(self.0.month())
    }

    /// Returns the day of the month, starting at 1
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week (1 = Sunday)
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from(self.0.weekday())
    }

    /// Returns the hour (0-23)
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59)
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying chrono value
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the zodiac sign name for this date's day and month
    pub fn zodiac(&self) -> &'static str {
        zodiac_sign(self.day(), self.0.month())
    }

    /// Whole years elapsed between this date and `today`.
    ///
    /// The current year only counts once its month and day have been reached.
    /// A date after `today` has age 0.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.0.date()).unwrap_or(0)
    }

    /// Whole years elapsed between this date and the current local date
    pub fn age(&self) -> u32 {
        self.age_on(Local::now().date_naive())
    }
}

impl From<NaiveDate> for IndonesianDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for IndonesianDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.naive_local())
    }
}

impl FromStr for IndonesianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // RFC 3339 keeps the wall clock of the given offset
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            log::trace!("parsed {trimmed:?} as RFC 3339");
            return Ok(dt.into());
        }

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                log::trace!("parsed {trimmed:?} with {format:?}");
                return Ok(Self(dt));
            }
        }

        match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            Ok(date) => Ok(date.into()),
            Err(err) => {
                log::debug!("rejected date input {trimmed:?}: {err}");
                Err(ParseError::InvalidFormat(trimmed.to_owned()))
            },
        }
    }
}

impl serde::Serialize for IndonesianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IndonesianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns `None` for an absent or blank value, otherwise the parsed date.
fn parse_present(raw: Option<&str>) -> Result<Option<IndonesianDate>, ParseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Age in whole years of a raw birth date.
///
/// An absent or blank value passes through as `Ok(None)`.
///
/// # Errors
/// Returns `ParseError` if a present value cannot be parsed.
pub fn age(raw: Option<&str>) -> Result<Option<u32>, ParseError> {
    Ok(parse_present(raw)?.map(|date| date.age()))
}

/// Zodiac sign name of a raw date.
///
/// An absent or blank value passes through as `Ok(None)`.
///
/// # Errors
/// Returns `ParseError` if a present value cannot be parsed.
pub fn zodiac(raw: Option<&str>) -> Result<Option<&'static str>, ParseError> {
    Ok(parse_present(raw)?.map(|date| date.zodiac()))
}
