//! Indonesian long-form date output, e.g. `Senin, 23 September 2024 18.00`.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{IndonesianDate, ParseError, TIME_SEPARATOR};

/// Controls which parts of the date are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Prefix the output with the day name (`Senin, `)
    pub show_day_of_week: bool,
    /// Append the time as `{hour}.{minute:02}`
    pub show_time:        bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_day_of_week: true,
            show_time:        false,
        }
    }
}

impl FormatOptions {
    pub const fn new(show_day_of_week: bool, show_time: bool) -> Self {
        Self {
            show_day_of_week,
            show_time,
        }
    }

    /// `23 September 2024`
    pub const fn date_only() -> Self {
        Self::new(false, false)
    }

    /// `Senin, 23 September 2024 18.00`
    pub const fn full() -> Self {
        Self::new(true, true)
    }

    #[must_use]
    pub const fn with_day_of_week(mut self, show: bool) -> Self {
        self.show_day_of_week = show;
        self
    }

    #[must_use]
    pub const fn with_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }
}

/// Formats a date in Indonesian long form.
///
/// Day and hour are not padded, minute is always two digits.
pub fn format_date(date: &IndonesianDate, options: FormatOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    if options.show_day_of_week {
        let _ = write!(out, "{}, ", date.day_of_week());
    }
    let _ = write!(out, "{} {} {}", date.day(), date.month(), date.year());
    if options.show_time {
        let _ = write!(out, " {}{TIME_SEPARATOR}{:02}", date.hour(), date.minute());
    }

    out
}

/// Parses `raw` and formats it in Indonesian long form.
///
/// # Errors
/// Returns the `ParseError` from parsing `raw` unchanged.
pub fn format_indonesian_date(raw: &str, show_day_of_week: bool, show_time: bool) -> Result<String, ParseError> {
    let date = raw.parse::<IndonesianDate>()?;
    Ok(format_date(&date, FormatOptions::new(show_day_of_week, show_time)))
}

impl IndonesianDate {
    /// Formats this date in Indonesian long form, see [`format_date`].
    pub fn to_indonesian(&self, options: FormatOptions) -> String {
        format_date(self, options)
    }
}
