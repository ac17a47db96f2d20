use crate::consts::{DAY_NAMES, DAYS_IN_WEEK, MAX_MONTH, MONTH_NAMES};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Error returned when a day-of-week or month key has no Indonesian name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Day-of-week key outside `1..=7`.
    #[error("Unknown day of week key: {0} (must be 1-{max}, 1 = Sunday)", max = DAYS_IN_WEEK)]
    UnknownDayOfWeek(u32),

    /// Month key outside `1..=12`.
    #[error("Unknown month key: {0} (must be 1-{max})", max = MAX_MONTH)]
    UnknownMonth(u32),
}

/// A day of the week guaranteed to be in the range `1..=DAYS_IN_WEEK`,
/// counted from Sunday (1 = Sunday, 7 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(NonZeroU8);

impl DayOfWeek {
    /// Creates a new `DayOfWeek`, validating that it's within `1..=DAYS_IN_WEEK`
    ///
    /// # Errors
    /// Returns `LookupError::UnknownDayOfWeek` if the key is 0 or > `DAYS_IN_WEEK`.
    pub fn new(key: u32) -> Result<Self, LookupError> {
        u8::try_from(key)
            .ok()
            .filter(|value| *value <= DAYS_IN_WEEK)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(LookupError::UnknownDayOfWeek(key))
    }

    /// Returns the key as u8 (1 = Sunday)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the Indonesian name, e.g. `Senin` for Monday
    pub const fn name(self) -> &'static str {
        DAY_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = LookupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl TryFrom<u32> for DayOfWeek {
    type Error = LookupError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0.get()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        // number_from_sunday is always 1..=7
        Self::new(weekday.number_from_sunday()).unwrap_or(Self(NonZeroU8::MIN))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1 = January)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `LookupError::UnknownMonth` if the key is 0 or > `MAX_MONTH`.
    pub fn new(key: u32) -> Result<Self, LookupError> {
        u8::try_from(key)
            .ok()
            .filter(|value| *value <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(LookupError::UnknownMonth(key))
    }

    /// Wraps a month number coming from chrono, which is always 1..=12
    pub(crate) fn from_chrono(month: u32) -> Self {
        Self::new(month).unwrap_or(Self(NonZeroU8::MIN))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the Indonesian name, e.g. `Agustus`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = LookupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl TryFrom<u32> for Month {
    type Error = LookupError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the Indonesian name for a 1-indexed day-of-week key (1 = Sunday).
///
/// # Errors
/// Returns `LookupError::UnknownDayOfWeek` for keys outside `1..=7`.
pub fn day_name(key: u32) -> Result<&'static str, LookupError> {
    DayOfWeek::new(key).map(DayOfWeek::name)
}

/// Returns the Indonesian name for a 1-indexed month key (1 = January).
///
/// # Errors
/// Returns `LookupError::UnknownMonth` for keys outside `1..=12`.
pub fn month_name(key: u32) -> Result<&'static str, LookupError> {
    Month::new(key).map(Month::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_name_all_keys() {
        let expected = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jum'at", "Sabtu"];
        for (key, name) in (1..=7).zip(expected) {
            assert_eq!(day_name(key), Ok(name), "key {key}");
        }
    }

    #[test]
    fn test_day_name_invalid_keys() {
        for key in [0, 8, 256, u32::MAX] {
            assert_eq!(day_name(key), Err(LookupError::UnknownDayOfWeek(key)));
        }
    }

    #[test]
    fn test_month_name_all_keys() {
        let expected = [
            "Januari",
            "Februari",
            "Maret",
            "April",
            "Mei",
            "Juni",
            "Juli",
            "Agustus",
            "September",
            "Oktober",
            "November",
            "Desember",
        ];
        for (key, name) in (1..=12).zip(expected) {
            assert_eq!(month_name(key), Ok(name), "key {key}");
        }
    }

    #[test]
    fn test_month_name_invalid_keys() {
        for key in [0, 13, 268, u32::MAX] {
            assert_eq!(month_name(key), Err(LookupError::UnknownMonth(key)));
        }
    }

    #[test]
    fn test_lookup_error_names_key() {
        let err = day_name(9).expect_err("expected error for day key 9");
        assert!(err.to_string().contains('9'));

        let err = month_name(42).expect_err("expected error for month key 42");
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_day_of_week_from_weekday() {
        assert_eq!(DayOfWeek::from(Weekday::Sun).get(), 1);
        assert_eq!(DayOfWeek::from(Weekday::Mon).get(), 2);
        assert_eq!(DayOfWeek::from(Weekday::Fri).name(), "Jum'at");
        assert_eq!(DayOfWeek::from(Weekday::Sat).get(), 7);
    }

    #[test]
    fn test_display_uses_indonesian_name() {
        let day = DayOfWeek::new(4).expect("failed to construct day of week");
        assert_eq!(day.to_string(), "Rabu");

        let month = Month::new(8).expect("failed to construct month");
        assert_eq!(month.to_string(), "Agustus");
    }

    #[test]
    fn test_try_from_u8() {
        let month: Result<Month, _> = 12u8.try_into();
        assert!(month.is_ok());

        let month: Result<Month, _> = 0u8.try_into();
        assert_eq!(month, Err(LookupError::UnknownMonth(0)));
    }

    #[test]
    fn test_month_ordering() {
        let jan = Month::new(1).expect("failed to construct January");
        let dec = Month::new(12).expect("failed to construct December");
        assert!(jan < dec);
    }

    #[test]
    fn test_serde_as_integer() {
        let month = Month::new(9).expect("failed to construct month for serde test");
        let json = serde_json::to_string(&month).expect("failed to serialize month");
        assert_eq!(json, "9");

        let parsed: Month = serde_json::from_str(&json).expect("failed to deserialize month");
        assert_eq!(parsed, month);

        let invalid: Result<DayOfWeek, _> = serde_json::from_str("8");
        assert!(invalid.is_err());
    }
}
