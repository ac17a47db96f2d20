/// Number of days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Indonesian day-of-week names (index 0 is Sunday, keys are 1-indexed)
pub const DAY_NAMES: [&str; DAYS_IN_WEEK as usize] = [
    "Minggu", // Sunday
    "Senin",  // Monday
    "Selasa", // Tuesday
    "Rabu",   // Wednesday
    "Kamis",  // Thursday
    "Jum'at", // Friday
    "Sabtu",  // Saturday
];

/// Indonesian month names (index 0 is January, keys are 1-indexed)
pub const MONTH_NAMES: [&str; MAX_MONTH as usize] = [
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

/// Separator between hour and minute in Indonesian output (`18.05`)
pub const TIME_SEPARATOR: char = '.';

/// Returned by zodiac resolution when no range matches
pub const UNKNOWN_ZODIAC: &str = "Unknown";

/// Canonical machine form used for `Display` and serde
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only input format (ISO 8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time input formats tried in order after RFC 3339.
/// `%.f` also accepts a missing fraction.
pub(crate) const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
