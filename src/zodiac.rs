use std::fmt;

use serde::{Deserialize, Serialize};

use crate::UNKNOWN_ZODIAC;

/// Western zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl Zodiac {
    /// Returns the English name of the sign
    pub const fn name(self) -> &'static str {
        match self {
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
        }
    }

    /// Finds the first range in `ZODIAC_RANGES` containing the given day and month.
    ///
    /// The pair is not checked against the calendar: `(30, 2)` resolves as Pisces.
    pub fn from_day_month(day: u32, month: u32) -> Option<Self> {
        ZODIAC_RANGES
            .iter()
            .find(|range| range.contains(day, month))
            .map(ZodiacRange::sign)
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A calendar day without a year, used as a zodiac range boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day:   u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// A zodiac sign with its inclusive start and end boundaries.
/// The end may fall in an earlier month than the start (Capricorn wraps the year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZodiacRange {
    sign:  Zodiac,
    start: MonthDay,
    end:   MonthDay,
}

impl ZodiacRange {
    pub const fn new(sign: Zodiac, start: MonthDay, end: MonthDay) -> Self {
        Self { sign, start, end }
    }

    /// Returns the sign covered by this range
    pub const fn sign(&self) -> Zodiac {
        self.sign
    }

    /// Returns the first day of the range (inclusive)
    pub const fn start(&self) -> MonthDay {
        self.start
    }

    /// Returns the last day of the range (inclusive)
    pub const fn end(&self) -> MonthDay {
        self.end
    }

    /// Checks if the range contains the given day and month.
    ///
    /// Matches the start month from the start day on, the end month up to the end day,
    /// or any month strictly between the two. The strict-between clause never fires for
    /// a wrapping range, whose two boundary clauses already cover both sides of the year end.
    pub const fn contains(&self, day: u32, month: u32) -> bool {
        (month == self.start.month && day >= self.start.day)
            || (month == self.end.month && day <= self.end.day)
            || (month > self.start.month && month < self.end.month)
    }
}

/// Zodiac ranges in lookup order. Lookup stops at the first match.
pub const ZODIAC_RANGES: [ZodiacRange; 12] = [
    ZodiacRange::new(Zodiac::Capricorn, MonthDay::new(12, 22), MonthDay::new(1, 19)),
    ZodiacRange::new(Zodiac::Aquarius, MonthDay::new(1, 20), MonthDay::new(2, 18)),
    ZodiacRange::new(Zodiac::Pisces, MonthDay::new(2, 19), MonthDay::new(3, 20)),
    ZodiacRange::new(Zodiac::Aries, MonthDay::new(3, 21), MonthDay::new(4, 19)),
    ZodiacRange::new(Zodiac::Taurus, MonthDay::new(4, 20), MonthDay::new(5, 20)),
    ZodiacRange::new(Zodiac::Gemini, MonthDay::new(5, 21), MonthDay::new(6, 20)),
    ZodiacRange::new(Zodiac::Cancer, MonthDay::new(6, 21), MonthDay::new(7, 22)),
    ZodiacRange::new(Zodiac::Leo, MonthDay::new(7, 23), MonthDay::new(8, 22)),
    ZodiacRange::new(Zodiac::Virgo, MonthDay::new(8, 23), MonthDay::new(9, 22)),
    ZodiacRange::new(Zodiac::Libra, MonthDay::new(9, 23), MonthDay::new(10, 22)),
    ZodiacRange::new(Zodiac::Scorpio, MonthDay::new(10, 23), MonthDay::new(11, 21)),
    ZodiacRange::new(Zodiac::Sagittarius, MonthDay::new(11, 22), MonthDay::new(12, 21)),
];

/// Returns the zodiac sign name for a day and month, or `"Unknown"` when no range
/// matches (only possible for a month outside `1..=12`).
pub fn zodiac_sign(day: u32, month: u32) -> &'static str {
    Zodiac::from_day_month(day, month).map_or_else(
        || {
            log::warn!("no zodiac range matches day {day} month {month}");
            UNKNOWN_ZODIAC
        },
        Zodiac::name,
    )
}
