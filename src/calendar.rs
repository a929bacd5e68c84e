//! Gregorian month lengths and hour counts.

use crate::quantity::{Quantity, time::Hours};

/// Applied when a month key is unrecognized: 30 days × 24 hours.
///
/// Keeps the hour math total at the cost of silent inaccuracy for malformed
/// period keys, which are reported separately on the diagnostic channel.
pub const FALLBACK_HOURS: Hours = Quantity(720.0);

/// Divisible by 4 and (not by 100, or by 400).
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Month of the year, numbered 1 (January) through 12 (December).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Construct from the 1-based month number.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    /// Construct from the exact zero-padded key `"01"`..`"12"`.
    ///
    /// Unpadded keys (`"1"`) do not match, mirroring the period-key layout
    /// where the month is always two characters.
    #[must_use]
    pub const fn from_key(key: &str) -> Option<Self> {
        match key.as_bytes() {
            b"01" => Some(Self::January),
            b"02" => Some(Self::February),
            b"03" => Some(Self::March),
            b"04" => Some(Self::April),
            b"05" => Some(Self::May),
            b"06" => Some(Self::June),
            b"07" => Some(Self::July),
            b"08" => Some(Self::August),
            b"09" => Some(Self::September),
            b"10" => Some(Self::October),
            b"11" => Some(Self::November),
            b"12" => Some(Self::December),
            _ => None,
        }
    }

    /// 1-based month number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// English month name, for chart labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Number of days in this month of the given year.
    #[must_use]
    pub const fn days(self, year: i32) -> u32 {
        match self {
            Self::January
            | Self::March
            | Self::May
            | Self::July
            | Self::August
            | Self::October
            | Self::December => 31,
            Self::April | Self::June | Self::September | Self::November => 30,
            Self::February => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// Number of hours in this month of the given year.
    #[must_use]
    pub fn hours(self, year: i32) -> Hours {
        Hours::from_days(self.days(year))
    }
}

/// Hours in the given month, leap-year aware.
///
/// Total: an unrecognized month key falls back to [`FALLBACK_HOURS`].
#[must_use]
pub fn hours_in_month(year: i32, month: &str) -> Hours {
    Month::from_key(month).map_or(FALLBACK_HOURS, |month| month.hours(year))
}

/// Sum of the twelve monthly hour counts of the given year.
#[must_use]
pub fn total_hours_in_year(year: i32) -> Hours {
    Month::ALL.into_iter().map(|month| month.hours(year)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_february_leap_years() {
        assert_eq!(hours_in_month(2024, "02"), Hours::from(696.0));
        assert_eq!(hours_in_month(2023, "02"), Hours::from(672.0));
        // Divisible by 400: leap.
        assert_eq!(hours_in_month(2000, "02"), Hours::from(696.0));
        // Divisible by 100 but not 400: not leap.
        assert_eq!(hours_in_month(1900, "02"), Hours::from(672.0));
    }

    #[test]
    fn test_fixed_months() {
        for year in [1900, 2000, 2023, 2024] {
            assert_eq!(hours_in_month(year, "01"), Hours::from(744.0));
            assert_eq!(hours_in_month(year, "04"), Hours::from(720.0));
            assert_eq!(hours_in_month(year, "12"), Hours::from(744.0));
        }
    }

    #[test]
    fn test_unrecognized_month_falls_back() {
        assert_eq!(FALLBACK_HOURS, Hours::from(720.0));
        for month in ["", "1", "13", "00", "xx", "021"] {
            assert_eq!(hours_in_month(2024, month), FALLBACK_HOURS);
        }
    }

    #[test]
    fn test_total_hours_in_year() {
        assert_eq!(total_hours_in_year(2024), Hours::from(8784.0));
        assert_eq!(total_hours_in_year(2023), Hours::from(8760.0));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::February.name(), "February");
        assert_eq!(Month::December.name(), "December");
    }

    #[test]
    fn test_month_from_number() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }
}
