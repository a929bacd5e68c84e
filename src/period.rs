//! `YYYYMM` period keys.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    calendar::{FALLBACK_HOURS, Month},
    prelude::*,
    quantity::time::Hours,
};

/// A validated year/month pair.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl Period {
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Strict `YYYYMM` parser: the first 4 characters are the year, the next
    /// 2 are the zero-padded month. Longer keys are accepted and truncated,
    /// so structured identifiers carrying a `YYYYMM` prefix parse too.
    pub fn from_key(key: &str) -> Result<Self> {
        let year = key.get(0..4).with_context(|| format!("period key `{key}` has no year part"))?;
        let year = i32::from_str(year).with_context(|| format!("`{year}` is not a valid year"))?;
        let month =
            key.get(4..6).with_context(|| format!("period key `{key}` has no month part"))?;
        let month = Month::from_key(month)
            .with_context(|| format!("`{month}` is not a valid month key"))?;
        Ok(Self { year, month })
    }

    /// Period containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // The month number is guaranteed to be in `1..=12`.
        let month = Month::from_number(date.month()).unwrap_or(Month::January);
        Self { year: date.year(), month }
    }

    /// First day of the month, for date-based collaborators.
    ///
    /// `None` only for years outside the supported `chrono` range.
    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), 1)
    }

    /// Calendar hours of this month.
    #[must_use]
    pub fn hours(self) -> Hours {
        self.month.hours(self.year)
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month.number())
    }
}

impl Debug for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        Self::from_key(key)
    }
}

/// Total wrapper around a raw period key.
///
/// Parsing never fails: a malformed key is kept verbatim as [`Self::Unknown`]
/// and contributes the fallback 720-hour slot to the hour math, so one noisy
/// record never interrupts a batch.
#[derive(Clone, Eq, Hash, PartialEq)]
pub enum PeriodKey {
    Valid(Period),
    Unknown(String),
}

impl PeriodKey {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Period::from_key(raw) {
            Ok(period) => Self::Valid(period),
            Err(error) => {
                warn!(raw, %error, "malformed period key, degrading to the fallback slot");
                Self::Unknown(raw.to_owned())
            }
        }
    }

    #[must_use]
    pub const fn period(&self) -> Option<Period> {
        match self {
            Self::Valid(period) => Some(*period),
            Self::Unknown(_) => None,
        }
    }

    /// Calendar hours for valid keys, [`FALLBACK_HOURS`] otherwise.
    #[must_use]
    pub fn hours(&self) -> Hours {
        self.period().map_or(FALLBACK_HOURS, Period::hours)
    }
}

impl Default for PeriodKey {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Display for PeriodKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(period) => Display::fmt(period, f),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl Debug for PeriodKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(period) => Debug::fmt(period, f),
            Self::Unknown(raw) => write!(f, "?{raw:?}"),
        }
    }
}

impl Serialize for PeriodKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    /// Total: accepts a string or an integer key, `null`, and any malformed
    /// text, which all funnel through [`PeriodKey::parse`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        let raw = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(number)) => number.to_string(),
            Some(Raw::Text(text)) => text,
            None => String::new(),
        };
        Ok(Self::parse(&raw))
    }
}
