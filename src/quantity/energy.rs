use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::{
    calendar,
    quantity::{Quantity, power::AverageMegawatts, time::Hours},
};

/// Energy total in megawatt-hours.
pub type MegawattHours = Quantity<f64, 1, 1>;

impl MegawattHours {
    /// Average power over the given duration.
    ///
    /// Zero hours yields zero average power, there is no division by zero.
    #[must_use]
    pub fn per(self, hours: Hours) -> AverageMegawatts {
        if hours > Hours::ZERO { self / hours } else { AverageMegawatts::ZERO }
    }

    /// Average power over one calendar month.
    ///
    /// The month is a zero-padded `"01"`..`"12"` key; unrecognized keys fall
    /// back to the 720-hour month.
    #[must_use]
    pub fn per_month(self, year: i32, month: &str) -> AverageMegawatts {
        self.per(calendar::hours_in_month(year, month))
    }
}

impl Default for MegawattHours {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} MWh", self.0)
    }
}

impl Debug for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}MWh", self.0)
    }
}

impl Div<Hours> for MegawattHours {
    type Output = AverageMegawatts;

    fn div(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_guards_zero_hours() {
        assert_eq!(MegawattHours::from(42.0).per(Hours::ZERO), AverageMegawatts::ZERO);
    }

    #[test]
    fn test_per() {
        assert_eq!(
            MegawattHours::from(744.0).per(Hours::from(744.0)),
            AverageMegawatts::from(1.0)
        );
    }

    #[test]
    fn test_per_month_zero_energy() {
        for month in ["01", "02", "06", "12", "garbage"] {
            assert_eq!(MegawattHours::ZERO.per_month(2024, month), AverageMegawatts::ZERO);
        }
    }

    #[test]
    fn test_per_month() {
        // February 2023: 672 hours.
        assert_eq!(
            MegawattHours::from(336.0).per_month(2023, "02"),
            AverageMegawatts::from(0.5)
        );
    }
}
