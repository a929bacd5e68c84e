use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::MegawattHours, time::Hours};

/// Average power in «average megawatts», the normalized unit for comparing
/// periods of different lengths.
pub type AverageMegawatts = Quantity<f64, 1, 0>;

impl Default for AverageMegawatts {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for AverageMegawatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} MWm", self.0)
    }
}

impl Debug for AverageMegawatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}MWm", self.0)
    }
}

impl Mul<Hours> for AverageMegawatts {
    type Output = MegawattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
