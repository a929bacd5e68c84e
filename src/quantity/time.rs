use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Calendar duration in hours.
pub type Hours = Quantity<f64, 0, 1>;

impl Hours {
    pub fn from_days(days: u32) -> Self {
        Self(f64::from(days) * 24.0)
    }
}

impl Default for Hours {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}h", self.0)
    }
}
