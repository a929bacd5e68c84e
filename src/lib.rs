//! Monthly energy-contracting metrics: calendar-aware conversion of MWh
//! totals into average megawatts (MWm) and hours-weighted purchase/sale
//! aggregation.
//!
//! Every operation is a pure, total function: malformed period keys degrade
//! to a 720-hour fallback slot (reported via `tracing`), missing volumes
//! default to zero, and zero-hour divisions yield zero.

pub mod aggregate;
pub mod calendar;
pub mod model;
pub mod period;
mod prelude;
pub mod quantity;

pub use self::{
    aggregate::{enrich, mwm_for_period, summarize},
    calendar::{Month, hours_in_month, is_leap_year, total_hours_in_year},
    model::{EnrichedRecord, MonthlyRecord, PeriodSummary},
    period::{Period, PeriodKey},
    quantity::{Quantity, energy::MegawattHours, power::AverageMegawatts, time::Hours},
};
