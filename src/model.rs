//! Canonical record shapes at the API-response-mapping boundary.

use serde::{Deserialize, Serialize};

use crate::{
    calendar::Month,
    period::PeriodKey,
    quantity::{energy::MegawattHours, power::AverageMegawatts, time::Hours},
};

/// One month's contracted volumes, as grouped by the aggregation endpoint.
///
/// The backend's wire names are accepted as aliases, so both the canonical
/// shape and the raw endpoint response deserialize into the same record.
/// Missing volume fields default to zero and a missing or malformed period
/// key degrades to [`PeriodKey::Unknown`]: deserialization is total.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MonthlyRecord {
    #[serde(default, alias = "mes", alias = "_id")]
    pub period: PeriodKey,

    #[serde(default, rename = "purchase_mwh", alias = "total_compra")]
    pub purchase: MegawattHours,

    #[serde(default, rename = "sale_mwh", alias = "total_venda")]
    pub sale: MegawattHours,
}

impl MonthlyRecord {
    #[must_use]
    pub const fn new(period: PeriodKey, purchase: MegawattHours, sale: MegawattHours) -> Self {
        Self { period, purchase, sale }
    }
}

/// Per-record derived view for the charting collaborator.
///
/// Freshly built on every aggregation call and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub period: PeriodKey,

    #[serde(rename = "hours_in_month")]
    pub hours: Hours,

    pub purchase_mwh: MegawattHours,
    pub sale_mwh: MegawattHours,
    pub purchase_mwm: AverageMegawatts,
    pub sale_mwm: AverageMegawatts,

    /// Purchase minus sale, in average megawatts.
    pub net_mwm: AverageMegawatts,
}

impl EnrichedRecord {
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.period.period().map(|period| period.year)
    }

    #[must_use]
    pub fn month(&self) -> Option<Month> {
        self.period.period().map(|period| period.month)
    }
}

/// Whole-collection totals for the dashboard tiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub total_purchase_mwh: MegawattHours,
    pub total_sale_mwh: MegawattHours,

    /// Sum of the per-record calendar hours.
    pub total_hours: Hours,

    /// Hours-weighted: total MWh over total hours.
    pub total_purchase_mwm: AverageMegawatts,

    /// Hours-weighted: total MWh over total hours.
    pub total_sale_mwm: AverageMegawatts,

    /// Always `total_purchase_mwm - total_sale_mwm`.
    pub net_mwm: AverageMegawatts,

    pub period_count: usize,
}

impl PeriodSummary {
    pub const EMPTY: Self = Self {
        total_purchase_mwh: MegawattHours::ZERO,
        total_sale_mwh: MegawattHours::ZERO,
        total_hours: Hours::ZERO,
        total_purchase_mwm: AverageMegawatts::ZERO,
        total_sale_mwm: AverageMegawatts::ZERO,
        net_mwm: AverageMegawatts::ZERO,
        period_count: 0,
    };
}

#[cfg(test)]
mod tests {
    use crate::{calendar::Month, period::Period, prelude::*};

    use super::*;

    #[test]
    fn test_deserialize_wire_shape() -> Result {
        // The aggregation endpoint's raw response: integer key, localized names.
        let record: MonthlyRecord =
            serde_json::from_str(r#"{"mes": 202401, "total_compra": 10.0, "total_venda": 4.0}"#)?;
        assert_eq!(record.period, PeriodKey::Valid(Period::new(2024, Month::January)));
        assert_eq!(record.purchase, MegawattHours::from(10.0));
        assert_eq!(record.sale, MegawattHours::from(4.0));
        Ok(())
    }

    #[test]
    fn test_deserialize_canonical_shape() -> Result {
        let record: MonthlyRecord =
            serde_json::from_str(r#"{"period": "202502", "purchase_mwh": 1.5, "sale_mwh": 0.5}"#)?;
        assert_eq!(record.period, PeriodKey::Valid(Period::new(2025, Month::February)));
        assert_eq!(record.purchase, MegawattHours::from(1.5));
        assert_eq!(record.sale, MegawattHours::from(0.5));
        Ok(())
    }

    #[test]
    fn test_deserialize_missing_fields_default() -> Result {
        let record: MonthlyRecord = serde_json::from_str(r#"{"_id": "202403"}"#)?;
        assert_eq!(record.period, PeriodKey::Valid(Period::new(2024, Month::March)));
        assert_eq!(record.purchase, MegawattHours::ZERO);
        assert_eq!(record.sale, MegawattHours::ZERO);
        Ok(())
    }

    #[test]
    fn test_deserialize_malformed_period_is_total() -> Result {
        let record: MonthlyRecord =
            serde_json::from_str(r#"{"mes": "oops", "total_compra": 1.0}"#)?;
        assert_eq!(record.period, PeriodKey::Unknown("oops".to_owned()));
        assert_eq!(record.period.hours(), Hours::from(720.0));
        Ok(())
    }

    #[test]
    fn test_serialize_period_as_string() -> Result {
        let record = MonthlyRecord::new(
            PeriodKey::parse("202401"),
            MegawattHours::from(1.0),
            MegawattHours::ZERO,
        );
        let json = serde_json::to_value(&record)?;
        assert_eq!(json["period"], "202401");
        Ok(())
    }
}
