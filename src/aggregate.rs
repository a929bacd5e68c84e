//! Hours-weighted aggregation of monthly records.

use itertools::Itertools;

use crate::{
    model::{EnrichedRecord, MonthlyRecord, PeriodSummary},
    prelude::*,
    quantity::{energy::MegawattHours, power::AverageMegawatts, time::Hours},
};

fn total_hours(records: &[MonthlyRecord]) -> Hours {
    records.iter().map(|record| record.period.hours()).sum()
}

/// Hours-weighted average power for an arbitrary total over the records' months.
///
/// Each record contributes its own calendar hours, so months of different
/// lengths weigh proportionally. Zero total hours yields zero.
#[must_use]
pub fn mwm_for_period(total: MegawattHours, records: &[MonthlyRecord]) -> AverageMegawatts {
    total.per(total_hours(records))
}

/// Derive the per-record view: calendar hours, MWm conversions, net balance.
///
/// Order-preserving and total; the input is not modified.
#[must_use]
pub fn enrich(records: &[MonthlyRecord]) -> Vec<EnrichedRecord> {
    records
        .iter()
        .map(|record| {
            let hours = record.period.hours();
            let purchase_mwm = record.purchase.per(hours);
            let sale_mwm = record.sale.per(hours);
            EnrichedRecord {
                period: record.period.clone(),
                hours,
                purchase_mwh: record.purchase,
                sale_mwh: record.sale,
                purchase_mwm,
                sale_mwm,
                net_mwm: purchase_mwm - sale_mwm,
            }
        })
        .collect_vec()
}

/// Whole-collection summary.
///
/// Total MWm is ΣMWh over ΣHours, the hours-weighted average. Averaging the
/// per-record MWm values instead would weigh a 672-hour February the same as
/// a 744-hour January.
#[must_use]
pub fn summarize(records: &[MonthlyRecord]) -> PeriodSummary {
    let total_purchase: MegawattHours = records.iter().map(|record| record.purchase).sum();
    let total_sale: MegawattHours = records.iter().map(|record| record.sale).sum();
    let total_hours = total_hours(records);
    let total_purchase_mwm = total_purchase.per(total_hours);
    let total_sale_mwm = total_sale.per(total_hours);
    let summary = PeriodSummary {
        total_purchase_mwh: total_purchase,
        total_sale_mwh: total_sale,
        total_hours,
        total_purchase_mwm,
        total_sale_mwm,
        net_mwm: total_purchase_mwm - total_sale_mwm,
        period_count: records.len(),
    };
    debug!(period_count = summary.period_count, total_hours = total_hours.0, "summarized");
    summary
}
