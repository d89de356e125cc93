use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;
use crate::config::CycleStart;
use crate::utils::dates::{first_of_month, month_index, month_index_of, month_label};

/// One point of the group-savings chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub label: String,
    pub cumulative: f64,
}

/// Walks a fixed-length month window and accumulates net movements.
///
/// The cumulative restarts from zero at the window start; entries dated
/// outside the window are excluded entirely, not clamped. Months without
/// movement carry the previous value forward, so the output always has
/// exactly `window_months` points.
pub fn monthly_cumulative(
    entries: &[LedgerEntry],
    window_start: CycleStart,
    window_months: usize,
) -> Vec<MonthlyPoint> {
    let start_index = month_index_of(window_start.year, window_start.month);

    let mut net_by_month: BTreeMap<i32, f64> = BTreeMap::new();
    for entry in entries {
        *net_by_month.entry(month_index(entry.date)).or_insert(0.0) += entry.signed_amount();
    }

    let mut points = Vec::with_capacity(window_months);
    let mut cumulative = 0.0;
    for offset in 0..window_months as i32 {
        let index = start_index + offset;
        cumulative += net_by_month.get(&index).copied().unwrap_or(0.0);
        let month_start = first_of_month(index);
        points.push(MonthlyPoint {
            label: format!("{} {}", month_label(month_start.month()), month_start.year()),
            cumulative,
        });
    }
    points
}
