use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CycleStart;
use crate::utils::dates::{first_of_month, month_index, month_index_of};

const SLOT_MONTHS: i32 = 3;

/// Position of a rotation slot relative to the reference month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotStatus {
    Past,
    Current,
    Future,
}

/// One participant's turn in the rotation: a 3-month block with its status
/// and the pot amount accrued so far ("cagnotte").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RotationSlot {
    pub member: String,
    /// First day of the slot's first month.
    pub starts_on: NaiveDate,
    /// First day of the slot's last month.
    pub ends_on: NaiveDate,
    pub status: SlotStatus,
    pub accrued: i64,
}

/// Builds the full rotation schedule for a roster.
///
/// Slot `i` covers months `3i..3i+2` after the cycle start, so roster order is
/// chronological order by construction; no re-sort happens. All comparisons
/// use absolute month indices against the reference date's month.
pub fn rotation_schedule(
    roster: &[String],
    cycle_start: CycleStart,
    full_pot: i64,
    reference: NaiveDate,
) -> Vec<RotationSlot> {
    let cycle_index = month_index_of(cycle_start.year, cycle_start.month);
    let reference_index = month_index(reference);

    roster
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let start_index = cycle_index + SLOT_MONTHS * i as i32;
            let end_index = start_index + SLOT_MONTHS - 1;
            let (status, accrued) = slot_state(start_index, end_index, reference_index, full_pot);
            RotationSlot {
                member: member.clone(),
                starts_on: first_of_month(start_index),
                ends_on: first_of_month(end_index),
                status,
                accrued,
            }
        })
        .collect()
}

fn slot_state(
    start_index: i32,
    end_index: i32,
    reference_index: i32,
    full_pot: i64,
) -> (SlotStatus, i64) {
    if reference_index > end_index {
        return (SlotStatus::Past, full_pot);
    }
    if reference_index >= start_index {
        let month_in_slot = (reference_index - start_index) as i64;
        // Thirds accrue progressively; the last month snaps to the full pot
        // so integer division never leaves a shortfall.
        let accrued = if month_in_slot == SLOT_MONTHS as i64 - 1 {
            full_pot
        } else {
            full_pot * (month_in_slot + 1) / SLOT_MONTHS as i64
        };
        return (SlotStatus::Current, accrued);
    }
    (SlotStatus::Future, 0)
}
