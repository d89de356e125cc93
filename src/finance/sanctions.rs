use serde::{Deserialize, Serialize};

/// Per-unit penalties, in whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanctionTariff {
    pub late_meeting: i64,
    pub unexcused_absence: i64,
    pub project_delay: i64,
}

impl Default for SanctionTariff {
    fn default() -> Self {
        Self {
            late_meeting: 2,
            unexcused_absence: 10,
            project_delay: 15,
        }
    }
}

/// Counted infractions for one member over a period.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanctionCount {
    pub late_meetings: u32,
    pub unexcused_absences: u32,
    pub project_delays: u32,
}

/// Total owed for the counted infractions.
pub fn sanction_total(count: SanctionCount, tariff: SanctionTariff) -> i64 {
    count.late_meetings as i64 * tariff.late_meeting
        + count.unexcused_absences as i64 * tariff.unexcused_absence
        + count.project_delays as i64 * tariff.project_delay
}
