use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Recurring meeting rule: a fixed weekday in the first week of each month,
/// at a fixed time of day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingRule {
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl Default for MeetingRule {
    fn default() -> Self {
        // "Dimanche, 14h30 précise."
        Self {
            weekday: Weekday::Sun,
            hour: 14,
            minute: 30,
        }
    }
}

/// Returns the next meeting instant strictly after `now`.
///
/// The comparison is strict: a call made at the exact meeting instant rolls
/// over to next month's meeting. That matches the portal's observed behavior
/// and is kept as-is.
pub fn next_meeting(now: NaiveDateTime, rule: MeetingRule) -> NaiveDateTime {
    let this_month = meeting_in_month(now.date().year(), now.date().month(), rule);
    if now < this_month {
        return this_month;
    }
    let (year, month) = if now.date().month() == 12 {
        (now.date().year() + 1, 1)
    } else {
        (now.date().year(), now.date().month() + 1)
    };
    meeting_in_month(year, month, rule)
}

fn meeting_in_month(year: i32, month: u32, rule: MeetingRule) -> NaiveDateTime {
    let mut day = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    while day.weekday() != rule.weekday {
        day += Duration::days(1);
    }
    day.and_hms_opt(rule.hour, rule.minute, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn before_first_sunday_stays_in_month() {
        // First Sunday of February 2026 is the 1st.
        let now = at(2026, 2, 1, 10, 0);
        assert_eq!(next_meeting(now, MeetingRule::default()), at(2026, 2, 1, 14, 30));
    }

    #[test]
    fn after_first_sunday_rolls_to_next_month() {
        let now = at(2026, 2, 10, 9, 0);
        // First Sunday of March 2026 is the 1st.
        assert_eq!(next_meeting(now, MeetingRule::default()), at(2026, 3, 1, 14, 30));
    }

    #[test]
    fn exact_meeting_instant_rolls_over() {
        let now = at(2026, 2, 1, 14, 30);
        assert_eq!(next_meeting(now, MeetingRule::default()), at(2026, 3, 1, 14, 30));
    }

    #[test]
    fn december_rolls_into_january() {
        // First Sunday of December 2026 is the 6th.
        let now = at(2026, 12, 20, 12, 0);
        assert_eq!(next_meeting(now, MeetingRule::default()), at(2027, 1, 3, 14, 30));
    }
}
