//! Meeting-date resolution and the 3-month rotation schedule.

pub mod meeting;
pub mod rotation;

pub use meeting::{next_meeting, MeetingRule};
pub use rotation::{rotation_schedule, RotationSlot, SlotStatus};
