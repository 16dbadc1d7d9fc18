//! Today/upcoming split for confirmed meetings on the plans feed.

#[cfg(test)]
#[path = "meetings_test.rs"]
mod meetings_test;

use crate::data::types::ConfirmedMeeting;

/// Meetings grouped for display. Both groups keep fixture order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeetingGroups {
    pub today: Vec<ConfirmedMeeting>,
    pub upcoming: Vec<ConfirmedMeeting>,
}

impl MeetingGroups {
    #[must_use]
    pub fn split(meetings: &[ConfirmedMeeting]) -> Self {
        let (today, upcoming) = meetings.iter().cloned().partition(|m| m.is_today);
        Self { today, upcoming }
    }

    /// The whole block is hidden when there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.upcoming.is_empty()
    }
}
