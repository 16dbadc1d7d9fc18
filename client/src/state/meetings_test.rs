use super::*;
use crate::data::fixtures::Catalog;
use crate::data::types::MeetingStatus;
use time::macros::datetime;

fn meetings() -> Vec<ConfirmedMeeting> {
    Catalog::embedded(datetime!(2025-10-22 15:00 +3)).unwrap().meetings
}

#[test]
fn split_by_today_flag() {
    let groups = MeetingGroups::split(&meetings());
    assert!(groups.today.iter().all(|m| m.is_today));
    assert!(groups.upcoming.iter().all(|m| !m.is_today));
    assert_eq!(groups.today.len() + groups.upcoming.len(), meetings().len());
}

#[test]
fn upcoming_keeps_order() {
    let groups = MeetingGroups::split(&meetings());
    let ids: Vec<&str> = groups.upcoming.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["meet-jazz", "meet-art"]);
}

#[test]
fn no_meetings_is_empty() {
    assert!(MeetingGroups::split(&[]).is_empty());
    assert!(!MeetingGroups::split(&meetings()).is_empty());
}

#[test]
fn statuses_carry_through() {
    let groups = MeetingGroups::split(&meetings());
    assert_eq!(groups.upcoming[1].status, MeetingStatus::Pending);
    assert_eq!(groups.upcoming[1].status.label(), "Ожидает");
}
