//! Demo data for the calendar and sidebar.
//!
//! Nothing here is persisted; the calendar page re-seeds whenever the
//! session user changes.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveTime};

use crate::net::types::Role;
use crate::state::calendar::{Meeting, MeetingRequest, MeetingStatus, MeetingType, RequestStatus, TimeSlot};
use crate::state::sidebar::{Contact, Presence};

/// Days of availability generated, starting today.
pub const AVAILABILITY_DAYS: u64 = 14;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn meetings(organizer: &str) -> Vec<Meeting> {
    vec![
        Meeting {
            id: "1".to_owned(),
            title: "Pitch Presentation".to_owned(),
            date: ymd(2025, 9, 5),
            start_time: hm(10, 0),
            end_time: hm(11, 0),
            attendees: vec!["investor@example.com".to_owned()],
            kind: MeetingType::Video,
            location: None,
            status: MeetingStatus::Confirmed,
            organizer: organizer.to_owned(),
            description: Some("Present our Q3 growth strategy".to_owned()),
        },
        Meeting {
            id: "2".to_owned(),
            title: "Team Standup".to_owned(),
            date: ymd(2025, 9, 3),
            start_time: hm(9, 0),
            end_time: hm(9, 30),
            attendees: vec!["team@company.com".to_owned()],
            kind: MeetingType::Video,
            location: None,
            status: MeetingStatus::Confirmed,
            organizer: organizer.to_owned(),
            description: None,
        },
    ]
}

pub fn requests() -> Vec<MeetingRequest> {
    vec![
        MeetingRequest {
            id: "1".to_owned(),
            from: "investor123".to_owned(),
            from_name: "Sarah Johnson".to_owned(),
            date: ymd(2025, 9, 6),
            start_time: hm(14, 0),
            end_time: hm(15, 0),
            title: "Investment Discussion".to_owned(),
            message: Some("Would love to discuss your latest product roadmap.".to_owned()),
            status: RequestStatus::Pending,
            kind: MeetingType::Video,
        },
        MeetingRequest {
            id: "2".to_owned(),
            from: "entrepreneur456".to_owned(),
            from_name: "Mike Chen".to_owned(),
            date: ymd(2025, 9, 7),
            start_time: hm(11, 0),
            end_time: hm(12, 0),
            title: "Partnership Opportunity".to_owned(),
            message: None,
            status: RequestStatus::Pending,
            kind: MeetingType::InPerson,
        },
    ]
}

/// Six hourly slots per day for [`AVAILABILITY_DAYS`] days from `today`.
/// Some slots are blocked on a fixed rhythm so the grid shows variety.
pub fn availability(today: NaiveDate) -> BTreeMap<NaiveDate, Vec<TimeSlot>> {
    (0..AVAILABILITY_DAYS)
        .filter_map(|i| {
            let date = today.checked_add_days(Days::new(i))?;
            let slot = |id: &str, start: u32, available: bool| TimeSlot {
                id: id.to_owned(),
                start_time: hm(start, 0),
                end_time: hm(start + 1, 0),
                is_available: available,
                is_booked: false,
            };
            let slots = vec![
                slot("1", 9, true),
                slot("2", 10, i % 3 != 0),
                slot("3", 11, true),
                slot("4", 14, i % 2 != 0),
                slot("5", 15, true),
                slot("6", 16, i % 4 != 0),
            ];
            Some((date, slots))
        })
        .collect()
}

pub fn recent_contacts() -> Vec<Contact> {
    let contact = |id: &str, name: &str, role, presence, last_call: &str| Contact {
        id: id.to_owned(),
        name: name.to_owned(),
        role,
        presence,
        last_call: Some(last_call.to_owned()),
    };
    vec![
        contact("1", "Sarah Johnson", Role::Investor, Presence::Online, "2 hours ago"),
        contact("2", "Mike Chen", Role::Entrepreneur, Presence::Away, "Yesterday"),
        contact("3", "Emma Davis", Role::Investor, Presence::Offline, "3 days ago"),
        contact("4", "Alex Rodriguez", Role::Entrepreneur, Presence::Online, "Last week"),
    ]
}
