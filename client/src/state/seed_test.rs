use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

#[test]
fn meetings_carry_organizer() {
    let list = meetings("u-42");
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|m| m.organizer == "u-42"));
    assert!(list.iter().all(|m| m.status == MeetingStatus::Confirmed));
    assert_eq!(list[0].title, "Pitch Presentation");
    assert_eq!(list[0].date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
}

#[test]
fn requests_start_pending() {
    let list = requests();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|r| r.status == RequestStatus::Pending));
    assert_eq!(list[1].kind, MeetingType::InPerson);
    assert!(list[1].message.is_none());
}

#[test]
fn availability_covers_fourteen_consecutive_days() {
    let map = availability(today());
    assert_eq!(map.len(), 14);
    let first = *map.keys().next().unwrap();
    let last = *map.keys().last().unwrap();
    assert_eq!(first, today());
    assert_eq!(last, NaiveDate::from_ymd_opt(2025, 9, 14).unwrap());
    assert!(map.values().all(|slots| slots.len() == 6));
}

#[test]
fn availability_first_day_blocks_rhythmic_slots() {
    // Day index 0 is divisible by 2, 3, and 4, so slots 2, 4, and 6 are blocked.
    let map = availability(today());
    let flags: Vec<bool> = map[&today()].iter().map(|s| s.is_available).collect();
    assert_eq!(flags, [true, false, true, false, true, false]);
}

#[test]
fn availability_slots_are_one_hour_ordered() {
    let map = availability(today());
    let slots = &map[&today()];
    for pair in slots.windows(2) {
        assert!(pair[0].start_time < pair[1].start_time);
    }
    for slot in slots {
        assert_eq!((slot.end_time - slot.start_time).num_minutes(), 60);
        assert!(!slot.is_booked);
    }
}

#[test]
fn availability_wraps_month_boundary() {
    let end_of_month = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
    let map = availability(end_of_month);
    assert!(map.contains_key(&NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()));
}

#[test]
fn recent_contacts_fit_sidebar_limit() {
    let contacts = recent_contacts();
    assert_eq!(contacts.len(), crate::state::sidebar::RECENT_CONTACT_LIMIT);
    assert_eq!(contacts[1].presence, Presence::Away);
    assert_eq!(contacts[0].initials(), "SJ");
}
