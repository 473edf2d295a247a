use super::*;

// =============================================================
// Helpers
// =============================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 9, 1)
}

fn seeded() -> CalendarState {
    CalendarState::seeded(today(), "u-1")
}

fn meeting(id: &str, on: NaiveDate, kind: MeetingType) -> Meeting {
    Meeting {
        id: id.to_owned(),
        title: format!("Meeting {id}"),
        date: on,
        start_time: time(9, 0),
        end_time: time(10, 0),
        attendees: Vec::new(),
        kind,
        location: None,
        status: MeetingStatus::Confirmed,
        organizer: "u-1".to_owned(),
        description: None,
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_starts_on_todays_month_with_nothing_open() {
    let state = CalendarState::new(date(2025, 9, 17));
    assert_eq!(state.month, MonthCursor::containing(date(2025, 9, 17)));
    assert!(state.selected.is_none());
    assert!(state.meetings.is_empty());
    for overlay in [Overlay::NewMeeting, Overlay::Availability, Overlay::Requests] {
        assert!(!state.is_open(overlay));
    }
}

#[test]
fn reseed_replaces_data_but_keeps_view() {
    let mut state = seeded();
    state.next_month();
    state.select(date(2025, 10, 2));
    state.meetings.clear();
    state.reseed("u-2");
    assert_eq!(state.meetings.len(), 2);
    assert!(state.meetings.iter().all(|m| m.organizer == "u-2"));
    assert_eq!(state.month.month(), 10);
    assert_eq!(state.selected, Some(date(2025, 10, 2)));
}

#[test]
fn reseed_only_when_user_changes() {
    let mut state = seeded();
    state.meetings.clear();
    assert!(!state.reseed_if_user_changed(None, "u-1"));
    assert!(state.meetings.is_empty());
    assert!(!state.reseed_if_user_changed(Some("u-1"), "u-1"));
    assert!(state.meetings.is_empty());

    assert!(state.reseed_if_user_changed(Some("u-1"), "u-2"));
    assert_eq!(state.meetings.len(), 2);
    assert!(state.meetings.iter().all(|m| m.organizer == "u-2"));
}

#[test]
fn reseed_keeps_accepted_meetings_for_same_user() {
    let mut state = seeded();
    state.respond_to_request("1", RequestAction::Accept);
    state.reseed_if_user_changed(Some("u-1"), "u-1");
    assert_eq!(state.meetings.len(), 3);
    assert_eq!(state.pending_count(), 1);
}

// =============================================================
// Clock sync
// =============================================================

#[test]
fn awaiting_clock_does_not_depend_on_the_local_date() {
    let a = CalendarState::awaiting_clock("u-1");
    let b = CalendarState::awaiting_clock("u-1");
    assert_eq!(a, b);
    assert!(!a.clock_synced);
    assert!(a.availability.is_empty());
    assert_eq!(a.meetings.len(), 2);
    assert_eq!(a.pending_count(), 2);
}

#[test]
fn reseed_before_clock_sync_leaves_availability_empty() {
    let mut state = CalendarState::awaiting_clock("u-1");
    state.reseed("u-2");
    assert!(state.availability.is_empty());
}

#[test]
fn sync_clock_moves_to_todays_month_and_seeds_slots() {
    let mut state = CalendarState::awaiting_clock("u-1");
    state.sync_clock(date(2025, 10, 1));
    assert!(state.clock_synced);
    assert_eq!(state.month, MonthCursor::containing(date(2025, 10, 1)));
    let cell = state.day_summary(date(2025, 10, 1));
    assert!(cell.is_today);
    assert_eq!(cell.available_slots, 3);
}

#[test]
fn unsynced_cells_ignore_any_clock() {
    // Server on Oct 2 and browser on Oct 1 both render the same cell.
    let state = CalendarState::awaiting_clock("u-1");
    let cell = state.day_summary(date(2025, 10, 1));
    assert!(!cell.is_today);
    assert_eq!(cell.available_slots, 0);
    assert_eq!(cell, CalendarState::awaiting_clock("u-1").day_summary(date(2025, 10, 1)));
}

#[test]
fn sync_clock_keeps_selection_and_overlays() {
    let mut state = CalendarState::awaiting_clock("u-1");
    state.select(date(2025, 10, 3));
    state.open(Overlay::Requests);
    state.sync_clock(date(2025, 10, 1));
    assert_eq!(state.selected, Some(date(2025, 10, 3)));
    assert!(state.is_open(Overlay::Requests));
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn slots_on_unknown_date_is_empty() {
    let state = seeded();
    assert!(state.slots_on(date(1999, 1, 1)).is_empty());
    assert!(state.available_slots_on(date(1999, 1, 1)).is_empty());
}

#[test]
fn slots_on_known_date_returns_all_slots() {
    let state = seeded();
    assert_eq!(state.slots_on(today()).len(), 6);
    assert_eq!(state.available_slots_on(today()).len(), 3);
}

#[test]
fn meetings_on_matches_exact_date_only() {
    let state = seeded();
    let on_fifth = state.meetings_on(date(2025, 9, 5));
    assert_eq!(on_fifth.len(), 1);
    assert_eq!(on_fifth[0].title, "Pitch Presentation");
    assert!(state.meetings_on(date(2025, 9, 4)).is_empty());
}

#[test]
fn selecting_a_date_drives_detail_lookups() {
    let mut state = seeded();
    state.select(date(2025, 9, 3));
    assert!(state.is_selected(date(2025, 9, 3)));
    assert!(!state.is_selected(date(2025, 9, 5)));
    let selected = state.selected.unwrap();
    assert_eq!(state.meetings_on(selected).len(), 1);
    assert_eq!(state.slots_on(selected).len(), 6);
}

#[test]
fn day_summary_caps_meetings_and_counts_overflow() {
    let mut state = CalendarState::new(today());
    let busy = date(2025, 9, 10);
    for id in ["a", "b", "c", "d"] {
        state.meetings.push(meeting(id, busy, MeetingType::Phone));
    }
    let summary = state.day_summary(busy);
    assert_eq!(summary.meetings.len(), DAY_CELL_MEETING_LIMIT);
    assert_eq!(summary.meetings[0].id, "a");
    assert_eq!(summary.meetings[1].id, "b");
    assert_eq!(summary.overflow, 2);
}

#[test]
fn day_summary_flags_today_selection_and_availability() {
    let mut state = seeded();
    state.select(date(2025, 9, 2));
    let first = state.day_summary(today());
    assert!(first.is_today);
    assert!(!first.is_selected);
    assert_eq!(first.available_slots, 3);
    assert_eq!(first.overflow, 0);

    let second = state.day_summary(date(2025, 9, 2));
    assert!(!second.is_today);
    assert!(second.is_selected);

    let outside = state.day_summary(date(2025, 9, 30));
    assert_eq!(outside.available_slots, 0);
}

#[test]
fn today_highlight_wins_over_selection() {
    let mut state = seeded();
    state.select(today());
    assert_eq!(state.day_summary(today()).highlight(), CellHighlight::Today);

    state.select(date(2025, 9, 2));
    assert_eq!(state.day_summary(date(2025, 9, 2)).highlight(), CellHighlight::Selected);
    assert_eq!(state.day_summary(today()).highlight(), CellHighlight::Today);
    assert_eq!(state.day_summary(date(2025, 9, 3)).highlight(), CellHighlight::None);
}

#[test]
fn upcoming_excludes_past_sorts_by_date_and_caps() {
    let mut state = CalendarState::new(date(2025, 9, 4));
    state.meetings = vec![
        meeting("late", date(2025, 9, 20), MeetingType::Video),
        meeting("past", date(2025, 9, 3), MeetingType::Video),
        meeting("today", date(2025, 9, 4), MeetingType::Video),
        meeting("mid", date(2025, 9, 10), MeetingType::Video),
        meeting("later", date(2025, 9, 25), MeetingType::Video),
    ];
    let ids: Vec<String> = state.upcoming_meetings().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, ["today", "mid", "late"]);
}

#[test]
fn upcoming_is_empty_when_everything_is_past() {
    let state = CalendarState::seeded(date(2026, 1, 1), "u-1");
    assert!(state.upcoming_meetings().is_empty());
}

// =============================================================
// Request resolution
// =============================================================

#[test]
fn accept_adds_exactly_one_matching_meeting() {
    let mut state = seeded();
    let before = state.meetings.len();
    let request = state.requests[0].clone();

    let outcome = state.respond_to_request("1", RequestAction::Accept);

    let Some(Resolution::Accepted { meeting_id }) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    assert_eq!(state.meetings.len(), before + 1);
    let created = state.meetings.last().unwrap();
    assert_eq!(created.id, meeting_id);
    assert_eq!(created.date, request.date);
    assert_eq!(created.start_time, request.start_time);
    assert_eq!(created.end_time, request.end_time);
    assert_eq!(created.kind, request.kind);
    assert_eq!(created.organizer, request.from);
    assert_eq!(created.attendees, vec![request.from.clone()]);
    assert_eq!(created.status, MeetingStatus::Confirmed);
    assert_eq!(created.description, request.message);
}

#[test]
fn accept_removes_request_from_pending_view() {
    let mut state = seeded();
    assert_eq!(state.pending_count(), 2);
    state.respond_to_request("1", RequestAction::Accept);
    assert_eq!(state.pending_count(), 1);
    assert!(state.pending_requests().iter().all(|r| r.id != "1"));
    assert_eq!(state.requests[0].status, RequestStatus::Accepted);
}

#[test]
fn decline_changes_status_without_new_meeting() {
    let mut state = seeded();
    let before = state.meetings.clone();
    let outcome = state.respond_to_request("2", RequestAction::Decline);
    assert_eq!(outcome, Some(Resolution::Declined));
    assert_eq!(state.requests[1].status, RequestStatus::Declined);
    assert_eq!(state.meetings, before);
    assert_eq!(state.pending_count(), 1);
}

#[test]
fn resolved_requests_are_terminal() {
    let mut state = seeded();
    state.respond_to_request("1", RequestAction::Decline);
    let meetings = state.meetings.len();
    assert_eq!(state.respond_to_request("1", RequestAction::Accept), None);
    assert_eq!(state.requests[0].status, RequestStatus::Declined);
    assert_eq!(state.meetings.len(), meetings);
}

#[test]
fn accepting_twice_creates_one_meeting() {
    let mut state = seeded();
    let before = state.meetings.len();
    state.respond_to_request("2", RequestAction::Accept);
    state.respond_to_request("2", RequestAction::Accept);
    assert_eq!(state.meetings.len(), before + 1);
}

#[test]
fn unknown_request_is_ignored() {
    let mut state = seeded();
    assert_eq!(state.respond_to_request("missing", RequestAction::Accept), None);
    assert_eq!(state.pending_count(), 2);
}

#[test]
fn request_to_meeting_copies_type_and_message() {
    let request = &seed::requests()[1];
    let meeting = request.to_meeting("m-1".to_owned());
    assert_eq!(meeting.kind, MeetingType::InPerson);
    assert_eq!(meeting.description, None);
    assert_eq!(meeting.title, "Partnership Opportunity");
}

// =============================================================
// Availability toggling
// =============================================================

#[test]
fn toggle_flips_slot_on_selected_date_only() {
    let mut state = seeded();
    let other = date(2025, 9, 2);
    let other_before = state.slots_on(other).to_vec();

    state.select(today());
    assert_eq!(state.toggle_selected_slot("2"), Some(true));
    assert!(state.slots_on(today())[1].is_available);
    assert_eq!(state.slots_on(other), other_before.as_slice());

    assert_eq!(state.toggle_selected_slot("2"), Some(false));
    assert!(!state.slots_on(today())[1].is_available);
}

#[test]
fn toggle_without_selection_does_nothing() {
    let mut state = seeded();
    let before = state.availability.clone();
    assert_eq!(state.toggle_selected_slot("1"), None);
    assert_eq!(state.availability, before);
}

#[test]
fn toggle_on_date_without_slots_does_nothing() {
    let mut state = seeded();
    state.select(date(2030, 1, 1));
    assert_eq!(state.toggle_selected_slot("1"), None);
    assert!(!state.availability.contains_key(&date(2030, 1, 1)));
}

#[test]
fn toggle_unknown_slot_does_nothing() {
    let mut state = seeded();
    state.select(today());
    assert_eq!(state.toggle_selected_slot("99"), None);
}

// =============================================================
// Navigation and overlays
// =============================================================

#[test]
fn month_navigation_rolls_years() {
    let mut state = CalendarState::new(date(2025, 12, 15));
    state.next_month();
    assert_eq!((state.month.year(), state.month.month()), (2026, 1));
    state.prev_month();
    state.prev_month();
    assert_eq!((state.month.year(), state.month.month()), (2025, 11));
}

#[test]
fn navigation_keeps_selection() {
    let mut state = seeded();
    state.select(date(2025, 9, 5));
    state.next_month();
    assert_eq!(state.selected, Some(date(2025, 9, 5)));
}

#[test]
fn overlays_open_and_close_independently() {
    let mut state = CalendarState::new(today());
    state.open(Overlay::Requests);
    state.open(Overlay::NewMeeting);
    assert!(state.is_open(Overlay::Requests));
    assert!(state.is_open(Overlay::NewMeeting));
    assert!(!state.is_open(Overlay::Availability));
    state.close(Overlay::Requests);
    assert!(!state.show_requests);
    assert!(state.show_new_meeting);
}

// =============================================================
// MeetingType
// =============================================================

#[test]
fn meeting_type_labels_and_icons() {
    assert_eq!(MeetingType::InPerson.as_str(), "in-person");
    assert_eq!(MeetingType::Phone.label(), "Phone Call");
    assert_eq!(MeetingType::Video.icon(), IconName::Video);
    assert_eq!(MeetingType::InPerson.icon(), IconName::MapPin);
    assert_eq!(MeetingType::Phone.icon(), IconName::Clock);
}
