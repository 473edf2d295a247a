//! Calendar page state: meetings, availability, requests, and overlays.
//!
//! DESIGN
//! ======
//! The page holds one `RwSignal<CalendarState>` in context. Every handler is
//! a synchronous method here, so components stay thin and the transitions
//! are unit-testable without a reactive runtime.
//!
//! Lookups are exact date matches; a date with no entry yields an empty
//! list rather than an error.
//!
//! CLOCK
//! =====
//! The server and the browser may disagree on the current date, so the page
//! starts from [`CalendarState::awaiting_clock`], which reads no clock at
//! all. The browser then calls [`CalendarState::sync_clock`] once hydrated.
//! Until then `clock_synced` is false and date-dependent views stay unmounted.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::state::seed;
use crate::util::icon::IconName;
use crate::util::month::MonthCursor;

/// Number of meeting titles drawn inside a day cell before "+N more".
pub const DAY_CELL_MEETING_LIMIT: usize = 2;

/// Number of entries in the "Upcoming Meetings" card.
pub const UPCOMING_LIMIT: usize = 3;

/// Stand-in for `today` before the viewer's clock is read.
const CLOCK_PLACEHOLDER: NaiveDate = NaiveDate::MIN;

/// How a meeting takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeetingType {
    Video,
    InPerson,
    Phone,
}

impl MeetingType {
    pub const ALL: [Self; 3] = [Self::Video, Self::InPerson, Self::Phone];

    /// Short form used for form values and CSS modifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::InPerson => "in-person",
            Self::Phone => "phone",
        }
    }

    /// Legend / select-option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video Call",
            Self::InPerson => "In Person",
            Self::Phone => "Phone Call",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Self::Video => IconName::Video,
            Self::InPerson => IconName::MapPin,
            Self::Phone => IconName::Clock,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeetingStatus {
    Confirmed,
    Pending,
    Declined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

/// User response to a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Decline,
}

/// A bookable time range on one date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub is_booked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub attendees: Vec<String>,
    pub kind: MeetingType,
    pub location: Option<String>,
    pub status: MeetingStatus,
    pub organizer: String,
    pub description: Option<String>,
}

/// An inbound meeting proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeetingRequest {
    pub id: String,
    pub from: String,
    pub from_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub title: String,
    pub message: Option<String>,
    pub status: RequestStatus,
    pub kind: MeetingType,
}

impl MeetingRequest {
    /// Confirmed meeting produced when this request is accepted. The
    /// requester becomes both organizer and sole attendee.
    pub fn to_meeting(&self, id: String) -> Meeting {
        Meeting {
            id,
            title: self.title.clone(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            attendees: vec![self.from.clone()],
            kind: self.kind,
            location: None,
            status: MeetingStatus::Confirmed,
            organizer: self.from.clone(),
            description: self.message.clone(),
        }
    }
}

/// What a request response changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Accepted { meeting_id: String },
    Declined,
}

/// Overlays the page can show on top of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    NewMeeting,
    Availability,
    Requests,
}

/// Background highlight of a day cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellHighlight {
    None,
    Today,
    Selected,
}

/// Everything one day cell renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    /// At most [`DAY_CELL_MEETING_LIMIT`] meetings, in list order.
    pub meetings: Vec<Meeting>,
    /// Meetings on this date beyond the ones shown.
    pub overflow: usize,
    pub available_slots: usize,
}

impl DaySummary {
    /// Today's highlight wins over the selection highlight.
    pub fn highlight(&self) -> CellHighlight {
        if self.is_today {
            CellHighlight::Today
        } else if self.is_selected {
            CellHighlight::Selected
        } else {
            CellHighlight::None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub today: NaiveDate,
    /// False until `today` has been read from the viewer's clock.
    pub clock_synced: bool,
    pub month: MonthCursor,
    pub selected: Option<NaiveDate>,
    pub meetings: Vec<Meeting>,
    pub availability: BTreeMap<NaiveDate, Vec<TimeSlot>>,
    pub requests: Vec<MeetingRequest>,
    pub show_new_meeting: bool,
    pub show_availability: bool,
    pub show_requests: bool,
}

impl CalendarState {
    /// Empty calendar showing the month of `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            clock_synced: true,
            month: MonthCursor::containing(today),
            selected: None,
            meetings: Vec::new(),
            availability: BTreeMap::new(),
            requests: Vec::new(),
            show_new_meeting: false,
            show_availability: false,
            show_requests: false,
        }
    }

    /// Calendar filled with the demo data set.
    pub fn seeded(today: NaiveDate, organizer: &str) -> Self {
        let mut state = Self::new(today);
        state.reseed(organizer);
        state
    }

    /// Seeded calendar that has not read a clock yet. Identical wherever it
    /// is built, so server render and hydration agree. Availability stays
    /// empty until [`CalendarState::sync_clock`].
    pub fn awaiting_clock(organizer: &str) -> Self {
        let mut state = Self::new(CLOCK_PLACEHOLDER);
        state.clock_synced = false;
        state.reseed(organizer);
        state
    }

    /// Adopt the viewer's `today`: jump to its month and seed availability
    /// from it. Selection and overlays are kept.
    pub fn sync_clock(&mut self, today: NaiveDate) {
        self.today = today;
        self.month = MonthCursor::containing(today);
        self.clock_synced = true;
        self.availability = seed::availability(today);
    }

    /// Replace meetings, requests, and availability with fresh demo data.
    /// Navigation, selection, and overlays are left alone.
    pub fn reseed(&mut self, organizer: &str) {
        self.meetings = seed::meetings(organizer);
        self.requests = seed::requests();
        self.availability = if self.clock_synced {
            seed::availability(self.today)
        } else {
            BTreeMap::new()
        };
    }

    /// Reseed when the signed-in user differs from `previous`. The first
    /// run (`previous` is `None`) only records the user; returns whether
    /// data was replaced.
    pub fn reseed_if_user_changed(&mut self, previous: Option<&str>, current: &str) -> bool {
        match previous {
            Some(previous) if previous != current => {
                self.reseed(current);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    pub fn meetings_on(&self, date: NaiveDate) -> Vec<Meeting> {
        self.meetings.iter().filter(|m| m.date == date).cloned().collect()
    }

    /// Slots stored for `date`; empty when the date has no entry.
    pub fn slots_on(&self, date: NaiveDate) -> &[TimeSlot] {
        self.availability.get(&date).map_or(&[], Vec::as_slice)
    }

    pub fn available_slots_on(&self, date: NaiveDate) -> Vec<TimeSlot> {
        self.slots_on(date).iter().filter(|s| s.is_available).cloned().collect()
    }

    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        let mut meetings = self.meetings_on(date);
        let overflow = meetings.len().saturating_sub(DAY_CELL_MEETING_LIMIT);
        meetings.truncate(DAY_CELL_MEETING_LIMIT);
        DaySummary {
            date,
            is_today: date == self.today,
            is_selected: self.is_selected(date),
            meetings,
            overflow,
            available_slots: self.slots_on(date).iter().filter(|s| s.is_available).count(),
        }
    }

    /// Meetings dated today or later, earliest first, capped at
    /// [`UPCOMING_LIMIT`]. Same-day meetings keep list order.
    pub fn upcoming_meetings(&self) -> Vec<Meeting> {
        let mut upcoming: Vec<Meeting> = self
            .meetings
            .iter()
            .filter(|m| m.date >= self.today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|m| m.date);
        upcoming.truncate(UPCOMING_LIMIT);
        upcoming
    }

    pub fn pending_requests(&self) -> Vec<MeetingRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.requests.iter().filter(|r| r.status == RequestStatus::Pending).count()
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Resolve a pending request. Accepting appends exactly one confirmed
    /// meeting; declining only flips the status. Unknown or already-resolved
    /// requests are left untouched and return `None`.
    pub fn respond_to_request(&mut self, request_id: &str, action: RequestAction) -> Option<Resolution> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id && r.status == RequestStatus::Pending)?;

        match action {
            RequestAction::Accept => {
                request.status = RequestStatus::Accepted;
                let meeting = request.to_meeting(uuid::Uuid::new_v4().to_string());
                let meeting_id = meeting.id.clone();
                self.meetings.push(meeting);
                Some(Resolution::Accepted { meeting_id })
            }
            RequestAction::Decline => {
                request.status = RequestStatus::Declined;
                Some(Resolution::Declined)
            }
        }
    }

    /// Flip availability of a slot on the selected date. Returns the new
    /// flag, or `None` without a selection or a matching slot.
    pub fn toggle_selected_slot(&mut self, slot_id: &str) -> Option<bool> {
        let date = self.selected?;
        let slot = self
            .availability
            .get_mut(&date)?
            .iter_mut()
            .find(|s| s.id == slot_id)?;
        slot.is_available = !slot.is_available;
        Some(slot.is_available)
    }

    // =========================================================================
    // OVERLAYS
    // =========================================================================

    pub fn open(&mut self, overlay: Overlay) {
        *self.overlay_flag(overlay) = true;
    }

    pub fn close(&mut self, overlay: Overlay) {
        *self.overlay_flag(overlay) = false;
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::NewMeeting => self.show_new_meeting,
            Overlay::Availability => self.show_availability,
            Overlay::Requests => self.show_requests,
        }
    }

    fn overlay_flag(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::NewMeeting => &mut self.show_new_meeting,
            Overlay::Availability => &mut self.show_availability,
            Overlay::Requests => &mut self.show_requests,
        }
    }
}
