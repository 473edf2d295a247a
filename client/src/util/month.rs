//! Month-grid date arithmetic and calendar label formatting.
//!
//! DESIGN
//! ======
//! Every date in the calendar is a timezone-free `NaiveDate` taken from the
//! viewer's local clock. Grid cells, lookup keys, and seed data share that
//! one representation, so a cell and its ISO key can never disagree.

#[cfg(test)]
#[path = "month_test.rs"]
mod month_test;

use chrono::{Datelike, Local, Months, NaiveDate, NaiveTime};

/// Full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown by the grid, anchored on its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Following month; December rolls into January of the next year.
    /// Stays put at the end of the representable range.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Preceding month; January rolls back into December of the previous year.
    #[must_use]
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    pub fn days_in_month(self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => u32::try_from((next - self.first).num_days()).unwrap_or(31),
            // Only the last representable month lands here, and it is a December.
            None => 31,
        }
    }

    /// Blank cells before day 1, i.e. its weekday index with Sunday = 0.
    pub fn leading_blanks(self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Cells of the seven-column grid: `None` for each leading blank, then
    /// one `Some(date)` per day of the month.
    pub fn grid(self) -> Vec<Option<NaiveDate>> {
        let blanks = self.leading_blanks() as usize;
        let days = self.days_in_month() as usize;
        let mut cells = Vec::with_capacity(blanks + days);
        cells.resize(blanks, None);
        cells.extend(self.first.iter_days().take(days).map(Some));
        cells
    }

    /// Header label such as `September 2025`.
    pub fn title(self) -> String {
        let name = MONTH_NAMES[self.first.month0() as usize];
        format!("{name} {}", self.first.year())
    }
}

/// Today's date on the viewer's clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO `YYYY-MM-DD` form used for form defaults and keys.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Heading form such as `Friday, September 5, 2025`.
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Compact form such as `9/5/2025`.
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Clock form such as `09:30`.
pub fn time_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Range form such as `09:00 - 10:00`.
pub fn time_range_label(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", time_label(start), time_label(end))
}
