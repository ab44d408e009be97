//! Working schedules and the working-hours collaborator.
//!
//! The engine never gates eligibility on time of day. It only asks a
//! `WorkingHours` implementation for an advisory flag per assigned person,
//! which the caller can use to warn that someone is currently off shift.

use crate::person::Person;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub weekdays: Vec<Weekday>,
    pub start:    NaiveTime,
    pub end:      NaiveTime,
}

impl WorkSchedule {
    pub fn new(weekdays: Vec<Weekday>, start: NaiveTime, end: NaiveTime) -> Self {
        Self { weekdays, start, end }
    }

    /// Monday to Friday, 09:00 to 18:00.
    pub fn office_hours() -> Self {
        Self {
            weekdays: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
            start:    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end:      NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        }
    }

    /// Whether `at` falls inside the schedule. A shift whose end is before
    /// its start runs overnight; its early-morning tail is attributed to the
    /// weekday the shift started on.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let time = at.time();
        let day = at.weekday();
        if self.start <= self.end {
            self.weekdays.contains(&day) && time >= self.start && time < self.end
        } else if time >= self.start {
            self.weekdays.contains(&day)
        } else if time < self.end {
            self.weekdays.contains(&day.pred())
        } else {
            false
        }
    }
}

/// Calendar collaborator: "is this person currently within working hours".
pub trait WorkingHours {
    fn is_working(&self, person: &Person) -> bool;
}

/// Evaluates each person's own schedule at a fixed instant.
/// People without a schedule are treated as always on shift.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleClock {
    pub now: NaiveDateTime,
}

impl ScheduleClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl WorkingHours for ScheduleClock {
    fn is_working(&self, person: &Person) -> bool {
        person
            .schedule
            .as_ref()
            .map(|s| s.contains(self.now))
            .unwrap_or(true)
    }
}

/// Used when the caller supplies no calendar: everyone is on shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysWorking;

impl WorkingHours for AlwaysWorking {
    fn is_working(&self, _person: &Person) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn office_hours_cover_weekday_daytime_only() {
        let s = WorkSchedule::office_hours();
        // 2026-10-19 is a Monday.
        assert!(s.contains(at(2026, 10, 19, 9, 0)));
        assert!(s.contains(at(2026, 10, 19, 17, 59)));
        assert!(!s.contains(at(2026, 10, 19, 18, 0)));
        assert!(!s.contains(at(2026, 10, 19, 8, 59)));
        assert!(!s.contains(at(2026, 10, 18, 12, 0)), "Sunday is off");
    }

    #[test]
    fn overnight_shift_belongs_to_its_start_day() {
        let s = WorkSchedule::new(
            vec![Weekday::Fri],
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        );
        // Friday 2026-10-23 23:00 and Saturday 02:00 are both on shift.
        assert!(s.contains(at(2026, 10, 23, 23, 0)));
        assert!(s.contains(at(2026, 10, 24, 2, 0)));
        assert!(!s.contains(at(2026, 10, 24, 7, 0)));
        assert!(!s.contains(at(2026, 10, 23, 2, 0)), "Friday early morning belongs to Thursday");
    }
}
