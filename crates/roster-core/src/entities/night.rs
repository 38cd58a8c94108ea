//! Schedule night entity - an event members report availability against

use chrono::{NaiveDate, NaiveTime};

use crate::value_objects::NightId;

/// Scheduled night with a date and a time window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleNight {
    pub id: NightId,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

impl ScheduleNight {
    /// Create a new night with a generated id
    ///
    /// Blank notes are normalised to `None`.
    pub fn new(
        night_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: NightId::generate(),
            night_date,
            start_time,
            end_time,
            notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Night with aggregated response counts (recorded rows only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightWithCounts {
    pub night: ScheduleNight,
    pub available_count: i64,
    pub unavailable_count: i64,
}
