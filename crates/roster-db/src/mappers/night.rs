//! Schedule night model → entity mappers

use roster_core::entities::{NightWithCounts, ScheduleNight};
use roster_core::value_objects::NightId;

use crate::models::{NightModel, NightWithCountsModel};

impl From<NightModel> for ScheduleNight {
    fn from(model: NightModel) -> Self {
        ScheduleNight {
            id: NightId::new(model.id),
            night_date: model.night_date,
            start_time: model.start_time,
            end_time: model.end_time,
            notes: model.notes,
        }
    }
}

impl From<NightWithCountsModel> for NightWithCounts {
    fn from(model: NightWithCountsModel) -> Self {
        NightWithCounts {
            night: ScheduleNight {
                id: NightId::new(model.id),
                night_date: model.night_date,
                start_time: model.start_time,
                end_time: model.end_time,
                notes: model.notes,
            },
            available_count: model.available_count,
            unavailable_count: model.unavailable_count,
        }
    }
}
