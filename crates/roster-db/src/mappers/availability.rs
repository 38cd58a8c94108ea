//! Availability model → entity mappers

use roster_core::entities::{
    Availability, AvailabilityStatus, Member, MemberNightStatus, NightResponse, ScheduleNight,
};
use roster_core::error::DomainError;
use roster_core::value_objects::{AvailabilityId, MemberId, NightId};

use crate::models::{AvailabilityModel, MemberNightStatusModel, NightResponseModel};

/// Parse a stored status column
pub fn parse_status(raw: &str) -> Result<AvailabilityStatus, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::store(format!("unexpected stored status '{raw}'")))
}

impl TryFrom<AvailabilityModel> for Availability {
    type Error = DomainError;

    fn try_from(model: AvailabilityModel) -> Result<Self, Self::Error> {
        Ok(Availability {
            id: AvailabilityId::new(model.id),
            member_id: MemberId::new(model.member_id),
            night_id: NightId::new(model.night_id),
            status: parse_status(&model.status)?,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<MemberNightStatusModel> for MemberNightStatus {
    type Error = DomainError;

    fn try_from(model: MemberNightStatusModel) -> Result<Self, Self::Error> {
        let status = parse_status(&model.status)?;
        Ok(MemberNightStatus {
            night: ScheduleNight {
                id: NightId::new(model.night_id),
                night_date: model.night_date,
                start_time: model.start_time,
                end_time: model.end_time,
                notes: model.notes,
            },
            status,
        })
    }
}

impl TryFrom<NightResponseModel> for NightResponse {
    type Error = DomainError;

    fn try_from(model: NightResponseModel) -> Result<Self, Self::Error> {
        let status = parse_status(&model.status)?;
        Ok(NightResponse {
            availability_id: AvailabilityId::new(model.availability_id),
            member: Member {
                id: MemberId::new(model.member_id),
                email: model.email,
                full_name: model.full_name,
                is_admin: model.is_admin,
            },
            status,
            updated_at: model.updated_at,
        })
    }
}
