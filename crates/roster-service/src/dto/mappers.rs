//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use roster_core::entities::{
    Availability, MemberNightStatus, NightResponse, NightWithCounts, ScheduleNight,
};

use super::responses::{
    AvailabilityDto, MyAvailabilityEntry, NightDto, NightResponseDto, NightWithCountsDto,
};

// ============================================================================
// Night Mappers
// ============================================================================

impl From<ScheduleNight> for NightDto {
    fn from(night: ScheduleNight) -> Self {
        Self {
            id: night.id.into_inner(),
            night_date: night.night_date,
            start_time: night.start_time,
            end_time: night.end_time,
            notes: night.notes,
        }
    }
}

impl From<NightWithCounts> for NightWithCountsDto {
    fn from(row: NightWithCounts) -> Self {
        let NightWithCounts {
            night,
            available_count,
            unavailable_count,
        } = row;
        Self {
            id: night.id.into_inner(),
            night_date: night.night_date,
            start_time: night.start_time,
            end_time: night.end_time,
            notes: night.notes,
            available_count,
            unavailable_count,
        }
    }
}

// ============================================================================
// Availability Mappers
// ============================================================================

impl From<Availability> for AvailabilityDto {
    fn from(row: Availability) -> Self {
        Self {
            id: row.id.into_inner(),
            member_id: row.member_id.into_inner(),
            night_id: row.night_id.into_inner(),
            status: row.status,
            updated_at: row.updated_at,
        }
    }
}

impl From<MemberNightStatus> for MyAvailabilityEntry {
    fn from(row: MemberNightStatus) -> Self {
        Self {
            night_id: row.night.id.into_inner(),
            night_date: row.night.night_date,
            start_time: row.night.start_time,
            end_time: row.night.end_time,
            notes: row.night.notes,
            status: row.status,
        }
    }
}

impl From<NightResponse> for NightResponseDto {
    fn from(row: NightResponse) -> Self {
        Self {
            id: row.availability_id.into_inner(),
            status: row.status,
            updated_at: row.updated_at,
            member_id: row.member.id.into_inner(),
            email: row.member.email,
            full_name: row.member.full_name,
        }
    }
}
