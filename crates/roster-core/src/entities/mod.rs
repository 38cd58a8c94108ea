//! Domain entities - core business objects

mod availability;
mod member;
mod night;

pub use availability::{Availability, AvailabilityStatus, MemberNightStatus, NightResponse};
pub use member::Member;
pub use night::{NightWithCounts, ScheduleNight};
