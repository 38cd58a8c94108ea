//! Database models - SQLx-compatible structs for PostgreSQL rows

mod availability;
mod member;
mod night;

pub use availability::{AvailabilityModel, MemberNightStatusModel, NightResponseModel};
pub use member::MemberModel;
pub use night::{NightModel, NightWithCountsModel};
