//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AvailabilityRepository, MemberRepository, NightRepository, RepoResult, StoreProbe,
};
