//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.

mod availability;
mod error;
mod member;
mod night;
mod probe;

pub use availability::PgAvailabilityRepository;
pub use member::PgMemberRepository;
pub use night::PgNightRepository;
pub use probe::PgStoreProbe;
