//! Model → entity mappers
//!
//! Rows carrying a status column convert with `TryFrom`: a status outside the
//! two known values means the table was written around the upsert path and is
//! reported as a storage failure.

mod availability;
mod member;
mod night;

pub use availability::parse_status;
