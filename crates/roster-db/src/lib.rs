//! # roster-db
//!
//! Database layer implementing the `roster-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and bundled migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations built on `INSERT ... ON CONFLICT` upserts
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{create_pool, run_migrations, DatabaseConfig, PgMemberRepository};
//! use roster_core::{Member, MemberRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!
//!     let members = PgMemberRepository::new(pool);
//!     let ann = members.upsert_by_email(&Member::new("a@x.com", Some("Ann".into()))).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATOR};
pub use repositories::{
    PgAvailabilityRepository, PgMemberRepository, PgNightRepository, PgStoreProbe,
};
