//! # mastera-db
//!
//! Storage layer implementing the `mastera-core` repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx (`PgWorkRepository`, `PgReactionRepository`)
//! - Database models with SQLx `FromRow` derives and entity mappers
//! - Connection pool management and runtime migrations
//! - In-memory repositories with the same semantics, for development and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mastera_db::{create_pool, DatabaseConfig, PgReactionRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/mastera")).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryReactionRepository, InMemoryWorkRepository};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgReactionRepository, PgWorkRepository};
