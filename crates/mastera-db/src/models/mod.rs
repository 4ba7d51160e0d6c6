//! Database models - SQLx-compatible structs for PostgreSQL tables

mod reaction;
mod work;

pub use reaction::{ReactionCountModel, ReactionModel};
pub use work::WorkModel;
