//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in mastera-core.

mod error;
mod reaction;
mod work;

pub use reaction::PgReactionRepository;
pub use work::PgWorkRepository;
