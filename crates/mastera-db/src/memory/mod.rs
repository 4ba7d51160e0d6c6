//! In-memory repositories
//!
//! Process-local stores that honor the same contracts as the PostgreSQL
//! repositories. Used by `STORAGE_BACKEND=memory` and by the service and
//! HTTP test suites.

mod reaction;
mod work;

pub use reaction::InMemoryReactionRepository;
pub use work::InMemoryWorkRepository;
