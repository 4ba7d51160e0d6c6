//! Entity to model mappers
//!
//! Conversions between domain entities (mastera-core) and database models.
//! Rows that violate a domain invariant (unknown status, empty owner) are
//! reported as `DatabaseError` rather than silently coerced.

mod reaction;
mod work;

pub use work::WorkInsert;
