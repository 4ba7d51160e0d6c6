//! Domain entities - core business objects

mod reaction;
mod work;

pub use reaction::{EngagementCounts, Reaction, ReactionAction, ReactionKind, ReactionState};
pub use work::{parse_tags, Work, WorkStatus};
