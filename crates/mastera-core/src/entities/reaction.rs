//! Reaction entity - a user's like or dislike on a work
//!
//! A user holds at most one reaction per work; polarity is a field on that
//! single row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{UserId, WorkId};

/// Reaction polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Storage / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Parse from storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller intent decoded from the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    Like,
    Unlike,
    Dislike,
    Undislike,
}

impl ReactionAction {
    /// Polarity this action targets
    pub fn kind(self) -> ReactionKind {
        match self {
            Self::Like | Self::Unlike => ReactionKind::Like,
            Self::Dislike | Self::Undislike => ReactionKind::Dislike,
        }
    }

    /// Whether this action removes a reaction rather than setting one
    #[inline]
    pub fn is_removal(self) -> bool {
        matches!(self, Self::Unlike | Self::Undislike)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Dislike => "dislike",
            Self::Undislike => "undislike",
        }
    }
}

impl FromStr for ReactionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "unlike" => Ok(Self::Unlike),
            "dislike" => Ok(Self::Dislike),
            "undislike" => Ok(Self::Undislike),
            other => Err(DomainError::InvalidReactionAction(other.to_string())),
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: UserId,
    pub work_id: WorkId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: UserId, work_id: WorkId, kind: ReactionKind) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            work_id,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Switch polarity in place; returns whether anything changed
    pub fn set_kind(&mut self, kind: ReactionKind) -> bool {
        if self.kind == kind {
            return false;
        }
        self.kind = kind;
        self.updated_at = Utc::now();
        true
    }
}

/// Like/dislike totals for one work, counted from reaction rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementCounts {
    pub likes: i64,
    pub dislikes: i64,
}

impl EngagementCounts {
    pub fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }
}

/// A caller's view of a work's reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionState {
    /// The caller's own reaction; always `None` for anonymous callers
    pub reaction: Option<ReactionKind>,
    pub counts: EngagementCounts,
}

impl ReactionState {
    pub fn new(reaction: Option<ReactionKind>, counts: EngagementCounts) -> Self {
        Self { reaction, counts }
    }
}
