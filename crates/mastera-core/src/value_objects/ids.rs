//! Identifier value objects
//!
//! - `WorkId`: UUID assigned by the catalog when a work is uploaded
//! - `UserId`: opaque subject issued by the external identity provider

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Work identifier (UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(Uuid);

impl WorkId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID value
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| IdParseError::InvalidWorkId)
    }
}

impl Default for WorkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for WorkId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<WorkId> for Uuid {
    fn from(id: WorkId) -> Self {
        id.0
    }
}

impl std::str::FromStr for WorkId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkId::parse(s)
    }
}

/// User identifier as issued by the identity provider (token `sub` claim)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Maximum accepted subject length
    pub const MAX_LEN: usize = 128;

    /// Create a user id, rejecting blank or oversized subjects
    pub fn new(id: impl Into<String>) -> Result<Self, IdParseError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.len() > Self::MAX_LEN {
            return Err(IdParseError::InvalidUserId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the raw subject
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw subject
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::new(s)
    }
}

/// Error when parsing an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid work id format")]
    InvalidWorkId,

    #[error("invalid user id")]
    InvalidUserId,
}
