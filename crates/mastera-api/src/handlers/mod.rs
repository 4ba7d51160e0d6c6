//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod health;
pub mod reactions;
pub mod sections;
pub mod works;
