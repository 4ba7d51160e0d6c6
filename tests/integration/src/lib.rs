//! Integration test utilities for the Mastera API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API backed by in-memory storage.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
