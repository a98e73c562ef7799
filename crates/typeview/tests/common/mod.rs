//! Common test utilities for session testing
//!
//! Provides scripted collaborators that stand in for a user at a terminal.

pub mod mocks;

pub use mocks::*;
