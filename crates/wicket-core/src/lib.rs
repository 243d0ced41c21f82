//! Shared plumbing for Wicket crates: OAuth error rendering, env-backed
//! configuration, and tracing setup.

pub mod config;
pub mod error;
pub mod tracing;
