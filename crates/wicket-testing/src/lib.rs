//! Test utilities for Wicket crates.
//!
//! Provides sample token fixtures, `Authorization` header helpers, and mock
//! clients with delegated matchers. Use from tests only, never in production code.

pub mod client;
pub mod fixture;
pub mod request;
