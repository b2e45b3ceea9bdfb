//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for fetched and derived data
//! - `ports`: Trait definitions for external dependencies
//!   (GitHub API, mail transport, randomness)

pub mod entities;
pub mod ports;
