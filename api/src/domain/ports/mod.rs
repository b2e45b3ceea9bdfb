//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod mailer;
pub mod random;

pub use github::GitHubClient;
pub use mailer::{Mailer, OutboundEmail};
pub use random::RandomSource;
