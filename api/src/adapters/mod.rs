//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod random;
pub mod smtp;

pub use github::GitHubClientImpl;
pub use random::ThreadRandom;
pub use smtp::SmtpMailer;
