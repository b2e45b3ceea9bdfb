//! SMTP adapter
//!
//! Implementation of the mailer port over an authenticated SMTP relay.

pub mod mailer;

pub use mailer::SmtpMailer;
