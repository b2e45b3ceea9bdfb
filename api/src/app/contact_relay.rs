//! Contact relay
//!
//! Forwards a contact submission to the site owner as one plain-text email.
//! The relay does not validate; the form does that before calling it.

use std::sync::Arc;

use crate::domain::entities::{ContactSubmission, RelayResult};
use crate::domain::ports::{Mailer, OutboundEmail};

/// Prepended to the submitted subject
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

pub struct ContactRelay<M>
where
    M: Mailer + ?Sized,
{
    mailer: Arc<M>,
    recipient: String,
}

impl<M> ContactRelay<M>
where
    M: Mailer + ?Sized,
{
    pub fn new(mailer: Arc<M>, recipient: String) -> Self {
        Self { mailer, recipient }
    }

    /// Lay out the outbound email for a submission.
    pub fn compose(&self, submission: &ContactSubmission) -> OutboundEmail {
        OutboundEmail {
            from: submission.email.clone(),
            to: self.recipient.clone(),
            subject: format!("{}{}", SUBJECT_PREFIX, submission.subject),
            body: format!(
                "From: {} <{}>\n\n{}",
                submission.name, submission.email, submission.message
            ),
        }
    }

    /// Attempt exactly one send. Failure detail is logged, never returned.
    pub async fn submit(&self, submission: &ContactSubmission) -> RelayResult {
        let email = self.compose(submission);

        match self.mailer.send(&email).await {
            Ok(()) => {
                tracing::info!(subject = %email.subject, "Relayed contact submission");
                RelayResult::Success
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to relay contact submission");
                RelayResult::Failure
            }
        }
    }
}
