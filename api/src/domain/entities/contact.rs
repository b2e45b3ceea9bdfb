//! Contact form entities
//!
//! `ContactSubmission` is what the relay receives. `ContactForm` is the
//! caller-side guard that decides whether a submission is sent at all and
//! how long its outcome stays visible.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest message the form accepts, in characters
#[allow(dead_code)]
pub const MAX_MESSAGE_CHARS: usize = 500;

/// How long a success/error status stays up before returning to idle
#[allow(dead_code)]
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(3);

/// A contact form payload. Missing JSON fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Outcome of one relay attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayResult {
    Success,
    Failure,
}

#[allow(dead_code)]
impl RelayResult {
    pub fn is_success(self) -> bool {
        matches!(self, RelayResult::Success)
    }
}

/// Why the form refused to send
#[allow(dead_code)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormRejection {
    #[error("A submission is already in flight")]
    InFlight,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Message is {0} characters, limit is 500")]
    MessageTooLong(usize),
}

#[allow(dead_code)]
impl ContactSubmission {
    /// Required-field and length checks the form applies before sending.
    pub fn check(&self) -> Result<(), FormRejection> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FormRejection::MissingField(field));
            }
        }

        let len = self.message.chars().count();
        if len > MAX_MESSAGE_CHARS {
            return Err(FormRejection::MessageTooLong(len));
        }

        Ok(())
    }
}

/// Visible status of the form
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Caller-side form state: at most one submission in flight, and the
/// outcome clears itself after [`STATUS_CLEAR_DELAY`].
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    in_flight: bool,
    outcome: Option<(RelayResult, Instant)>,
}

#[allow(dead_code)]
impl ContactForm {
    pub fn new(fields: ContactSubmission) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.fields.message.chars().count() <= MAX_MESSAGE_CHARS
    }

    /// Start a submission. On `Ok` the caller must send the returned payload
    /// and then call [`ContactForm::finish`].
    pub fn begin(&mut self) -> Result<ContactSubmission, FormRejection> {
        if self.in_flight {
            return Err(FormRejection::InFlight);
        }
        self.fields.check()?;
        self.in_flight = true;
        Ok(self.fields.clone())
    }

    /// Record the outcome. A success resets the fields.
    pub fn finish(&mut self, result: RelayResult, now: Instant) {
        self.in_flight = false;
        if result.is_success() {
            self.fields = ContactSubmission::default();
        }
        self.outcome = Some((result, now));
    }

    pub fn status(&self, now: Instant) -> SubmitStatus {
        if self.in_flight {
            return SubmitStatus::Submitting;
        }
        match self.outcome {
            Some((result, at)) if now.saturating_duration_since(at) < STATUS_CLEAR_DELAY => {
                match result {
                    RelayResult::Success => SubmitStatus::Success,
                    RelayResult::Failure => SubmitStatus::Error,
                }
            }
            _ => SubmitStatus::Idle,
        }
    }
}
