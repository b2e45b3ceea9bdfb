//! Mail transport port trait

use async_trait::async_trait;

use crate::error::MailError;

/// A fully composed plain-text email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Port trait for sending one email
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
