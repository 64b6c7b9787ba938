//! Mailer module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod envelope;
mod errors;

pub use envelope::{Body, Envelope, Sender};
pub use errors::MailerError;

/// Sends a single email
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Sends an email.
    ///
    /// # Arguments
    /// * `envelope` - The [`Envelope`] describing sender, recipient, subject and body.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the provider has accepted the message,
    /// or an [`Err`] containing a [`MailerError`]. There is exactly one attempt.
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, envelope: &Envelope) -> Result<(), MailerError>;
    }
}
