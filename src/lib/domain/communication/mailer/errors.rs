//! Mailer errors

use lettre::address::AddressError;
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// An address in the envelope could not be parsed
    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] AddressError),

    /// The message could not be assembled
    #[error("Could not build the email: {0}")]
    BuildError(#[from] lettre::error::Error),

    /// The transport or the provider rejected the message
    #[error("An error occurred while sending the email: {0}")]
    SendError(#[from] lettre::transport::smtp::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
