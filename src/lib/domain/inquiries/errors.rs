//! Inquiry errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

/// A submission is missing one or more required fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The listed fields (by wire name) were absent or empty
    #[error("Required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ValidationError {
    /// Builds an error from `(field, is_missing)` pairs, keeping only the missing ones.
    pub(super) fn missing(fields: &[(&'static str, bool)]) -> Self {
        ValidationError::MissingFields(
            fields
                .iter()
                .filter(|(_, missing)| *missing)
                .map(|(field, _)| *field)
                .collect(),
        )
    }
}

/// Errors that can occur while mailing a submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// An email template failed to render
    #[error("Could not render email: {0}")]
    TemplateError(#[from] askama::Error),

    /// The mail transport failed
    #[error("Could not send email: {0}")]
    MailDispatch(MailerError),
}

impl From<MailerError> for SubmissionError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> SubmissionError");

        SubmissionError::MailDispatch(err)
    }
}
