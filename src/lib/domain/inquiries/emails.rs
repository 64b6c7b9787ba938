//! Emails sent for each inquiry

use std::fmt;

mod contact;
mod project;

pub use contact::{ContactAdminNotification, ContactConfirmation};
pub use project::{ProjectAdminNotification, ProjectConfirmation};

/// Placeholder rendered for optional fields the submitter left out
pub const PLACEHOLDER: &str = "-";

/// Which of the two emails of an inquiry is being composed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailRole {
    /// Sent to the business, describing the submission
    AdminNotification,

    /// Sent back to the submitter as an acknowledgment
    SubmitterConfirmation,
}

impl fmt::Display for EmailRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailRole::AdminNotification => write!(f, "admin notification"),
            EmailRole::SubmitterConfirmation => write!(f, "submitter confirmation"),
        }
    }
}

/// A rendered subject and HTML body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedEmail {
    /// The subject line
    pub subject: String,

    /// The HTML body
    pub html: String,
}

/// A submission that knows how to describe itself in email
pub trait InquiryEmails: Send + Sync {
    /// A short label for logs, e.g. `contact`
    fn kind(&self) -> &'static str;

    /// The address the submitter wants replies sent to
    fn reply_address(&self) -> &str;

    /// Renders the email for `role`.
    ///
    /// Rendering is deterministic: the same submission, role and company
    /// name always produce the same subject and body.
    fn compose(&self, role: EmailRole, company_name: &str) -> Result<ComposedEmail, askama::Error>;
}
