//! Inquiries submitted through the website's forms.

mod contact;
pub mod emails;
mod errors;
mod project;
mod service;

pub use contact::ContactSubmission;
pub use errors::{SubmissionError, ValidationError};
pub use project::ProjectSubmission;
pub use service::{InquiryService, InquiryServiceImpl, MailIdentity};


/// Keeps a field only if it carries a non-empty value.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
