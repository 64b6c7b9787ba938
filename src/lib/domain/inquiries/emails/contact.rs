//! Contact form email templates

use askama::Template;

use super::{ComposedEmail, EmailRole, InquiryEmails, PLACEHOLDER};
use crate::domain::inquiries::ContactSubmission;

/// Tells the business about a new contact message
#[derive(Debug, Template)]
#[template(path = "emails/contact/admin_notification.html", escape = "none")]
pub struct ContactAdminNotification<'a> {
    /// Submitter's name
    pub name: &'a str,

    /// Submitter's email address
    pub email: &'a str,

    /// Submitter's phone number, or the placeholder
    pub phone: &'a str,

    /// The message
    pub message: &'a str,
}

/// Thanks the submitter for getting in touch
#[derive(Debug, Template)]
#[template(path = "emails/contact/confirmation.html", escape = "none")]
pub struct ContactConfirmation<'a> {
    /// Submitter's name
    pub name: &'a str,

    /// The business's display name
    pub company_name: &'a str,
}

impl InquiryEmails for ContactSubmission {
    fn kind(&self) -> &'static str {
        "contact"
    }

    fn reply_address(&self) -> &str {
        self.email()
    }

    fn compose(&self, role: EmailRole, company_name: &str) -> Result<ComposedEmail, askama::Error> {
        match role {
            EmailRole::AdminNotification => Ok(ComposedEmail {
                subject: format!("New Contact Message - {}", self.name()),
                html: ContactAdminNotification {
                    name: self.name(),
                    email: self.email(),
                    phone: self.phone().unwrap_or(PLACEHOLDER),
                    message: self.message(),
                }
                .render()?,
            }),
            EmailRole::SubmitterConfirmation => Ok(ComposedEmail {
                subject: format!("Thank you for contacting {company_name}"),
                html: ContactConfirmation {
                    name: self.name(),
                    company_name,
                }
                .render()?,
            }),
        }
    }
}
