//! Project inquiry email templates

use askama::Template;

use super::{ComposedEmail, EmailRole, InquiryEmails, PLACEHOLDER};
use crate::domain::inquiries::ProjectSubmission;

/// Tells the business about a new project inquiry
#[derive(Debug, Template)]
#[template(path = "emails/project/admin_notification.html", escape = "none")]
pub struct ProjectAdminNotification<'a> {
    /// Submitter's name
    pub name: &'a str,

    /// Submitter's email address
    pub email: &'a str,

    /// Submitter's phone number, or the placeholder
    pub phone: &'a str,

    /// The project's name
    pub project_name: &'a str,

    /// The project's location, or the placeholder
    pub project_location: &'a str,
}

/// Acknowledges a project inquiry
#[derive(Debug, Template)]
#[template(path = "emails/project/confirmation.html", escape = "none")]
pub struct ProjectConfirmation<'a> {
    /// Submitter's name
    pub name: &'a str,

    /// The project's name
    pub project_name: &'a str,

    /// The business's display name
    pub company_name: &'a str,
}

impl InquiryEmails for ProjectSubmission {
    fn kind(&self) -> &'static str {
        "project"
    }

    fn reply_address(&self) -> &str {
        self.email()
    }

    fn compose(&self, role: EmailRole, company_name: &str) -> Result<ComposedEmail, askama::Error> {
        match role {
            EmailRole::AdminNotification => Ok(ComposedEmail {
                subject: format!("New Project Inquiry - {}", self.project_name()),
                html: ProjectAdminNotification {
                    name: self.name(),
                    email: self.email(),
                    phone: self.phone().unwrap_or(PLACEHOLDER),
                    project_name: self.project_name(),
                    project_location: self.project_location().unwrap_or(PLACEHOLDER),
                }
                .render()?,
            }),
            EmailRole::SubmitterConfirmation => Ok(ComposedEmail {
                subject: "We received your project inquiry".to_string(),
                html: ProjectConfirmation {
                    name: self.name(),
                    project_name: self.project_name(),
                    company_name,
                }
                .render()?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_admin_notification_uses_placeholders() -> TestResult {
        let submission = ProjectSubmission::new(
            Some("Bob".to_string()),
            None,
            Some("b@x.com".to_string()),
            Some("Villa".to_string()),
            None,
        )?;

        let email = submission.compose(EmailRole::AdminNotification, "Acme")?;

        assert_eq!(email.subject, "New Project Inquiry - Villa");
        assert!(email.html.contains("<strong>Name:</strong> Bob"));
        assert!(email.html.contains("<strong>Email:</strong> b@x.com"));
        assert!(email.html.contains("<strong>Phone:</strong> -"));
        assert!(email.html.contains("<strong>Project Name:</strong> Villa"));
        assert!(email.html.contains("<strong>Project Location:</strong> -"));

        Ok(())
    }

    #[test]
    fn test_confirmation_mentions_project() -> TestResult {
        let submission = ProjectSubmission::new(
            Some("Bob".to_string()),
            Some("555-0100".to_string()),
            Some("b@x.com".to_string()),
            Some("Villa".to_string()),
            Some("Lisbon".to_string()),
        )?;

        let email = submission.compose(EmailRole::SubmitterConfirmation, "Acme")?;

        assert_eq!(email.subject, "We received your project inquiry");
        assert!(email.html.contains("Hi Bob,"));
        assert!(email.html.contains("<strong>Project:</strong> Villa"));
        assert!(email.html.contains("<strong>Acme Team</strong>"));

        Ok(())
    }

    #[test]
    fn test_compose_is_deterministic() -> TestResult {
        let submission = ProjectSubmission::new(
            Some("Bob".to_string()),
            None,
            Some("b@x.com".to_string()),
            Some("Villa".to_string()),
            Some("Lisbon".to_string()),
        )?;

        for role in [EmailRole::AdminNotification, EmailRole::SubmitterConfirmation] {
            assert_eq!(
                submission.compose(role, "Acme")?,
                submission.compose(role, "Acme")?
            );
        }

        Ok(())
    }
}
