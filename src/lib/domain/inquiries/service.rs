//! Inquiry service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::mailer::{Body, Envelope, Mailer, Sender},
    inquiries::{
        emails::{EmailRole, InquiryEmails},
        ContactSubmission, ProjectSubmission, SubmissionError,
    },
};

/// Who the service's emails come from and who gets notified
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailIdentity {
    /// The business's display name
    pub company_name: String,

    /// The address every email is sent from
    pub sender: String,

    /// The address that receives admin notifications
    pub admin_recipient: String,
}

impl MailIdentity {
    /// Creates a new mail identity
    pub fn new(
        company_name: impl Into<String>,
        sender: impl Into<String>,
        admin_recipient: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            sender: sender.into(),
            admin_recipient: admin_recipient.into(),
        }
    }

    fn sender_for(&self, role: EmailRole) -> Sender {
        match role {
            EmailRole::AdminNotification => Sender::new(&self.company_name, &self.sender),
            EmailRole::SubmitterConfirmation => {
                Sender::new(format!("{} Team", self.company_name), &self.sender)
            }
        }
    }
}

/// Inquiry service
#[async_trait]
pub trait InquiryService: Clone + Send + Sync + 'static {
    /// Mails a contact form submission.
    ///
    /// # Arguments
    /// * `submission` - A validated [`ContactSubmission`].
    ///
    /// # Returns
    /// [`Ok`] once both the admin notification and the confirmation were sent,
    /// or an [`Err`] containing the [`SubmissionError`] that stopped it. The
    /// confirmation is never sent if the admin notification failed.
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;

    /// Mails a project inquiry, with the same ordering as
    /// [`InquiryService::submit_contact`].
    async fn submit_project(&self, submission: &ProjectSubmission) -> Result<(), SubmissionError>;

    /// Sends a diagnostic email from the sender address to itself.
    async fn send_test_mail(&self) -> Result<(), SubmissionError>;
}

#[cfg(test)]
mock! {
    pub InquiryService {}

    impl Clone for InquiryService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl InquiryService for InquiryService {
        async fn submit_contact(
            &self,
            submission: &ContactSubmission,
        ) -> Result<(), SubmissionError>;
        async fn submit_project(
            &self,
            submission: &ProjectSubmission,
        ) -> Result<(), SubmissionError>;
        async fn send_test_mail(&self) -> Result<(), SubmissionError>;
    }
}

/// Inquiry service implementation
#[derive(Debug, Clone)]
pub struct InquiryServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    identity: Arc<MailIdentity>,
}

impl<M> InquiryServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new inquiry service
    pub fn new(mailer: Arc<M>, identity: MailIdentity) -> Self {
        Self {
            mailer,
            identity: Arc::new(identity),
        }
    }

    fn envelope<I: InquiryEmails>(
        &self,
        inquiry: &I,
        role: EmailRole,
    ) -> Result<Envelope, SubmissionError> {
        let email = inquiry.compose(role, &self.identity.company_name)?;

        let (to, reply_to) = match role {
            EmailRole::AdminNotification => (
                self.identity.admin_recipient.clone(),
                Some(inquiry.reply_address().to_string()),
            ),
            EmailRole::SubmitterConfirmation => (inquiry.reply_address().to_string(), None),
        };

        Ok(Envelope {
            from: self.identity.sender_for(role),
            to,
            reply_to,
            subject: email.subject,
            body: Body::Html(email.html),
        })
    }

    async fn dispatch<I: InquiryEmails>(&self, inquiry: &I) -> Result<(), SubmissionError> {
        for role in [
            EmailRole::AdminNotification,
            EmailRole::SubmitterConfirmation,
        ] {
            let envelope = self.envelope(inquiry, role)?;

            if let Err(err) = self.mailer.send(&envelope).await {
                warn!(kind = inquiry.kind(), %role, "failed to send email: {err}");

                return Err(err.into());
            }

            info!(kind = inquiry.kind(), %role, to = %envelope.to, "email sent");
        }

        Ok(())
    }
}

#[async_trait]
impl<M> InquiryService for InquiryServiceImpl<M>
where
    M: Mailer,
{
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        self.dispatch(submission).await
    }

    async fn submit_project(&self, submission: &ProjectSubmission) -> Result<(), SubmissionError> {
        self.dispatch(submission).await
    }

    async fn send_test_mail(&self) -> Result<(), SubmissionError> {
        let envelope = Envelope {
            from: self.identity.sender_for(EmailRole::AdminNotification),
            to: self.identity.sender.clone(),
            reply_to: None,
            subject: "Mail Test Successful".to_string(),
            body: Body::Text("SMTP credentials are working perfectly ✅".to_string()),
        };

        self.mailer.send(&envelope).await?;

        Ok(())
    }
}
