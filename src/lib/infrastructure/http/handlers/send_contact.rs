//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::inquiries::{ContactSubmission, InquiryService, ValidationError},
    infrastructure::http::{
        errors::{ApiError, MessageResponse},
        state::AppState,
    },
};

/// Contact form request body
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SendContactBody {
    /// The submitter's name
    name: Option<String>,

    /// The submitter's phone number
    phone: Option<String>,

    /// The submitter's email address
    email: Option<String>,

    /// The message
    message: Option<String>,
}

impl TryFrom<SendContactBody> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(body: SendContactBody) -> Result<Self, Self::Error> {
        ContactSubmission::new(body.name, body.phone, body.email, body.message)
    }
}

/// Mail a contact form submission to the business and back to the submitter
pub async fn handler<S: InquiryService>(
    State(state): State<AppState<S>>,
    request: Result<Json<SendContactBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = request?;

    let submission: ContactSubmission = request.try_into()?;

    state.inquiries.submit_contact(&submission).await?;

    Ok(Json(MessageResponse::new(
        "Contact form email sent successfully",
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::{
            communication::mailer::{MailerError, MockMailer},
            inquiries::tests::MockInquiryService,
        },
        infrastructure::http::{
            errors::MessageResponse,
            router,
            state::tests::{mailer_state, test_cors, test_state},
        },
    };

    #[tokio::test]
    async fn test_send_contact_success() -> TestResult {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut mailer = MockMailer::new();

        let captured = sent.clone();
        mailer.expect_send().times(2).returning(move |envelope| {
            captured.lock().unwrap().push(envelope.clone());
            Ok(())
        });

        let response = TestServer::new(router(mailer_state(mailer), test_cors()))?
            .post("/send-contact")
            .json(&json!({ "name": "Jane", "email": "jane@x.com", "message": "Hi" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<MessageResponse>().message,
            "Contact form email sent successfully"
        );

        let sent = sent.lock().unwrap();

        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "admin@example.com");
        assert_eq!(sent[0].subject, "New Contact Message - Jane");
        assert_eq!(sent[0].reply_to.as_deref(), Some("jane@x.com"));
        assert!(sent[0]
            .body
            .content()
            .contains("<strong>Phone:</strong> -"));
        assert_eq!(sent[1].to, "jane@x.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_contact_missing_fields() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let response = TestServer::new(router(mailer_state(mailer), test_cors()))?
            .post("/send-contact")
            .json(&json!({ "name": "Jane" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<MessageResponse>().message,
            "Required fields missing"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_send_contact_empty_field_is_missing() -> TestResult {
        let response = TestServer::new(router(test_state(None), test_cors()))?
            .post("/send-contact")
            .json(&json!({ "name": "Jane", "email": "", "message": "Hi" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_contact_admin_failure_skips_confirmation() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::UnknownError(anyhow!("connection refused"))));

        let response = TestServer::new(router(mailer_state(mailer), test_cors()))?
            .post("/send-contact")
            .json(&json!({ "name": "Jane", "email": "jane@x.com", "message": "Hi" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<MessageResponse>().message,
            "Email sending failed"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_send_contact_passes_submission_to_service() -> TestResult {
        let mut inquiries = MockInquiryService::new();

        inquiries
            .expect_submit_contact()
            .times(1)
            .withf(|submission| {
                submission.name() == "Jane"
                    && submission.phone() == Some("555-0100")
                    && submission.email() == "jane@x.com"
                    && submission.message() == "Hi"
            })
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(inquiries)), test_cors()))?
            .post("/send-contact")
            .json(&json!({
                "name": "Jane",
                "phone": "555-0100",
                "email": "jane@x.com",
                "message": "Hi",
                "newsletter": true
            }))
            .await;

        response.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    async fn test_send_contact_rejects_non_string_fields() -> TestResult {
        let response = TestServer::new(router(test_state(None), test_cors()))?
            .post("/send-contact")
            .json(&json!({ "name": "Jane", "email": "jane@x.com", "message": 42 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}
