//! Mail transport self-test

use axum::{extract::State, http::StatusCode};
use tracing::error;

use crate::{domain::inquiries::InquiryService, infrastructure::http::state::AppState};

/// Sends a diagnostic email to the sender's own address
pub async fn handler<S: InquiryService>(
    State(state): State<AppState<S>>,
) -> (StatusCode, &'static str) {
    match state.inquiries.send_test_mail().await {
        Ok(()) => (StatusCode::OK, "Mail sent successfully"),
        Err(err) => {
            error!("mail test failed: {err}");

            (StatusCode::INTERNAL_SERVER_ERROR, "Mail test failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::{
            communication::mailer::MailerError,
            inquiries::{tests::MockInquiryService, SubmissionError},
        },
        infrastructure::http::{
            router,
            state::tests::{test_cors, test_state},
        },
    };

    #[tokio::test]
    async fn test_mail_test_success() -> TestResult {
        let mut inquiries = MockInquiryService::new();

        inquiries
            .expect_send_test_mail()
            .times(1)
            .returning(|| Ok(()));

        let response = TestServer::new(router(test_state(Some(inquiries)), test_cors()))?
            .get("/mail-test")
            .await;

        response.assert_status_ok();
        response.assert_text("Mail sent successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_mail_test_failure() -> TestResult {
        let mut inquiries = MockInquiryService::new();

        inquiries.expect_send_test_mail().times(1).returning(|| {
            Err(SubmissionError::from(MailerError::UnknownError(anyhow!(
                "authentication failed"
            ))))
        });

        let response = TestServer::new(router(test_state(Some(inquiries)), test_cors()))?
            .get("/mail-test")
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_text("Mail test failed");

        Ok(())
    }
}
