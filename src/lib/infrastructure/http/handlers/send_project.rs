//! Project inquiry handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::inquiries::{InquiryService, ProjectSubmission, ValidationError},
    infrastructure::http::{
        errors::{ApiError, MessageResponse},
        state::AppState,
    },
};

/// Project inquiry request body, keyed the way the project form sends it
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SendProjectBody {
    /// The submitter's name
    #[serde(rename = "Name")]
    name: Option<String>,

    /// The submitter's phone number
    #[serde(rename = "Phone Number")]
    phone: Option<String>,

    /// The submitter's email address
    #[serde(rename = "Email")]
    email: Option<String>,

    /// The project's name
    #[serde(rename = "Project Name")]
    project_name: Option<String>,

    /// Where the project is
    #[serde(rename = "Project Location")]
    project_location: Option<String>,
}

impl TryFrom<SendProjectBody> for ProjectSubmission {
    type Error = ValidationError;

    fn try_from(body: SendProjectBody) -> Result<Self, Self::Error> {
        ProjectSubmission::new(
            body.name,
            body.phone,
            body.email,
            body.project_name,
            body.project_location,
        )
    }
}

/// Mail a project inquiry to the business and back to the submitter
pub async fn handler<S: InquiryService>(
    State(state): State<AppState<S>>,
    request: Result<Json<SendProjectBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = request?;

    let submission: ProjectSubmission = request.try_into()?;

    state.inquiries.submit_project(&submission).await?;

    Ok(Json(MessageResponse::new(
        "Project inquiry email sent successfully",
    )))
}
