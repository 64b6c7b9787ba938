//! Liveness banner

use axum::extract::State;

use crate::{domain::inquiries::InquiryService, infrastructure::http::state::AppState};

/// Confirms the backend is up
pub async fn handler<S: InquiryService>(State(state): State<AppState<S>>) -> String {
    format!("{} Backend Running ✅", state.config.company_name)
}
