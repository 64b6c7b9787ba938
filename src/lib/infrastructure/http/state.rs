//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::inquiries::InquiryService;

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// The business's display name, shown in the liveness banner
    pub company_name: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<S: InquiryService> {
    /// The application configuration
    pub config: Arc<AppConfig>,

    /// Inquiry service
    pub inquiries: Arc<S>,
}

impl<S> AppState<S>
where
    S: InquiryService,
{
    /// Create a new application state
    pub fn new(config: AppConfig, inquiries: S) -> Self {
        Self {
            config: Arc::new(config),
            inquiries: Arc::new(inquiries),
        }
    }
}

impl<S> fmt::Debug for AppState<S>
where
    S: InquiryService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("inquiries", &"InquiryService")
            .finish()
    }
}
