//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::error;

use super::errors::MessageResponse;

pub mod index;
pub mod mail_test;
pub mod send_contact;
pub mod send_project;

/// Catch panics and return a 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("handler panicked: {details}");

    let response = Json(MessageResponse::new("Internal server error")).into_response();

    (StatusCode::INTERNAL_SERVER_ERROR, response).into_response()
}
