//! Cross-origin policy

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowCredentials, AllowOrigin, CorsLayer};
use tracing::warn;

/// Builds the CORS layer for the configured origins.
///
/// Only `GET` and `POST` are allowed. Origins are matched exactly and only a
/// listed origin is told it may send credentials, so a `*` entry never matches
/// a real origin and an empty list allows no cross-origin callers at all.
pub fn layer(origins: &[String]) -> Result<CorsLayer> {
    let mut values = Vec::new();

    for origin in origins.iter().map(|origin| origin.trim()) {
        match origin {
            "" => continue,
            "*" => {
                warn!("ignoring wildcard CORS origin, list the allowed origins explicitly");
                continue;
            }
            _ => values.push(
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid allowed origin \"{origin}\""))?,
            ),
        }
    }

    let credentialed = values.clone();

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(AllowCredentials::predicate(move |origin, _| {
            credentialed.contains(origin)
        })))
}
