// ABOUTME: Shared pooled HTTP client and JSON GET helper for recipe provider calls
// ABOUTME: Maps transport failures, non-success statuses, and bad bodies to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::errors::{ProviderError, ProviderResult};

/// Wait suggested to the user when a 429 carries no `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest slice of an error body copied into an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Set the shared client's timeouts
///
/// Call once at startup, before the first provider is built. Later calls are
/// ignored. Without it the client uses 30s request / 10s connect timeouts.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Get the shared HTTP client for provider API calls
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Identifies one provider request for error reporting
#[derive(Debug, Clone, Copy)]
pub struct ApiCall<'a> {
    /// Provider tag
    pub provider: &'static str,
    /// Kind of resource requested, also used as the parse-error field name
    pub resource_type: &'static str,
    /// Resource id or search term
    pub resource_id: &'a str,
}

/// Issue a GET and decode the JSON body
///
/// Single attempt, no retry.
///
/// # Errors
///
/// - `NetworkError` if no response arrives or the body cannot be read
/// - `AuthenticationFailed` on 401/402/403
/// - `RateLimitExceeded` on 429
/// - `NotFound` on 404
/// - `ApiError` on any other non-success status
/// - `ParseError` if the body is not the expected JSON
pub async fn get_json<T>(
    client: &Client,
    call: ApiCall<'_>,
    url: &str,
    query: &[(&str, String)],
) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    debug!(
        provider = call.provider,
        resource_type = call.resource_type,
        "Sending provider request to {url}"
    );

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| {
            ProviderError::NetworkError(format!("{} request failed: {e}", call.provider))
        })?;

    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());

    let body = response.text().await.map_err(|e| {
        ProviderError::NetworkError(format!("{} response body unreadable: {e}", call.provider))
    })?;

    if !status.is_success() {
        warn!(
            provider = call.provider,
            status = status.as_u16(),
            "Provider request failed"
        );
        return Err(status_error(call, status, &body, retry_after));
    }

    serde_json::from_str(&body).map_err(|source| ProviderError::ParseError {
        provider: call.provider.to_owned(),
        field: call.resource_type,
        source,
    })
}

fn status_error(
    call: ApiCall<'_>,
    status: StatusCode,
    body: &str,
    retry_after: Option<u64>,
) -> ProviderError {
    let message: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::PAYMENT_REQUIRED | StatusCode::FORBIDDEN => {
            ProviderError::AuthenticationFailed {
                provider: call.provider.to_owned(),
                reason: format!("HTTP {}: {message}", status.as_u16()),
            }
        }
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded {
            provider: call.provider.to_owned(),
            retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            limit_type: "request quota".to_owned(),
        },
        StatusCode::NOT_FOUND => ProviderError::NotFound {
            provider: call.provider.to_owned(),
            resource_type: call.resource_type.to_owned(),
            resource_id: call.resource_id.to_owned(),
        },
        _ => ProviderError::ApiError {
            provider: call.provider.to_owned(),
            status_code: status.as_u16(),
            message,
            retryable: status.is_server_error(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALL: ApiCall<'static> = ApiCall {
        provider: "spoonacular",
        resource_type: "recipe information",
        resource_id: "5",
    };

    #[test]
    fn test_auth_statuses_map_to_authentication_failed() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::PAYMENT_REQUIRED] {
            let error = status_error(CALL, status, "quota", None);
            assert!(matches!(error, ProviderError::AuthenticationFailed { .. }));
        }
    }

    #[test]
    fn test_rate_limit_uses_retry_after() {
        let error = status_error(CALL, StatusCode::TOO_MANY_REQUESTS, "", Some(12));
        assert!(matches!(
            error,
            ProviderError::RateLimitExceeded {
                retry_after_secs: 12,
                ..
            }
        ));
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let error = status_error(CALL, StatusCode::BAD_GATEWAY, "upstream", None);
        assert!(error.is_retryable());
        let error = status_error(CALL, StatusCode::BAD_REQUEST, "bad", None);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_error_body_is_truncated() {
        let body = "x".repeat(1000);
        match status_error(CALL, StatusCode::BAD_REQUEST, &body, None) {
            ProviderError::ApiError { message, .. } => {
                assert_eq!(message.len(), MAX_ERROR_BODY_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
